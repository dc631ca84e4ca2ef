//! Transform Constructors - Reduce, Extend, Permute, and Flip Maps
//!
//! Builds the coordinate maps for each shape operation. Every constructor
//! validates its arguments up front; degenerate arguments that describe a
//! no-op log a warning and return the shared identity map.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, warn};

use coordml_core::error::{Error, Result};
use coordml_core::types::{format_list, CDimT, CoordT, DimT, MatrixT, RankT, ShapeT, RANK_CAP};
use coordml_shape::Shape;

use crate::coord::{identity, CoordMap, CoordptrT};
use crate::matrix::{identity_matrix, zero_matrix};

/// Number of axes addressed by a coordinate map.
const NDIMS: usize = RANK_CAP as usize;

/// A full permutation order over every axis.
type OrderT = SmallVec<[RankT; NDIMS]>;

/// Outputs closer than this to an integer are rounded rather than ceiled.
const SHAPE_EPSILON: CDimT = 1e-6;

// =============================================================================
// Scaling Transforms
// =============================================================================

/// Validates reduce/extend factors, returning false when the map is a no-op.
fn check_factors(
    op: &'static str,
    counter: &'static str,
    rank: RankT,
    factors: &[DimT],
) -> Result<bool> {
    if factors.iter().any(|&f| f == 0) {
        return Err(Error::ZeroFactor {
            op,
            factors: format_list(factors),
        });
    }
    if usize::from(rank) + factors.len() > NDIMS {
        return Err(Error::RankOverflow {
            op,
            rank,
            counter,
            count: factors.len(),
        });
    }
    Ok(factors.iter().any(|&f| f != 1))
}

/// Builds a diagonal map scaling axes `[rank, rank + factors.len())`.
fn scale_map<F: Fn(DimT) -> f64>(rank: RankT, factors: &[DimT], scale: F) -> Result<CoordptrT> {
    let mut fwd = identity_matrix();
    for (i, &f) in factors.iter().enumerate() {
        let axis = usize::from(rank) + i;
        fwd[axis][axis] = scale(f);
    }
    Ok(Arc::new(CoordMap::new(fwd)?))
}

/// Creates a map shrinking axes `[rank, rank + factors.len())`.
///
/// Forward divides each axis by its factor; backward multiplies.
///
/// # Arguments
/// * `rank` - First reduced axis
/// * `factors` - Divisor for each consecutive axis
///
/// # Returns
/// The reduce map, or an error for a zero factor or an axis range past
/// `RANK_CAP`. Empty or all-one factors yield the identity map.
pub fn reduce(rank: RankT, factors: &[DimT]) -> Result<CoordptrT> {
    if !check_factors("reduce", "n_red", rank, factors)? {
        if factors.is_empty() {
            warn!("reducing with empty vector ... will do nothing");
        }
        return Ok(identity());
    }
    scale_map(rank, factors, |f| 1.0 / f64::from(f))
}

/// Creates a map growing axes `[rank, rank + factors.len())`.
///
/// Forward multiplies each axis by its factor; backward divides.
///
/// # Returns
/// The extend map, or an error for a zero factor or an axis range past
/// `RANK_CAP`. Empty or all-one factors yield the identity map.
pub fn extend(rank: RankT, factors: &[DimT]) -> Result<CoordptrT> {
    if !check_factors("extend", "n_ext", rank, factors)? {
        if factors.is_empty() {
            warn!("extending with empty vector ... will do nothing");
        }
        return Ok(identity());
    }
    scale_map(rank, factors, f64::from)
}

// =============================================================================
// Permute
// =============================================================================

/// Completes `order` into a full permutation, appending unmentioned axes in
/// ascending order.
fn full_order(order: &[RankT]) -> Result<OrderT> {
    if order.iter().any(|&axis| axis >= RANK_CAP) {
        return Err(Error::PermuteOutOfRank {
            order: format_list(order),
        });
    }
    let mut visited = [false; NDIMS];
    for &axis in order {
        if std::mem::replace(&mut visited[usize::from(axis)], true) {
            return Err(Error::InvalidPermutation {
                order: format_list(order),
            });
        }
    }
    let mut full: OrderT = order.iter().copied().collect();
    full.extend((0..RANK_CAP).filter(|&axis| !visited[usize::from(axis)]));
    Ok(full)
}

/// Creates a map reading output axis `i` from input axis `order[i]`.
///
/// Axes not named in `order` follow in ascending order. The inverse is the
/// transpose, so no decomposition is needed.
///
/// # Returns
/// The permute map, or an error for an axis past `RANK_CAP` or a repeated
/// axis. An empty or ascending order yields the identity map.
pub fn permute(order: &[RankT]) -> Result<CoordptrT> {
    if order.is_empty() {
        warn!("permuting with same dimensions ... will do nothing");
        return Ok(identity());
    }
    let full = full_order(order)?;
    if full.iter().enumerate().all(|(i, &axis)| usize::from(axis) == i) {
        warn!("permuting with same dimensions ... will do nothing");
        return Ok(identity());
    }
    debug!(order = %format_list(&full), "building permute map");

    let mut fwd: MatrixT = zero_matrix();
    fwd[NDIMS][NDIMS] = 1.0;
    let mut bwd = fwd;
    for (i, &axis) in full.iter().enumerate() {
        fwd[i][usize::from(axis)] = 1.0;
        bwd[usize::from(axis)][i] = 1.0;
    }
    Ok(Arc::new(CoordMap::from_pair(fwd, bwd)))
}

// =============================================================================
// Flip
// =============================================================================

/// Creates a map reversing axis `dim`.
///
/// The flipped component `c` becomes `-c - 1`; the index codec later decodes
/// that to `dim_size - 1 - c`. The map is its own inverse.
///
/// # Returns
/// The flip map. A `dim` past `RANK_CAP` yields the identity map.
pub fn flip(dim: RankT) -> Result<CoordptrT> {
    if dim >= RANK_CAP {
        warn!("flipping dimension out of rank_cap ... will do nothing");
        return Ok(identity());
    }
    let d = usize::from(dim);
    let mut fwd = identity_matrix();
    fwd[d][d] = -1.0;
    fwd[d][NDIMS] = -1.0;
    Ok(Arc::new(CoordMap::new(fwd)?))
}

// =============================================================================
// Composites
// =============================================================================

/// Creates a map collapsing axis `rank` of `shape` and moving it last.
///
/// The remaining axes shift down to stay dense.
///
/// # Arguments
/// * `shape` - Shape of the reduced tensor
/// * `rank` - Axis to collapse
pub fn reduce_1d(shape: &Shape, rank: RankT) -> Result<CoordptrT> {
    let dim = shape.at(rank)?;
    let red = reduce(rank, &[dim])?;
    if rank == RANK_CAP - 1 {
        return Ok(red);
    }
    let order: OrderT = (0..RANK_CAP)
        .filter(|&axis| axis != rank)
        .chain(std::iter::once(rank))
        .collect();
    let perm = permute(&order)?;
    Ok(Arc::new(red.connect(&perm)))
}

// =============================================================================
// Shape Conversion
// =============================================================================

/// Applies a shape map to a shape's dimensions.
///
/// Negative outputs `cd` are read as `-cd - 1`. Outputs within `1e-6` of an
/// integer round to it; others round up.
///
/// # Returns
/// The converted shape, or an error if a dimension becomes zero or exceeds
/// `DimT::MAX`.
pub fn apply_shaper(shaper: &CoordMap, shape: &Shape) -> Result<Shape> {
    let mut input: CoordT = [0.0; NDIMS];
    for (c, &d) in input.iter_mut().zip(shape.iter()) {
        *c = CDimT::from(d);
    }
    let output = shaper.forward(&input);

    let mut dims: ShapeT = [1; NDIMS];
    for (d, &cd) in dims.iter_mut().zip(output.iter()) {
        let cd = if cd < 0.0 { -cd - 1.0 } else { cd };
        let nearest = cd.round();
        let cd = if (cd - nearest).abs() < SHAPE_EPSILON {
            nearest
        } else {
            cd.ceil()
        };
        if cd > CDimT::from(DimT::MAX) {
            return Err(Error::invalid_operation(format!(
                "converted dimension {cd} exceeds maximum {}",
                DimT::MAX
            )));
        }
        *d = cd as DimT;
    }
    Shape::new(&dims)
}

// =============================================================================
// Tests
// =============================================================================
