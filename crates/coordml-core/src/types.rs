//! Types - Rank, Dimension, and Coordinate Definitions
//!
//! Every shape and coordinate in coordml is a fixed-length array of
//! [`RANK_CAP`] entries, and every coordinate map is a square matrix of
//! [`MAT_DIM`] rows acting on homogeneous coordinates.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::fmt::{Display, Write};

// =============================================================================
// Scalar Types
// =============================================================================

/// Type used for rank (axis) indices.
pub type RankT = u8;

/// Type used for shape dimensions.
#[cfg(not(feature = "wide-dims"))]
pub type DimT = u16;

/// Type used for shape dimensions.
#[cfg(feature = "wide-dims")]
pub type DimT = u32;

/// Type used for coordinate components.
///
/// Signed and fractional: flip encodes a reversed axis as `-c - 1`, and
/// reduction yields fractional coordinates.
pub type CDimT = f64;

/// Type used for flattened element counts and indices.
///
/// With 16-bit dimensions the largest count is `(2^16)^8 = 2^128`; counts
/// past `u64::MAX` saturate.
pub type NElemT = u64;

// =============================================================================
// Fixed-Rank Arrays
// =============================================================================

/// Number of dimensions in every shape and coordinate.
pub const RANK_CAP: RankT = 8;

/// Side length of a coordinate-map matrix (homogeneous coordinates).
pub const MAT_DIM: usize = RANK_CAP as usize + 1;

/// Array holding the dimensions of a shape.
pub type ShapeT = [DimT; RANK_CAP as usize];

/// Array holding a coordinate.
pub type CoordT = [CDimT; RANK_CAP as usize];

/// Dense augmented matrix acting on homogeneous coordinates.
pub type MatrixT = [[f64; MAT_DIM]; MAT_DIM];

// =============================================================================
// Formatting
// =============================================================================

/// Formats values as a backslash-delimited list, e.g. `[3\2\1]`.
///
/// This is the list form used in error messages, shape strings, and
/// coordinate-map keys.
pub fn format_list<T: Display>(values: &[T]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push('\\');
        }
        let _ = write!(out, "{value}");
    }
    out.push(']');
    out
}
