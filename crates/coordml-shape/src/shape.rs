//! Shape - Fixed-Rank Tensor Dimensions
//!
//! Provides the `Shape` type: exactly `RANK_CAP` dimensions, each at least 1.
//! Unspecified trailing dimensions are 1, so a rank-3 shape `{3, 2, 4}` is
//! stored as `[3, 2, 4, 1, 1, 1, 1, 1]`. Dimension 0 is the innermost axis.
//!
//! # Key Features
//! - Stack-allocated, `Copy` dimension storage
//! - Validation on construction and re-assignment
//! - Compatibility queries over dimension ranges
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt;
use core::ops::Index;

use smallvec::SmallVec;

use coordml_core::error::{Error, Result};
use coordml_core::types::{format_list, DimT, NElemT, RankT, ShapeT, RANK_CAP};

/// Number of dimensions stored by every shape.
const NDIMS: usize = RANK_CAP as usize;

/// Dimension list with trailing ones removed.
pub type NarrowDims = SmallVec<[DimT; NDIMS]>;

// =============================================================================
// Shape
// =============================================================================

/// Models an aligned shape using an array of `DimT` values.
///
/// For each dimension at index i, the value is the number of elements along
/// axis i. For example, shape `{3, 2}` models `[[x, y, z], [u, v, w]]`
/// (in cartesian terms, values along the X-axis are dimension 0).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<DimT>", into = "Vec<DimT>")
)]
pub struct Shape {
    dims: ShapeT,
}

impl Default for Shape {
    fn default() -> Self {
        Self::scalar()
    }
}

impl Shape {
    /// Creates a shape from a dimension list.
    ///
    /// Copies at most `RANK_CAP` entries and pads the remainder with 1.
    ///
    /// # Arguments
    /// * `dims` - Dimension values, innermost first
    ///
    /// # Returns
    /// The shape, or an error if any dimension is zero.
    pub fn new(dims: &[DimT]) -> Result<Self> {
        let mut shape = Self::scalar();
        shape.assign(dims)?;
        Ok(shape)
    }

    /// Creates the scalar shape (every dimension is 1).
    #[must_use]
    pub const fn scalar() -> Self {
        Self { dims: [1; NDIMS] }
    }

    /// Replaces the dimensions, re-validating them.
    ///
    /// On error the shape is left unchanged.
    pub fn assign(&mut self, dims: &[DimT]) -> Result<()> {
        if dims.iter().any(|&d| d == 0) {
            return Err(Error::zero_dimension(dims));
        }
        let n = dims.len().min(NDIMS);
        self.dims = [1; NDIMS];
        self.dims[..n].copy_from_slice(&dims[..n]);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the dimension at `idx`.
    ///
    /// # Returns
    /// The dimension, or an error if `idx >= RANK_CAP`.
    pub fn at(&self, idx: RankT) -> Result<DimT> {
        self.dims
            .get(idx as usize)
            .copied()
            .ok_or(Error::OutOfBounds {
                index: idx as usize,
            })
    }

    /// Returns the total number of elements represented by the shape.
    #[must_use]
    pub fn n_elems(&self) -> NElemT {
        self.n_elems_between(0, RANK_CAP)
    }

    /// Returns the number of elements spanned by dimensions `[begin, end)`.
    ///
    /// `end` is clamped to `RANK_CAP`; an empty range spans one element.
    #[must_use]
    pub fn n_elems_between(&self, begin: RankT, end: RankT) -> NElemT {
        let end = end.min(RANK_CAP) as usize;
        let begin = (begin as usize).min(end);
        self.dims[begin..end]
            .iter()
            .fold(1, |acc: NElemT, &d| acc.saturating_mul(NElemT::from(d)))
    }

    /// Returns true if `self[0:idx)` is compatible with `other[0:idx)`.
    ///
    /// Dimensions are compatible when equal; 0 matches anything.
    #[must_use]
    pub fn compatible_before(&self, other: &Shape, idx: RankT) -> bool {
        let idx = idx.min(RANK_CAP) as usize;
        dims_compatible(&self.dims[..idx], &other.dims[..idx])
    }

    /// Returns true if `self[idx:RANK_CAP)` is compatible with
    /// `other[idx:RANK_CAP)`.
    ///
    /// Set idx to 0 to compare the entire shape.
    #[must_use]
    pub fn compatible_after(&self, other: &Shape, idx: RankT) -> bool {
        let idx = idx.min(RANK_CAP) as usize;
        dims_compatible(&self.dims[idx..], &other.dims[idx..])
    }

    /// Returns the dimensions as a slice of length `RANK_CAP`.
    #[must_use]
    pub fn as_slice(&self) -> &[DimT] {
        &self.dims
    }

    /// Returns the dimensions as an array.
    #[must_use]
    pub const fn dims(&self) -> ShapeT {
        self.dims
    }

    /// Returns all `RANK_CAP` dimensions as a vector.
    #[must_use]
    pub fn to_list(&self) -> Vec<DimT> {
        self.dims.to_vec()
    }

    /// Returns an iterator over the dimensions.
    pub fn iter(&self) -> core::slice::Iter<'_, DimT> {
        self.dims.iter()
    }
}

fn dims_compatible(lhs: &[DimT], rhs: &[DimT]) -> bool {
    lhs.iter()
        .zip(rhs.iter())
        .all(|(&a, &b)| a == 0 || b == 0 || a == b)
}

/// Returns the shape's dimensions with trailing ones trimmed.
///
/// The scalar shape narrows to an empty list.
#[must_use]
pub fn narrow_shape(shape: &Shape) -> NarrowDims {
    let used = shape
        .iter()
        .rposition(|&d| d != 1)
        .map_or(0, |last| last + 1);
    SmallVec::from_slice(&shape.as_slice()[..used])
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Index<usize> for Shape {
    type Output = DimT;

    fn index(&self, idx: usize) -> &DimT {
        &self.dims[idx]
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a DimT;
    type IntoIter = core::slice::Iter<'a, DimT>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

impl TryFrom<&[DimT]> for Shape {
    type Error = Error;

    fn try_from(dims: &[DimT]) -> Result<Self> {
        Self::new(dims)
    }
}

impl TryFrom<Vec<DimT>> for Shape {
    type Error = Error;

    fn try_from(dims: Vec<DimT>) -> Result<Self> {
        Self::new(&dims)
    }
}

impl From<Shape> for Vec<DimT> {
    fn from(shape: Shape) -> Self {
        shape.to_list()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_list(&self.dims))
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", format_list(&self.dims))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let scalar = Shape::default();
        for i in 0..RANK_CAP {
            assert_eq!(scalar.at(i).unwrap(), 1);
        }

        let slist: Vec<DimT> = vec![12, 43, 56];
        let vec = Shape::new(&slist).unwrap();
        for (i, &d) in slist.iter().enumerate() {
            assert_eq!(vec.at(i as RankT).unwrap(), d);
        }
        for i in slist.len() as RankT..RANK_CAP {
            assert_eq!(vec.at(i).unwrap(), 1);
        }

        let longlist: Vec<DimT> = vec![4, 23, 44, 52, 19, 92, 12, 2, 5];
        let lvec = Shape::new(&longlist).unwrap();
        assert_eq!(lvec.as_slice(), &longlist[..8]);
    }

    #[test]
    fn test_zero_rejected() {
        let zerolist: Vec<DimT> = vec![43, 2, 5, 33, 0, 2, 7, 1];
        let err = Shape::new(&zerolist).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot create shape with vector containing zero: [43\\2\\5\\33\\0\\2\\7\\1]"
        );
    }

    #[test]
    fn test_at_out_of_bounds() {
        let scalar = Shape::scalar();
        let err = scalar.at(RANK_CAP).unwrap_err();
        assert_eq!(err.to_string(), "cannot access out of bounds index 8");

        let vec = Shape::new(&[12, 43, 56]).unwrap();
        assert!(vec.at(RANK_CAP).is_err());
    }

    #[test]
    fn test_assign() {
        let slist: Vec<DimT> = vec![52, 58, 35, 46, 77, 80];
        let mut shape = Shape::new(&[7, 42]).unwrap();
        shape.assign(&slist).unwrap();
        assert_eq!(&shape.as_slice()[..6], &slist[..]);
        assert_eq!(&shape.as_slice()[6..], &[1, 1]);

        let err = shape.assign(&[3, 0, 11, 89, 1, 1, 1, 1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot create shape with vector containing zero: [3\\0\\11\\89\\1\\1\\1\\1]"
        );
        // failed assignment leaves the shape untouched
        assert_eq!(&shape.as_slice()[..6], &slist[..]);
    }

    #[test]
    fn test_n_elems() {
        let shape = Shape::new(&[11, 12, 16]).unwrap();
        assert_eq!(shape.n_elems(), 11 * 12 * 16);

        let bigshape = Shape::new(&[255; 8]).unwrap();
        assert_eq!(bigshape.n_elems(), 17_878_103_347_812_890_625);

        assert_eq!(shape.n_elems_between(1, 3), 12 * 16);
        assert_eq!(shape.n_elems_between(3, 20), 1);
    }

    #[test]
    fn test_compatible() {
        let slist: Vec<DimT> = vec![20, 48, 10, 27, 65, 74];
        let shape = Shape::new(&slist).unwrap();
        for idx in 0..RANK_CAP {
            assert!(shape.compatible_after(&shape, idx));
            assert!(shape.compatible_before(&shape, idx));
        }

        let insertion_pt = 3;
        let mut ilist = slist.clone();
        ilist.insert(insertion_pt, 2);
        let ishape = Shape::new(&ilist).unwrap();
        for idx in 0..insertion_pt as RankT {
            assert!(!shape.compatible_after(&ishape, idx));
        }
        assert!(shape.compatible_before(&ishape, insertion_pt as RankT));
        assert!(!shape.compatible_before(&ishape, insertion_pt as RankT + 1));

        ilist[insertion_pt] = 3;
        let ishape2 = Shape::new(&ilist).unwrap();
        for idx in 0..=insertion_pt as RankT {
            assert!(!ishape.compatible_after(&ishape2, idx));
        }
        for idx in insertion_pt as RankT + 1..RANK_CAP {
            assert!(ishape.compatible_after(&ishape2, idx));
        }
    }

    #[test]
    fn test_to_string() {
        let shape = Shape::new(&[24, 11, 12, 16, 7, 71, 1, 1]).unwrap();
        assert_eq!(shape.to_string(), "[24\\11\\12\\16\\7\\71\\1\\1]");
    }

    #[test]
    fn test_iteration() {
        let shape = Shape::new(&[3, 2]).unwrap();
        let collected: Vec<DimT> = shape.iter().copied().collect();
        assert_eq!(collected, vec![3, 2, 1, 1, 1, 1, 1, 1]);
        assert_eq!((&shape).into_iter().count(), RANK_CAP as usize);
        assert_eq!(shape[1], 2);
    }

    #[test]
    fn test_narrow_shape() {
        let shape = Shape::new(&[3, 1, 4, 1, 1]).unwrap();
        assert_eq!(narrow_shape(&shape).as_slice(), &[3, 1, 4]);
        assert!(narrow_shape(&Shape::scalar()).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_fixed_list() {
        let shape = Shape::new(&[3, 2]).unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, "[3,2,1,1,1,1,1,1]");

        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);

        assert!(serde_json::from_str::<Shape>("[3,0,1,1,1,1,1,1]").is_err());
    }
}
