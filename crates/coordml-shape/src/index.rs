//! Index Codec - Flat Index and Coordinate Conversion
//!
//! Converts between a flat element index and a per-dimension coordinate for
//! a given [`Shape`]. Dimension 0 varies fastest.
//!
//! Negative coordinate components wrap from the top of their dimension, so a
//! flipped component `-c - 1` decodes to `dim - 1 - c`.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use coordml_core::error::{Error, Result};
use coordml_core::types::{format_list, CDimT, CoordT, NElemT, RANK_CAP};

use crate::shape::Shape;

/// Decodes a flat index into a coordinate.
///
/// # Arguments
/// * `shape` - Shape the index addresses
/// * `index` - Flat index, must be below `shape.n_elems()`
///
/// # Returns
/// The coordinate, or an error if the index is out of range.
pub fn coordinate(shape: &Shape, index: NElemT) -> Result<CoordT> {
    if index >= shape.n_elems() {
        return Err(Error::IndexOutOfRange {
            index,
            shape: shape.to_string(),
        });
    }
    let mut coord: CoordT = [0.0; RANK_CAP as usize];
    let mut rest = index;
    for (c, &d) in coord.iter_mut().zip(shape.iter()) {
        let d = NElemT::from(d);
        *c = (rest % d) as CDimT;
        rest /= d;
    }
    Ok(coord)
}

/// Encodes a coordinate into a flat index.
///
/// Each negative component `c` is first normalized to `dim + c`; fractional
/// components are truncated after normalization.
///
/// # Arguments
/// * `shape` - Shape the coordinate addresses
/// * `coord` - Coordinate to encode
///
/// # Returns
/// The flat index, `Error::BadCoordinate` if any normalized component falls
/// outside `[0, dim)`, or `Error::IndexOverflow` if the index exceeds
/// `NElemT::MAX`.
pub fn index(shape: &Shape, coord: &CoordT) -> Result<NElemT> {
    let mut out: NElemT = 0;
    // None once the running stride no longer fits; only nonzero
    // components past that point overflow
    let mut stride: Option<NElemT> = Some(1);
    for (&c, &d) in coord.iter().zip(shape.iter()) {
        let dim = CDimT::from(d);
        let normalized = if c < 0.0 { dim + c } else { c };
        if !(0.0..dim).contains(&normalized) {
            return Err(Error::BadCoordinate {
                coord: format_list(coord),
                shape: shape.to_string(),
            });
        }
        let component = normalized.trunc() as NElemT;
        if component != 0 {
            out = stride
                .and_then(|s| component.checked_mul(s))
                .and_then(|term| out.checked_add(term))
                .ok_or_else(|| Error::IndexOverflow {
                    coord: format_list(coord),
                    shape: shape.to_string(),
                })?;
        }
        stride = stride.and_then(|s| s.checked_mul(NElemT::from(d)));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coordml_core::types::DimT;

    #[test]
    fn test_round_trip() {
        let shape = Shape::new(&[9, 3, 7, 8, 5]).unwrap();
        for i in 0..shape.n_elems() {
            let coord = coordinate(&shape, i).unwrap();
            for (&c, &d) in coord.iter().zip(shape.iter()) {
                assert!(c < CDimT::from(d));
            }
            assert_eq!(index(&shape, &coord).unwrap(), i);
        }
    }

    #[test]
    fn test_innermost_first() {
        let shape = Shape::new(&[3, 2]).unwrap();
        let coord = coordinate(&shape, 4).unwrap();
        assert_eq!(&coord[..2], &[1.0, 1.0]);
        assert_eq!(index(&shape, &[2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap(), 5);
    }

    #[test]
    fn test_bad_coordinate() {
        let shape = Shape::new(&[9, 3, 7, 8, 5]).unwrap();
        let mut coord: CoordT = [0.0; RANK_CAP as usize];
        for (c, &d) in coord.iter_mut().zip(shape.iter()) {
            *c = CDimT::from(d);
        }
        let err = index(&shape, &coord).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot get index of bad coordinate [9\\3\\7\\8\\5\\1\\1\\1] \
             for shape [9\\3\\7\\8\\5\\1\\1\\1]"
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let shape = Shape::new(&[9, 3, 7, 8, 5]).unwrap();
        let err = coordinate(&shape, shape.n_elems()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot get coordinate of index 7560 (>= shape [9\\3\\7\\8\\5\\1\\1\\1])"
        );
    }

    #[test]
    fn test_negative_wraps_from_top() {
        let shape = Shape::new(&[4, 3]).unwrap();
        // flip encoding of c=1 along axis 0 is -2, which decodes to 4-1-1 = 2
        let flipped = [-2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let plain = [2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(index(&shape, &flipped).unwrap(), index(&shape, &plain).unwrap());

        let too_low = [-5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert!(index(&shape, &too_low).is_err());
    }

    #[test]
    fn test_index_overflow() {
        // element count exceeds u64 even though every dimension is valid
        let shape = Shape::new(&[DimT::MAX; RANK_CAP as usize]).unwrap();
        let last = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        let err = index(&shape, &last).unwrap_err();
        assert!(matches!(err, Error::IndexOverflow { .. }));

        assert_eq!(index(&shape, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap(), 1);
        let low = [2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(
            index(&shape, &low).unwrap(),
            2 + 3 * NElemT::from(DimT::MAX)
        );
    }
}
