//! Map Helpers - Mapped Tensors for Common Shape Operations
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::sync::Arc;

use coordml_coord::{extend, flip, permute, reduce, reduce_1d};
use coordml_core::error::Result;
use coordml_core::types::{DimT, RankT};

use crate::mapped::MappedTensor;
use crate::tensor::TensptrT;

/// Wraps `tensor` with no shape operation.
#[must_use]
pub fn identity_map(tensor: TensptrT) -> MappedTensor {
    MappedTensor::identity(tensor)
}

/// Wraps `tensor` reduced along axes `[rank, rank + red.len())`.
pub fn reduce_map(tensor: TensptrT, rank: RankT, red: &[DimT]) -> Result<MappedTensor> {
    MappedTensor::new(tensor, reduce(rank, red)?)
}

/// Wraps `tensor` collapsed along axis `rank`, with the remaining axes kept
/// dense.
pub fn reduce_1d_map(tensor: TensptrT, rank: RankT) -> Result<MappedTensor> {
    let shaper = reduce_1d(&tensor.shape(), rank)?;
    MappedTensor::new(tensor, shaper)
}

/// Wraps `tensor` extended along axes `[rank, rank + ext.len())`.
pub fn extend_map(tensor: TensptrT, rank: RankT, ext: &[DimT]) -> Result<MappedTensor> {
    MappedTensor::new(tensor, extend(rank, ext)?)
}

/// Wraps `tensor` with its axes reordered.
pub fn permute_map(tensor: TensptrT, order: &[RankT]) -> Result<MappedTensor> {
    MappedTensor::new(tensor, permute(order)?)
}

/// Wraps `tensor` with axis `dim` reversed.
pub fn flip_map(tensor: TensptrT, dim: RankT) -> Result<MappedTensor> {
    MappedTensor::new(tensor, flip(dim)?)
}

/// Wraps each tensor with no shape operation.
#[must_use]
pub fn to_args(tensors: &[TensptrT]) -> Vec<MappedTensor> {
    tensors.iter().map(|t| identity_map(Arc::clone(t))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Placeholder;
    use coordml_coord::identity;
    use coordml_core::types::CoordT;
    use coordml_shape::Shape;

    const ICOORD: CoordT = [
        211.617_234_915_3,
        3.694_131_433_0,
        3.347_118_714_8,
        24.351_130_208_8,
        17.852_016_946_8,
        99.991_165_905_8,
        7.218_200_078_3,
        6.477_681_974_6,
    ];

    fn big_tensor() -> TensptrT {
        Placeholder::new(Shape::new(&[223, 35, 7, 25, 19, 214, 72, 7]).unwrap()).into_ptr()
    }

    fn assert_close(actual: &CoordT, expected: &CoordT) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_reduce_1d_map() {
        let arg = reduce_1d_map(big_tensor(), 5).unwrap();
        assert_eq!(arg.shape().to_list(), vec![223, 35, 7, 25, 19, 72, 7, 1]);
        assert!(arg.map_io());

        let out = arg.get_coorder().forward(&ICOORD);
        let [a, b, c, d, e, f, g, h] = ICOORD;
        assert_close(&out, &[a, b, c, d, e, g, h, f / 214.0]);
    }

    #[test]
    fn test_reduce_map() {
        let arg = reduce_map(big_tensor(), 5, &[2]).unwrap();
        assert_eq!(arg.shape().to_list(), vec![223, 35, 7, 25, 19, 107, 72, 7]);
        assert!(arg.map_io());

        let out = arg.get_coorder().forward(&ICOORD);
        let [a, b, c, d, e, f, g, h] = ICOORD;
        assert_close(&out, &[a, b, c, d, e, f / 2.0, g, h]);
    }

    #[test]
    fn test_extend_map() {
        let arg = extend_map(big_tensor(), 5, &[2, 3]).unwrap();
        assert_eq!(
            arg.shape().to_list(),
            vec![223, 35, 7, 25, 19, 214 * 2, 72 * 3, 7]
        );
        assert!(!arg.map_io());

        let out = arg.get_coorder().forward(&ICOORD);
        let [a, b, c, d, e, f, g, h] = ICOORD;
        assert_close(&out, &[a, b, c, d, e, f / 2.0, g / 3.0, h]);
    }

    #[test]
    fn test_permute_map() {
        let arg = permute_map(big_tensor(), &[3, 5, 2]).unwrap();
        assert_eq!(arg.shape().to_list(), vec![25, 214, 7, 223, 35, 19, 72, 7]);
        assert!(!arg.map_io());

        let out = arg.get_coorder().forward(&ICOORD);
        let [a, b, c, d, e, f, g, h] = ICOORD;
        assert_eq!(out, [d, e, c, a, f, b, g, h]);
    }

    #[test]
    fn test_flip_map() {
        let tens = Placeholder::new(Shape::new(&[3, 2]).unwrap()).into_ptr();
        let arg = flip_map(Arc::clone(&tens), 1).unwrap();
        assert_eq!(arg.shape(), tens.shape());
        assert!(!arg.map_io());

        let out = arg.get_coorder().forward(&[1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(out, [1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_to_args() {
        let shape = Shape::new(&[3, 2]).unwrap();
        let tens = Placeholder::new(shape).into_ptr();
        let tens2 = Placeholder::new(shape).into_ptr();
        let args = to_args(&[Arc::clone(&tens), Arc::clone(&tens2)]);
        assert_eq!(args.len(), 2);

        for (arg, expected) in args.iter().zip([&tens, &tens2]) {
            assert!(Arc::ptr_eq(&arg.get_tensor(), expected));
            assert!(Arc::ptr_eq(&arg.get_shaper(), &identity()));
            assert!(Arc::ptr_eq(&arg.get_coorder(), &identity()));
            assert_eq!(arg.shape(), shape);
        }
    }
}
