//! coordml Graph - Mapped Tensor Arguments
//!
//! Couples graph tensors with the coordinate maps of the shape operations
//! applied along an edge, and folds chains of such edges into one.
//!
//! # Key Features
//! - `Tensor` trait and a shape-only `Placeholder`
//! - `MappedTensor` with derived coordinate direction
//! - Composition of mapped tensors across adjacent edges
//! - Helpers wrapping tensors in reduce, extend, permute, and flip maps
//!
//! # Example
//! ```rust
//! use coordml_graph::{reduce_map, Placeholder};
//! use coordml_shape::Shape;
//!
//! let tens = Placeholder::new(Shape::new(&[4, 6]).unwrap()).into_ptr();
//! let arg = reduce_map(tens, 1, &[3]).unwrap();
//! assert_eq!(arg.shape().at(1).unwrap(), 2);
//! assert!(arg.map_io());
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::float_cmp)]

// =============================================================================
// Modules
// =============================================================================

pub mod map;
pub mod mapped;
pub mod tensor;

// =============================================================================
// Re-exports
// =============================================================================

pub use coordml_core::{Error, Result};
pub use map::{
    extend_map, flip_map, identity_map, permute_map, reduce_1d_map, reduce_map, to_args,
};
pub use mapped::MappedTensor;
pub use tensor::{Placeholder, Tensor, TensptrT};
