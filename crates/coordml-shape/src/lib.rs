//! coordml Shape - Fixed-Rank Shapes and Index Conversion
//!
//! Provides the `Shape` type shared by every tensor in the graph, and the
//! codec between flat element indices and per-dimension coordinates.
//!
//! # Key Features
//! - Shapes capped at `RANK_CAP` dimensions, padded with 1
//! - Zero dimensions rejected on construction
//! - Innermost-first mixed-radix index codec with negative wraparound
//! - Optional `serde` support as a fixed-length dimension list
//!
//! # Example
//! ```rust
//! use coordml_shape::{coordinate, index, Shape};
//!
//! let shape = Shape::new(&[3, 2]).unwrap();
//! assert_eq!(shape.n_elems(), 6);
//!
//! let coord = coordinate(&shape, 4).unwrap();
//! assert_eq!(index(&shape, &coord).unwrap(), 4);
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::iter_without_into_iter)]

// =============================================================================
// Modules
// =============================================================================

pub mod index;
pub mod shape;

// =============================================================================
// Re-exports
// =============================================================================

pub use coordml_core::{Error, Result};
pub use index::{coordinate, index};
pub use shape::{narrow_shape, NarrowDims, Shape};
