//! coordml Coord - Affine Coordinate Maps for Shape Operations
//!
//! Every shape-changing operation in a tensor graph is described here as an
//! augmented matrix acting on homogeneous coordinates, paired with its
//! inverse. Maps compose by matrix product and reverse in constant time.
//!
//! # Key Features
//! - Dense matrix kernel with pivot-free LU inversion
//! - `CoordMap` with forward, backward, reverse, and connect
//! - Reduce, extend, permute, and flip constructors with argument checks
//! - Shared identity singleton
//!
//! # Example
//! ```rust
//! use coordml_coord::{permute, reduce};
//!
//! let red = reduce(1, &[4]).unwrap();
//! let perm = permute(&[1, 0]).unwrap();
//! let both = red.connect(&perm);
//!
//! let out = both.forward(&[3.0, 8.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! assert_eq!(&out[..2], &[2.0, 3.0]);
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
#![allow(clippy::needless_range_loop)]
#![allow(clippy::float_cmp)]

// =============================================================================
// Modules
// =============================================================================

pub mod coord;
pub mod matrix;
pub mod transform;

// =============================================================================
// Re-exports
// =============================================================================

pub use coord::{identity, is_identity, CoordMap, CoordptrT};
pub use coordml_core::{Error, Result};
pub use matrix::{identity_matrix, inverse, matmul, matrix_approx_eq, matrix_to_string};
pub use transform::{apply_shaper, extend, flip, permute, reduce, reduce_1d};
