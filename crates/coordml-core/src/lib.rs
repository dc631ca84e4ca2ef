//! coordml Core - Foundation Layer for the coordml Coordinate Algebra
//!
//! This crate provides the definitions shared by every coordml crate: the
//! fixed rank cap, dimension and coordinate types, the augmented matrix
//! type, and the unified error type.
//!
//! # Key Features
//! - Compile-time rank cap with stack-allocated shapes and coordinates
//! - Homogeneous matrix type for affine coordinate maps
//! - Unified error type with the offending values in each message
//!
//! # Example
//! ```rust
//! use coordml_core::{format_list, MAT_DIM, RANK_CAP};
//!
//! assert_eq!(MAT_DIM, RANK_CAP as usize + 1);
//! assert_eq!(format_list(&[3, 2]), "[3\\2]");
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

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Error, Result};
pub use types::{
    format_list, CDimT, CoordT, DimT, MatrixT, NElemT, RankT, ShapeT, MAT_DIM, RANK_CAP,
};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{CDimT, CoordT, DimT, MatrixT, NElemT, RankT, MAT_DIM, RANK_CAP};
}
