//! # coordml - Coordinate Map Algebra for Tensor Graphs
//!
//! coordml describes shape-changing tensor operations as invertible affine
//! maps over fixed-rank coordinates, so that shape inference, coordinate
//! lookups, and gradient routing all share one representation.
//!
//! ## Core Features
//!
//! - **Shapes**: fixed-rank dimensions with zero rejection and index codec
//! - **Coordinate Maps**: forward/backward matrices with O(1) reverse and
//!   composition by product
//! - **Transforms**: reduce, extend, permute, flip, and `reduce_1d`
//! - **Mapped Tensors**: shaper/coorder pairs folded across graph edges
//! - **Logging**: `tracing` diagnostics with an env-filtered subscriber
//!
//! # Quick Start
//!
//! ```rust
//! use coordml::prelude::*;
//!
//! let tens = Placeholder::new(Shape::new(&[6, 4]).unwrap()).into_ptr();
//! let arg = reduce_map(tens, 0, &[3]).unwrap();
//! assert_eq!(arg.shape().at(0).unwrap(), 2);
//!
//! let coord = arg.get_coorder().forward(&[5.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! assert!((coord[0] - 5.0 / 3.0).abs() < 1e-12);
//! ```
//!
//! # Feature Flags
//!
//! - `full` (default): enables `serde`
//! - `serde`: `Shape` serialization as a list of `RANK_CAP` dimensions
//! - `wide-dims`: 32-bit dimensions
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// Re-exports
// =============================================================================

pub use coordml_coord as coord;
pub use coordml_core as core;
pub use coordml_graph as graph;
pub use coordml_shape as shape;

pub mod logging;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for coordml.
///
/// ```rust
/// use coordml::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use coordml_core::{
        CDimT, CoordT, DimT, Error, MatrixT, NElemT, RankT, Result, MAT_DIM, RANK_CAP,
    };

    // Shapes
    pub use coordml_shape::{coordinate, index, narrow_shape, Shape};

    // Coordinate maps
    pub use coordml_coord::{
        apply_shaper, extend, flip, identity, is_identity, permute, reduce, reduce_1d, CoordMap,
        CoordptrT,
    };

    // Mapped tensors
    pub use coordml_graph::{
        extend_map, flip_map, identity_map, permute_map, reduce_1d_map, reduce_map, to_args,
        MappedTensor, Placeholder, Tensor, TensptrT,
    };
}

// =============================================================================
// Version Information
// =============================================================================

/// Returns the version of coordml.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
