//! Error Types - coordml Error Handling
//!
//! Provides the error type shared by every coordml crate. Each variant is a
//! caller error detected while constructing a shape, a coordinate, or a
//! coordinate map; once a value is built it can no longer fail.
//!
//! # Key Features
//! - Unified error type for shape, codec, matrix, and transform validation
//! - Messages carry the offending values in list form
//! - Integration with `std::error::Error`
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use thiserror::Error;

use crate::types::{format_list, NElemT, RankT};

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for coordml operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A shape was given a zero dimension.
    #[error("cannot create shape with vector containing zero: {dims}")]
    ZeroDimension {
        /// The rejected dimension list.
        dims: String,
    },

    /// Rank index beyond the rank cap.
    #[error("cannot access out of bounds index {index}")]
    OutOfBounds {
        /// The invalid rank index.
        index: usize,
    },

    /// Flat index not addressable by the shape.
    #[error("cannot get coordinate of index {index} (>= shape {shape})")]
    IndexOutOfRange {
        /// The flat index.
        index: NElemT,
        /// The shape, in list form.
        shape: String,
    },

    /// Coordinate component outside its dimension.
    #[error("cannot get index of bad coordinate {coord} for shape {shape}")]
    BadCoordinate {
        /// The coordinate, in list form.
        coord: String,
        /// The shape, in list form.
        shape: String,
    },

    /// Coordinate whose flat index does not fit in `NElemT`.
    #[error("cannot get index of coordinate {coord} for shape {shape}: index overflows")]
    IndexOverflow {
        /// The coordinate, in list form.
        coord: String,
        /// The shape, in list form.
        shape: String,
    },

    /// Reduce or extend given a zero factor.
    #[error("cannot {op} using zero dimensions {factors}")]
    ZeroFactor {
        /// Name of the transform (`reduce` or `extend`).
        op: &'static str,
        /// The rejected factor list.
        factors: String,
    },

    /// Reduce or extend spilling past the rank cap.
    #[error("cannot {op} shape rank {rank} beyond rank_cap with {counter} {count}")]
    RankOverflow {
        /// Name of the transform (`reduce` or `extend`).
        op: &'static str,
        /// The starting rank.
        rank: RankT,
        /// Label of the factor count (`n_red` or `n_ext`).
        counter: &'static str,
        /// Number of factors.
        count: usize,
    },

    /// Permutation order with repeated axes.
    #[error("permute does not support repeated orders: {order}")]
    InvalidPermutation {
        /// The rejected order, in list form.
        order: String,
    },

    /// Permutation order naming axes beyond the rank cap.
    #[error("cannot permute with ranks greater than cap: {order}")]
    PermuteOutOfRank {
        /// The rejected order, in list form.
        order: String,
    },

    /// Zero pivot hit during LU decomposition.
    #[error("cannot invert matrix: zero pivot at diagonal {index}")]
    SingularMatrix {
        /// Diagonal position of the zero pivot.
        index: usize,
    },

    /// Invalid operation for the given arguments.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of why the operation is invalid.
        message: String,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for coordml operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a zero-dimension error from the rejected dimensions.
    #[must_use]
    pub fn zero_dimension<T: std::fmt::Display>(dims: &[T]) -> Self {
        Self::ZeroDimension {
            dims: format_list(dims),
        }
    }

    /// Creates a new invalid operation error.
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
