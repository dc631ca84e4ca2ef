//! Coordinate Maps - Invertible Affine Maps over Fixed-Rank Coordinates
//!
//! A `CoordMap` is a forward augmented matrix paired with its inverse. Both
//! matrices are shared behind `Arc`, so reversing or cloning a map never
//! copies or re-inverts a matrix.
//!
//! Coordinates are treated as column vectors in homogeneous form: the input
//! is padded with a trailing `1` and `out[i] = Σ_j M[i][j] · in[j]`.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::fmt;
use std::sync::{Arc, OnceLock};

use coordml_core::error::Result;
use coordml_core::types::{CoordT, MatrixT, MAT_DIM, RANK_CAP};

use crate::matrix::{identity_matrix, inverse, matmul, matrix_to_string, zero_matrix};

/// Shared handle to an immutable coordinate map.
pub type CoordptrT = Arc<CoordMap>;

// =============================================================================
// CoordMap
// =============================================================================

/// An invertible affine map between coordinate spaces.
#[derive(Clone)]
pub struct CoordMap {
    fwd: Arc<MatrixT>,
    bwd: Arc<MatrixT>,
}

impl CoordMap {
    /// Creates a map from its forward matrix, inverting it once.
    ///
    /// # Arguments
    /// * `fwd` - Forward augmented matrix
    ///
    /// # Returns
    /// The map, or `Error::SingularMatrix` if `fwd` cannot be inverted.
    pub fn new(fwd: MatrixT) -> Result<Self> {
        let bwd = inverse(&fwd)?;
        Ok(Self::from_pair(fwd, bwd))
    }

    /// Creates a map by filling a zeroed matrix whose homogeneous corner is
    /// already set to 1.
    pub fn from_init<F: FnOnce(&mut MatrixT)>(init: F) -> Result<Self> {
        let mut fwd = zero_matrix();
        fwd[RANK_CAP as usize][RANK_CAP as usize] = 1.0;
        init(&mut fwd);
        Self::new(fwd)
    }

    /// Pairs a forward matrix with an inverse the caller already knows.
    pub(crate) fn from_pair(fwd: MatrixT, bwd: MatrixT) -> Self {
        Self {
            fwd: Arc::new(fwd),
            bwd: Arc::new(bwd),
        }
    }

    /// Maps a coordinate through the forward matrix.
    #[must_use]
    pub fn forward(&self, coord: &CoordT) -> CoordT {
        apply(&self.fwd, coord)
    }

    /// Maps a coordinate through the inverse matrix.
    #[must_use]
    pub fn backward(&self, coord: &CoordT) -> CoordT {
        apply(&self.bwd, coord)
    }

    /// Returns the inverse map. Shares both matrices with `self`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            fwd: Arc::clone(&self.bwd),
            bwd: Arc::clone(&self.fwd),
        }
    }

    /// Returns the map applying `self` first and `other` second.
    #[must_use]
    pub fn connect(&self, other: &CoordMap) -> Self {
        Self::from_pair(
            matmul(&other.fwd, &self.fwd),
            matmul(&self.bwd, &other.bwd),
        )
    }

    /// Returns the forward matrix.
    #[must_use]
    pub fn fwd_matrix(&self) -> &MatrixT {
        &self.fwd
    }

    /// Returns the inverse matrix.
    #[must_use]
    pub fn bwd_matrix(&self) -> &MatrixT {
        &self.bwd
    }

    /// Returns true if both matrices carry only integral entries, so the
    /// integer lattice maps onto itself in both directions.
    #[must_use]
    pub fn is_bijective(&self) -> bool {
        self.fwd
            .iter()
            .chain(self.bwd.iter())
            .flatten()
            .all(|v| v.fract() == 0.0)
    }
}

/// Multiplies `m` with the homogeneous form of `coord`.
fn apply(m: &MatrixT, coord: &CoordT) -> CoordT {
    let mut out: CoordT = [0.0; RANK_CAP as usize];
    for (o, row) in out.iter_mut().zip(m.iter()) {
        *o = coord
            .iter()
            .zip(row.iter())
            .map(|(c, w)| c * w)
            .sum::<f64>()
            + row[MAT_DIM - 1];
    }
    out
}

impl PartialEq for CoordMap {
    fn eq(&self, other: &Self) -> bool {
        self.fwd == other.fwd
    }
}

impl fmt::Display for CoordMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", matrix_to_string(&self.fwd))
    }
}

impl fmt::Debug for CoordMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordMap")
            .field("fwd", &matrix_to_string(&self.fwd))
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Identity
// =============================================================================

static IDENTITY: OnceLock<CoordptrT> = OnceLock::new();

/// Returns the process-wide identity map.
#[must_use]
pub fn identity() -> CoordptrT {
    Arc::clone(IDENTITY.get_or_init(|| {
        Arc::new(CoordMap::from_pair(identity_matrix(), identity_matrix()))
    }))
}

/// Returns true for an absent map, the identity singleton, or any map whose
/// forward matrix is exactly the identity matrix.
#[must_use]
pub fn is_identity(coorder: Option<&CoordMap>) -> bool {
    let Some(coorder) = coorder else {
        return true;
    };
    if IDENTITY
        .get()
        .is_some_and(|id| std::ptr::eq(Arc::as_ptr(id), coorder))
    {
        return true;
    }
    *coorder.fwd == identity_matrix()
}

// =============================================================================
// Tests
// =============================================================================
