//! Mapped Tensor - Tensor Arguments Seen Through a Shape Operation
//!
//! A `MappedTensor` is the argument a graph edge hands to its parent: the
//! child tensor, the shaper that turns the child's shape into the shape the
//! parent sees, and the coorder that moves coordinates between the two.
//!
//! `map_io` records the coorder's direction. When the child has more
//! elements than the presented shape (a reduction), the coorder maps child
//! coordinates to presented coordinates. Otherwise it maps presented
//! coordinates back to child coordinates.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use coordml_coord::{apply_shaper, identity, is_identity, CoordptrT};
use coordml_core::error::{Error, Result};
use coordml_shape::Shape;

use crate::tensor::TensptrT;

// =============================================================================
// Helpers
// =============================================================================

/// Returns true if `map` is the shared identity instance.
fn is_singleton(map: &CoordptrT) -> bool {
    Arc::ptr_eq(map, &identity())
}

/// Reverses a map, keeping the identity singleton shared.
fn reversed(map: &CoordptrT) -> CoordptrT {
    if is_singleton(map) {
        Arc::clone(map)
    } else {
        Arc::new(map.reverse())
    }
}

/// Composes `first` then `second`, skipping the product for identities.
fn compose(first: &CoordptrT, second: &CoordptrT) -> CoordptrT {
    if is_identity(Some(first.as_ref())) {
        return Arc::clone(second);
    }
    if is_identity(Some(second.as_ref())) {
        return Arc::clone(first);
    }
    Arc::new(first.connect(second))
}

// =============================================================================
// MappedTensor
// =============================================================================

/// A tensor paired with the shape and coordinate maps of one graph edge.
#[derive(Clone)]
pub struct MappedTensor {
    tensor: TensptrT,
    shaper: CoordptrT,
    map_io: bool,
    coorder: CoordptrT,
    shape: Shape,
}

impl MappedTensor {
    /// Wraps `tensor` behind `shaper`, deriving the coorder.
    ///
    /// The coorder is the shaper itself when the shaper is the identity or
    /// the presented shape is smaller than the tensor, and the shaper's
    /// reverse otherwise.
    ///
    /// # Arguments
    /// * `tensor` - Child tensor
    /// * `shaper` - Map from the tensor's shape to the presented shape
    ///
    /// # Returns
    /// The argument, or an error if the shaper produces an invalid shape.
    pub fn new(tensor: TensptrT, shaper: CoordptrT) -> Result<Self> {
        let shape = apply_shaper(&shaper, &tensor.shape())?;
        let map_io = tensor.shape().n_elems() > shape.n_elems();
        let coorder = if map_io || is_singleton(&shaper) {
            Arc::clone(&shaper)
        } else {
            Arc::new(shaper.reverse())
        };
        Ok(Self {
            tensor,
            shaper,
            map_io,
            coorder,
            shape,
        })
    }

    /// Wraps `tensor` with an explicit coorder and direction.
    pub fn with_coorder(
        tensor: TensptrT,
        shaper: CoordptrT,
        map_io: bool,
        coorder: CoordptrT,
    ) -> Result<Self> {
        let shape = apply_shaper(&shaper, &tensor.shape())?;
        Ok(Self {
            tensor,
            shaper,
            map_io,
            coorder,
            shape,
        })
    }

    /// Wraps `tensor` with the identity maps.
    #[must_use]
    pub fn identity(tensor: TensptrT) -> Self {
        let shape = tensor.shape();
        let id = identity();
        Self {
            tensor,
            shaper: Arc::clone(&id),
            map_io: false,
            coorder: id,
            shape,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the shape presented to the parent.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the child tensor.
    #[must_use]
    pub fn get_tensor(&self) -> TensptrT {
        Arc::clone(&self.tensor)
    }

    /// Returns the shape map.
    #[must_use]
    pub fn get_shaper(&self) -> CoordptrT {
        Arc::clone(&self.shaper)
    }

    /// Returns the coordinate map.
    #[must_use]
    pub fn get_coorder(&self) -> CoordptrT {
        Arc::clone(&self.coorder)
    }

    /// Returns true if the coorder maps child coordinates to presented
    /// coordinates.
    #[must_use]
    pub fn map_io(&self) -> bool {
        self.map_io
    }

    // -------------------------------------------------------------------------
    // Composition
    // -------------------------------------------------------------------------

    /// Folds `lhs`, an argument applied on top of this one's presented
    /// shape, into a single argument over this one's tensor.
    ///
    /// The composite direction is recomputed from this tensor and the final
    /// shape. Each coorder disagreeing with it is reversed before the two
    /// are composed: this argument's first when mapping child to presented,
    /// `lhs`'s first otherwise.
    ///
    /// # Returns
    /// The composite argument, or an error if `lhs` does not wrap a tensor
    /// of this argument's presented shape or the composite shaper produces
    /// an invalid shape.
    pub fn connect(&self, lhs: &MappedTensor) -> Result<MappedTensor> {
        let presented = lhs.tensor.shape();
        if presented != self.shape {
            return Err(Error::invalid_operation(format!(
                "cannot connect mapped tensor of shape {} onto tensor of shape {presented}",
                self.shape
            )));
        }
        let shaper = compose(&self.shaper, &lhs.shaper);
        let shape = apply_shaper(&shaper, &self.tensor.shape())?;
        let map_io = self.tensor.shape().n_elems() > shape.n_elems();

        let inner = if self.map_io == map_io {
            Arc::clone(&self.coorder)
        } else {
            reversed(&self.coorder)
        };
        let outer = if lhs.map_io == map_io {
            Arc::clone(&lhs.coorder)
        } else {
            reversed(&lhs.coorder)
        };
        let coorder = if map_io {
            compose(&inner, &outer)
        } else {
            compose(&outer, &inner)
        };
        debug!(shape = %shape, map_io, "connected mapped tensors");

        Ok(MappedTensor {
            tensor: Arc::clone(&self.tensor),
            shaper,
            map_io,
            coorder,
            shape,
        })
    }

    /// Wraps `tensor`, a tensor of this argument's presented shape, so it
    /// maps back onto this argument's child shape.
    ///
    /// The coorder is shared and the direction flips.
    ///
    /// # Returns
    /// The reversed argument, or an error if `tensor` does not have the
    /// presented shape.
    pub fn reverse(&self, tensor: TensptrT) -> Result<MappedTensor> {
        let shape = tensor.shape();
        if shape != self.shape {
            return Err(Error::invalid_operation(format!(
                "cannot reverse mapped tensor of shape {} with tensor of shape {shape}",
                self.shape
            )));
        }
        MappedTensor::with_coorder(
            tensor,
            reversed(&self.shaper),
            !self.map_io,
            Arc::clone(&self.coorder),
        )
    }
}

impl fmt::Debug for MappedTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedTensor")
            .field("tensor", &self.tensor)
            .field("shape", &self.shape)
            .field("map_io", &self.map_io)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
