//! Tensor Interface - Shaped Graph Nodes
//!
//! The mapped-argument layer only needs to know a node's shape, so a tensor
//! here is anything that can report one.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::fmt::Debug;
use std::sync::Arc;

use coordml_shape::Shape;

/// A node in a tensor graph with a known shape.
pub trait Tensor: Debug + Send + Sync {
    /// Returns the shape of the tensor.
    fn shape(&self) -> Shape;
}

/// Shared handle to a graph tensor.
pub type TensptrT = Arc<dyn Tensor>;

/// A shape-only tensor standing in for a node whose data lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    shape: Shape,
    label: String,
}

impl Placeholder {
    /// Creates an unlabeled placeholder.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            label: String::new(),
        }
    }

    /// Creates a labeled placeholder.
    #[must_use]
    pub fn with_label(shape: Shape, label: impl Into<String>) -> Self {
        Self {
            shape,
            label: label.into(),
        }
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Wraps the placeholder in a shared handle.
    #[must_use]
    pub fn into_ptr(self) -> TensptrT {
        Arc::new(self)
    }
}

impl Tensor for Placeholder {
    fn shape(&self) -> Shape {
        self.shape
    }
}
