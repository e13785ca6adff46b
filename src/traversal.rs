use crate::{error::Result, graph::GraphMatrix};

/// A connectivity algorithm over a [`GraphMatrix`].
///
/// Implementations validate both nodes before touching the matrix, so an
/// unknown node always surfaces as [`GraphError::NodeNotFound`].
///
/// [`GraphError::NodeNotFound`]: crate::GraphError::NodeNotFound
pub trait Traversal<T> {
    // Short label used in logs and on the command line
    fn name(&self) -> &'static str;

    /// Whether any walk leads from `a` to `b`.
    fn are_connected(&self, graph: &GraphMatrix<T>, a: &T, b: &T) -> Result<bool, T>;
}
