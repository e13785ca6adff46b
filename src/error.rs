//! Error types for graph matrix queries.
//!
//! Query errors are generic over the node type so the offending nodes come
//! back to the caller as values, not as pre-rendered strings.

use thiserror::Error;

/// Result type for graph matrix operations over nodes of type `N`.
pub type Result<T, N> = std::result::Result<T, GraphError<N>>;

/// Errors raised by graph construction input and connectivity queries.
#[derive(Debug, Error)]
pub enum GraphError<N> {
    /// A query argument is not part of the graph's node universe.
    #[error("node {node:?} not in the matrix")]
    NodeNotFound { node: N },

    /// Both nodes exist but no walk connects them.
    #[error("no path from {from:?} to {to:?}")]
    NoPath { from: N, to: N },

    /// A connection line in an edge list could not be read as a pair.
    #[error("invalid connection on line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    /// Reading an edge list failed; the underlying error is the source
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
