use std::hash::Hash;

use ndarray::{Array2, ArrayView2};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    bfs::BreadthFirst,
    dfs::DepthFirst,
    error::{GraphError, Result},
    traversal::Traversal,
};

/// Construction options for a [`GraphMatrix`].
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Mirror every connection so that `from -> to` also yields `to -> from`.
    pub is_bidirectional: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            is_bidirectional: true,
        }
    }
}

impl GraphConfig {
    /// Create the default configuration (bidirectional).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether connections are symmetric.
    pub fn with_bidirectional(mut self, is_bidirectional: bool) -> Self {
        self.is_bidirectional = is_bidirectional;
        self
    }
}

/// A graph stored as a dense boolean adjacency matrix.
///
/// Nodes are assigned matrix indices in order of first appearance while
/// scanning the connection list (`from` before `to` within a pair). Every
/// node reaches itself, so the diagonal is always set. The structure is
/// built once and never mutated; every query is read-only.
#[derive(Debug, Clone)]
pub struct GraphMatrix<T> {
    // Node to row/column index
    elements: FxHashMap<T, usize>,

    // Reverse of `elements`, the position is the index
    index_to_elements: Vec<T>,

    // matrix[(i, j)] is true when j is one hop away from i
    matrix: Array2<bool>,

    is_bidirectional: bool,
}

impl<T: Eq + Hash + Clone> GraphMatrix<T> {
    /// Build a bidirectional graph from a list of connections.
    pub fn new<I>(connections: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::with_config(connections, &GraphConfig::default())
    }

    /// Build a graph from a list of connections with explicit options.
    ///
    /// Duplicate and self-referential connections are accepted; setting an
    /// entry that is already true changes nothing.
    pub fn with_config<I>(connections: I, config: &GraphConfig) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut elements: FxHashMap<T, usize> = FxHashMap::default();
        let mut index_to_elements: Vec<T> = Vec::new();

        let mut assign = |node: T| -> usize {
            if let Some(&index) = elements.get(&node) {
                return index;
            }
            let index = index_to_elements.len();
            index_to_elements.push(node.clone());
            elements.insert(node, index);
            index
        };

        let edges: Vec<(usize, usize)> = connections
            .into_iter()
            .map(|(from, to)| {
                let from = assign(from);
                (from, assign(to))
            })
            .collect();

        let size = index_to_elements.len();
        let mut matrix: Array2<bool> = Array2::from_elem((size, size), false);
        matrix.diag_mut().fill(true);

        for &(from, to) in &edges {
            matrix[(from, to)] = true;
            if config.is_bidirectional {
                matrix[(to, from)] = true;
            }
        }

        tracing::debug!(
            nodes = size,
            connections = edges.len(),
            is_bidirectional = config.is_bidirectional,
            "built adjacency matrix"
        );
        tracing::trace!(matrix = ?matrix, "adjacency matrix");

        GraphMatrix {
            elements,
            index_to_elements,
            matrix,
            is_bidirectional: config.is_bidirectional,
        }
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.index_to_elements.len()
    }

    /// Whether the graph was built from an empty connection list.
    pub fn is_empty(&self) -> bool {
        self.index_to_elements.is_empty()
    }

    /// Whether every connection was mirrored at construction.
    pub fn is_bidirectional(&self) -> bool {
        self.is_bidirectional
    }

    /// Whether `node` appears in any connection.
    pub fn contains(&self, node: &T) -> bool {
        self.elements.contains_key(node)
    }

    /// Matrix index assigned to `node`, if it is part of the graph.
    pub fn index_of(&self, node: &T) -> Option<usize> {
        self.elements.get(node).copied()
    }

    /// Node stored at matrix `index`, if the index is in range.
    pub fn node_at(&self, index: usize) -> Option<&T> {
        self.index_to_elements.get(index)
    }

    /// All nodes, in index order.
    pub fn nodes(&self) -> &[T] {
        &self.index_to_elements
    }

    /// Read-only view of the adjacency matrix.
    pub fn adjacency(&self) -> ArrayView2<'_, bool> {
        self.matrix.view()
    }

    /// Fail with [`GraphError::NodeNotFound`] unless `node` is part of the
    /// graph. Returns the node's matrix index.
    pub fn check_membership(&self, node: &T) -> Result<usize, T> {
        self.index_of(node).ok_or_else(|| GraphError::NodeNotFound { node: node.clone() })
    }

    /// Nodes one hop away from `node`, excluding `node` itself, in index order.
    pub fn neighbours(&self, node: &T) -> Result<Vec<&T>, T> {
        let index = self.check_membership(node)?;

        Ok(self
            .next_steps(index, &FxHashSet::default())
            .into_iter()
            .map(|i| &self.index_to_elements[i])
            .collect())
    }

    /// Indices one hop away from `index` that are neither `index` itself nor
    /// in `visited`, in ascending order.
    pub(crate) fn next_steps(&self, index: usize, visited: &FxHashSet<usize>) -> Vec<usize> {
        self.matrix
            .row(index)
            .iter()
            .enumerate()
            .filter(|(i, &edge)| edge && *i != index && !visited.contains(i))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any walk leads from `a` to `b`, answered by depth-first search.
    ///
    /// A missing path is `Ok(false)`; a node outside the graph is still an
    /// error.
    pub fn are_connected(&self, a: &T, b: &T) -> Result<bool, T> {
        DepthFirst.are_connected(self, a, b)
    }

    /// Find a simple path from `a` to `b` by depth-first search.
    ///
    /// The path starts with `a`, ends with `b` and never repeats a node. It is
    /// not necessarily the shortest one.
    pub fn find_path_from_to(&self, a: &T, b: &T) -> Result<Vec<T>, T> {
        DepthFirst.find_path(self, a, b)
    }

    /// Whether any walk leads from `a` to `b`, answered by breadth-first search.
    pub fn are_connected_bfs(&self, a: &T, b: &T) -> Result<bool, T> {
        BreadthFirst.are_connected(self, a, b)
    }
}
