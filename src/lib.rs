//! Connectivity queries over a dense adjacency matrix.
//!
//! A [`GraphMatrix`] is built once from a list of connections between
//! arbitrary hashable nodes and then answers read-only questions:
//!
//! - [`GraphMatrix::are_connected`]: reachability by depth-first search
//! - [`GraphMatrix::find_path_from_to`]: a simple path found by depth-first search
//! - [`GraphMatrix::are_connected_bfs`]: reachability by breadth-first search
//!
//! ```
//! use graph_matrix::GraphMatrix;
//!
//! let graph = GraphMatrix::new([("a", "b"), ("b", "c"), ("f", "y")]);
//! assert!(graph.are_connected_bfs(&"c", &"a").unwrap());
//! assert_eq!(graph.find_path_from_to(&"a", &"c").unwrap(), vec!["a", "b", "c"]);
//! assert!(!graph.are_connected(&"a", &"f").unwrap());
//! ```

mod bfs;
mod dfs;
mod edge_list;
mod error;
mod graph;
#[cfg(feature = "python")]
mod py_graph_matrix;
mod traversal;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use edge_list::{read_connections, read_connections_from_path};
pub use error::{GraphError, Result};
pub use graph::{GraphConfig, GraphMatrix};
pub use traversal::Traversal;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn graph_matrix(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<py_graph_matrix::PyGraphMatrix>()?;
    m.add(
        "NodeNotFoundError",
        py.get_type::<py_graph_matrix::NodeNotFoundError>(),
    )?;
    m.add("NoPathError", py.get_type::<py_graph_matrix::NoPathError>())?;
    Ok(())
}
