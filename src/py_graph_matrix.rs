use numpy::ToPyArray;
use pyo3::{create_exception, exceptions::PyValueError, prelude::*};

use crate::{
    error::GraphError,
    graph::{GraphConfig, GraphMatrix},
};

create_exception!(graph_matrix, NodeNotFoundError, PyValueError);
create_exception!(graph_matrix, NoPathError, PyValueError);

fn to_py_err(err: GraphError<String>) -> PyErr {
    match &err {
        GraphError::NodeNotFound { .. } => NodeNotFoundError::new_err(err.to_string()),
        GraphError::NoPath { .. } => NoPathError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// String-keyed graph matrix exposed to Python as `graph_matrix.GraphMatrix`.
#[pyclass(name = "GraphMatrix")]
pub struct PyGraphMatrix {
    graph: GraphMatrix<String>,
}

#[pymethods]
impl PyGraphMatrix {
    #[new]
    #[args(is_bidirectional = "true")]
    fn new(connections: Vec<(String, String)>, is_bidirectional: bool) -> Self {
        let config = GraphConfig::new().with_bidirectional(is_bidirectional);

        PyGraphMatrix {
            graph: GraphMatrix::with_config(connections, &config),
        }
    }

    fn are_connected(&self, a: String, b: String) -> PyResult<bool> {
        self.graph.are_connected(&a, &b).map_err(to_py_err)
    }

    fn find_path_from_to(&self, a: String, b: String) -> PyResult<Vec<String>> {
        self.graph.find_path_from_to(&a, &b).map_err(to_py_err)
    }

    fn are_connected_bfs(&self, a: String, b: String) -> PyResult<bool> {
        self.graph.are_connected_bfs(&a, &b).map_err(to_py_err)
    }

    // Nodes in matrix index order
    fn nodes(&self) -> Vec<String> {
        self.graph.nodes().to_vec()
    }

    fn adjacency_matrix(&self) -> PyResult<PyObject> {
        Python::with_gil(|py| {
            let result_converted: PyObject = self.graph.adjacency().to_pyarray(py).to_owned().into();
            Ok(result_converted)
        })
    }

    fn __len__(&self) -> usize {
        self.graph.len()
    }
}
