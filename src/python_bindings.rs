use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArrayDyn};
use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use crate::{distance_matrix, find_shortest_path, Edge, Graph, GraphError};
use crate::distance_matrix::into_row_major_vec;

fn build_graph(
    src: PyReadonlyArrayDyn<usize>,
    dest: PyReadonlyArrayDyn<usize>,
    distances: PyReadonlyArrayDyn<f64>,
    num_vertices: Option<usize>,
) -> Result<Graph, GraphError> {
    let from = src.as_array();
    let to = dest.as_array();
    let len = distances.as_array();

    if from.len() != to.len() || from.len() != len.len() {
        return Err(GraphError::MismatchedLengths(from.len(), to.len(), len.len()));
    }

    let mut edges: Vec<Edge> = Vec::with_capacity(from.len());
    let mut n: usize = num_vertices.unwrap_or(0);

    for ((&f, &t), &d) in from.iter().zip(to.iter()).zip(len.iter()) {
        if num_vertices.is_none() {
            n = n.max(f + 1).max(t + 1);
        }
        edges.push(Edge::new(f, t, d));
    }

    Graph::from_edges(n, edges)
}

fn to_py_err(e: GraphError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// A Python module implemented in Rust.
#[pymodule]
fn shortest_paths(_py: Python, m: &PyModule) -> PyResult<()> {
    #[pyfn(m, "find_shortest_path")]
    #[text_signature = "(src, dest, distances, start, end, num_vertices=None, /)"]
    fn find_shortest_path_py<'py>(
        py: Python<'py>,
        src: PyReadonlyArrayDyn<usize>,
        dest: PyReadonlyArrayDyn<usize>,
        distances: PyReadonlyArrayDyn<f64>,
        start: Option<usize>,
        end: Option<usize>,
        num_vertices: Option<usize>,
    ) -> PyResult<(&'py PyArray1<usize>, &'py PyArray1<usize>, f64)> {
        let graph = build_graph(src, dest, distances, num_vertices).map_err(to_py_err)?;

        let result = find_shortest_path(&graph, start, end);

        Ok((
            result.path.into_pyarray(py),
            result.edges.into_pyarray(py),
            result.total_distance,
        ))
    }

    #[pyfn(m, "distance_matrix")]
    #[text_signature = "(src, dest, distances, num_vertices=None, /)"]
    fn distance_matrix_py<'py>(
        py: Python<'py>,
        src: PyReadonlyArrayDyn<usize>,
        dest: PyReadonlyArrayDyn<usize>,
        distances: PyReadonlyArrayDyn<f64>,
        num_vertices: Option<usize>,
    ) -> PyResult<&'py PyArray2<f64>> {
        let graph = build_graph(src, dest, distances, num_vertices).map_err(to_py_err)?;

        let n = graph.num_vertices();
        into_row_major_vec(distance_matrix(&graph))
            .into_pyarray(py)
            .reshape([n, n])
    }

    Ok(())
}
