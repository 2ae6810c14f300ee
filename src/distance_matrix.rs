use super::dijkstra::shortest_distances_from;
use super::error::Result;
use super::graph::Graph;

use ndarray::{Array2, ArrayViewMut1};
use pbr::ProgressBar;
use std::path::Path;

fn fill_row(graph: &Graph, src: usize, mut row: ArrayViewMut1<f64>) {
    for (cell, d) in row.iter_mut().zip(shortest_distances_from(graph, src)) {
        *cell = d;
    }
}

/// All-pairs shortest distances: entry `[i, j]` is the distance from vertex
/// `i` to vertex `j`, or infinity if `j` cannot be reached.
pub fn distance_matrix(graph: &Graph) -> Array2<f64> {
    let n = graph.num_vertices();
    let mut matrix = Array2::from_elem((n, n), f64::INFINITY);
    for (src, row) in matrix.outer_iter_mut().enumerate() {
        fill_row(graph, src, row);
    }
    matrix
}

/// Same as `distance_matrix`, but shows a progress bar on stdout. Meant for
/// large graphs loaded from file.
pub fn distance_matrix_with_progress(graph: &Graph) -> Array2<f64> {
    let n = graph.num_vertices();
    let mut matrix = Array2::from_elem((n, n), f64::INFINITY);

    let mut pb = ProgressBar::new(n as u64);
    pb.message("Single source searches ");
    for (src, row) in matrix.outer_iter_mut().enumerate() {
        fill_row(graph, src, row);
        pb.inc();
    }
    pb.finish_print("done");

    matrix
}

/// Entries of `matrix` in row-major order: entry `[i, j]` lands at `i * n + j`.
pub fn into_row_major_vec(matrix: Array2<f64>) -> Vec<f64> {
    if matrix.is_standard_layout() {
        matrix.into_raw_vec()
    } else {
        matrix.iter().cloned().collect()
    }
}

/// Write `matrix` to a `.npy` file as a flat array of `n * n` values in
/// row-major order. `npy` only writes one-dimensional arrays.
pub fn write_distance_matrix<P: AsRef<Path>>(path: P, matrix: Array2<f64>) -> Result<()> {
    npy::to_file(path, into_row_major_vec(matrix))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        use super::*;
        use crate::road_network::road_network;

        let g = road_network();
        let m = distance_matrix(&g);
        let n = g.num_vertices();
        assert_eq!(m.dim(), (n, n));
        for i in 0..n {
            assert_eq!(m[[i, i]], 0.0);
            for j in 0..n {
                assert_eq!(m[[i, j]], m[[j, i]]);
            }
        }
    }

    #[test]
    fn matrix_agrees_with_single_queries() {
        use super::*;
        use crate::find_shortest_path;

        let mut g = Graph::new();
        for name in ["A", "B", "C", "D", "E"].iter() {
            g.add_vertex(*name);
        }
        g.add_edge(0, 1, 4.0).unwrap();
        g.add_edge(1, 2, 3.0).unwrap();
        g.add_edge(0, 2, 10.0).unwrap();
        g.add_edge(2, 3, 2.0).unwrap();

        let m = distance_matrix(&g);
        for i in 0..5 {
            for j in 0..5 {
                let r = find_shortest_path(&g, Some(i), Some(j));
                assert_eq!(m[[i, j]], r.total_distance);
            }
        }
        assert_eq!(m[[0, 3]], 9.0);
        assert_eq!(m[[4, 0]], f64::INFINITY);
    }

    #[test]
    fn row_major_vec_keeps_row_order() {
        use super::*;
        use crate::road_network::road_network;

        let g = road_network();
        let n = g.num_vertices();
        let m = distance_matrix(&g);
        let flat = into_row_major_vec(m.clone());
        assert_eq!(flat.len(), n * n);
        for i in 0..n {
            for j in 0..n {
                assert_eq!(flat[i * n + j], m[[i, j]]);
            }
        }

        // A transposed (column-major) view is flattened in logical order too.
        let t = m.t().to_owned();
        let flat_t = into_row_major_vec(t);
        assert_eq!(flat_t[1], m[[1, 0]]);
    }

    #[test]
    fn written_matrix_has_n_squared_entries() {
        use super::*;
        use crate::road_network::road_network;
        use npy::NpyData;
        use std::io::Read;

        let g = road_network();
        let n = g.num_vertices();
        let m = distance_matrix(&g);

        let path = std::env::temp_dir()
            .join(format!("shortest_paths_matrix_{}.npy", std::process::id()));
        write_distance_matrix(&path, m.clone()).unwrap();

        let mut buf = vec![];
        std::fs::File::open(&path).unwrap().read_to_end(&mut buf).unwrap();
        std::fs::remove_file(&path).unwrap();

        let data: NpyData<f64> = NpyData::from_bytes(&buf).unwrap();
        let values = data.to_vec();
        assert_eq!(values.len(), n * n);
        let wien = g.find_vertex("Wien").unwrap();
        let villach = g.find_vertex("Villach").unwrap();
        assert_eq!(values[wien * n + villach], 380.0);
        assert_eq!(values[villach * n + wien], m[[villach, wien]]);
    }
}
