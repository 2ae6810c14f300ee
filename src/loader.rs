use super::edge::Edge;
use super::error::{GraphError, Result};
use super::graph::Graph;

use npy::NpyData;
use std::convert::TryInto;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One record of a structured `.npy` edge array.
#[derive(Debug, Clone, npy_derive::Serializable)]
pub struct NPEdge {
    pub from: i64,
    pub to: i64,
    pub distance: f64,
}

fn to_vertex_idx(idx: i64) -> Result<usize> {
    idx.try_into().map_err(|_| GraphError::NegativeVertexIndex(idx))
}

/// Convert raw edge records into edges. The vertex count is one more than the
/// largest endpoint index.
pub fn edges_from_records<I: IntoIterator<Item = NPEdge>>(records: I) -> Result<(usize, Vec<Edge>)> {
    let mut edges: Vec<Edge> = Vec::new();
    let mut num_vertices: usize = 0;

    for e in records {
        let edge = Edge::new(to_vertex_idx(e.from)?, to_vertex_idx(e.to)?, e.distance);
        num_vertices = num_vertices.max(edge.from + 1).max(edge.to + 1);
        edges.push(edge);
    }
    Ok((num_vertices, edges))
}

/// Parse a graph from the bytes of a structured `.npy` file with fields
/// `from`, `to` and `distance`. Vertices are named by their index.
pub fn graph_from_npy_bytes(buf: &[u8]) -> Result<Graph> {
    let data: NpyData<NPEdge> = NpyData::from_bytes(buf)?;
    let (num_vertices, edges) = edges_from_records(data.to_vec())?;
    Graph::from_edges(num_vertices, edges)
}

pub fn load_npy_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let mut buf = vec![];
    std::fs::File::open(path.as_ref())?.read_to_end(&mut buf)?;

    let graph = graph_from_npy_bytes(&buf)?;
    info!(
        path = %path.as_ref().display(),
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "loaded graph"
    );
    Ok(graph)
}

/// Rename vertices from `names`, one name per vertex in index order. Empty
/// lines keep the index name. Extra names create additional, unconnected
/// vertices.
pub fn apply_names(graph: &mut Graph, names: &str) -> Result<()> {
    for (i, name) in names.lines().enumerate() {
        let name = name.trim();
        if i < graph.num_vertices() {
            if !name.is_empty() {
                graph.set_vertex_name(i, name)?;
            }
        } else {
            graph.add_vertex(if name.is_empty() { i.to_string() } else { name.to_string() });
        }
    }
    Ok(())
}

pub fn load_names<P: AsRef<Path>>(graph: &mut Graph, path: P) -> Result<()> {
    let names = std::fs::read_to_string(path)?;
    apply_names(graph, &names)
}

#[cfg(test)]
mod tests {
    #[test]
    fn records_become_edges() {
        use super::*;
        let records = vec![
            NPEdge { from: 0, to: 1, distance: 4.0 },
            NPEdge { from: 3, to: 1, distance: 2.5 },
        ];
        let (n, edges) = edges_from_records(records).unwrap();
        assert_eq!(n, 4);
        assert_eq!(edges, vec![Edge::new(0, 1, 4.0), Edge::new(3, 1, 2.5)]);
    }

    #[test]
    fn negative_index_is_rejected() {
        use super::*;
        let records = vec![NPEdge { from: 0, to: -1, distance: 1.0 }];
        match edges_from_records(records) {
            Err(GraphError::NegativeVertexIndex(-1)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn npy_file_roundtrip() {
        use super::*;
        use crate::find_shortest_path;

        let path = std::env::temp_dir().join(format!("shortest_paths_{}.npy", std::process::id()));
        let records = vec![
            NPEdge { from: 0, to: 1, distance: 4.0 },
            NPEdge { from: 1, to: 2, distance: 3.0 },
            NPEdge { from: 0, to: 2, distance: 10.0 },
            NPEdge { from: 2, to: 3, distance: 2.0 },
        ];
        npy::to_file(&path, records).unwrap();

        let g = load_npy_graph(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 4);
        let r = find_shortest_path(&g, Some(0), Some(3));
        assert_eq!(r.path_as_string(&g), "0 → 1 → 2 → 3");
        assert_eq!(r.total_distance, 9.0);
    }

    #[test]
    fn names_are_applied_in_order() {
        use super::*;
        let mut g = Graph::from_edges(2, vec![Edge::new(0, 1, 1.0)]).unwrap();
        apply_names(&mut g, "Wien\n\nLinz\n").unwrap();
        assert_eq!(g.vertex(0).unwrap().name, "Wien");
        assert_eq!(g.vertex(1).unwrap().name, "1");
        assert_eq!(g.vertex(2).unwrap().name, "Linz");
        assert_eq!(g.incident_edges(2).count(), 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        use super::*;
        match load_npy_graph("/nonexistent/edges.npy") {
            Err(GraphError::Io(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
