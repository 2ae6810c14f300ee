use super::edge::Edge;
use super::error::{GraphError, Result};
use super::vertex::Vertex;

/// An undirected, weighted graph. Vertices and edges are addressed by their
/// insertion index; for each vertex we keep the indices of all edges touching
/// it so that a path search never has to scan the full edge list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    incident_edge_idxs: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn with_capacity(num_vertices: usize, num_edges: usize) -> Graph {
        Graph {
            vertices: Vec::with_capacity(num_vertices),
            edges: Vec::with_capacity(num_edges),
            incident_edge_idxs: Vec::with_capacity(num_vertices),
        }
    }

    /// Build a graph with `num_vertices` vertices named after their index and
    /// the given edges.
    pub fn from_edges(num_vertices: usize, edges: Vec<Edge>) -> Result<Graph> {
        let mut graph = Graph::with_capacity(num_vertices, edges.len());
        for i in 0..num_vertices {
            graph.add_vertex(i.to_string());
        }
        for e in edges {
            graph.add_edge(e.from, e.to, e.distance)?;
        }
        Ok(graph)
    }

    pub fn add_vertex<S: Into<String>>(&mut self, name: S) -> usize {
        self.vertices.push(Vertex::new(name));
        self.incident_edge_idxs.push(Vec::new());
        self.vertices.len() - 1
    }

    /// Add an undirected edge. Both endpoints must already be vertices of the
    /// graph. Parallel edges and self-loops are kept as-is.
    pub fn add_edge(&mut self, from: usize, to: usize, distance: f64) -> Result<usize> {
        for &idx in [from, to].iter() {
            if idx >= self.vertices.len() {
                return Err(GraphError::UnknownVertex {
                    idx,
                    num_vertices: self.vertices.len(),
                });
            }
        }

        let edge_idx = self.edges.len();
        self.edges.push(Edge::new(from, to, distance));
        self.incident_edge_idxs[from].push(edge_idx);
        if from != to {
            self.incident_edge_idxs[to].push(edge_idx);
        }
        Ok(edge_idx)
    }

    pub fn set_vertex_name<S: Into<String>>(&mut self, vertex_idx: usize, name: S) -> Result<()> {
        let num_vertices = self.vertices.len();
        let vertex = self
            .vertices
            .get_mut(vertex_idx)
            .ok_or(GraphError::UnknownVertex { idx: vertex_idx, num_vertices })?;
        vertex.name = name.into();
        Ok(())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex_idx: usize) -> bool {
        vertex_idx < self.vertices.len()
    }

    pub fn vertex(&self, vertex_idx: usize) -> Option<&Vertex> {
        self.vertices.get(vertex_idx)
    }

    pub fn edge(&self, edge_idx: usize) -> Option<&Edge> {
        self.edges.get(edge_idx)
    }

    /// All edges touching `vertex_idx`, paired with their edge index. Empty for
    /// vertices outside the graph.
    pub fn incident_edges<'a>(&'a self, vertex_idx: usize) -> impl Iterator<Item = (usize, &'a Edge)> + 'a {
        self.incident_edge_idxs
            .get(vertex_idx)
            .map(|idxs| idxs.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&edge_idx| (edge_idx, &self.edges[edge_idx]))
    }

    /// Index of the first vertex with the given name.
    pub fn find_vertex(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.name == name)
    }

    pub fn vertex_idx(&self, name: &str) -> Result<usize> {
        self.find_vertex(name)
            .ok_or_else(|| GraphError::UnknownName(name.to_string()))
    }
}
