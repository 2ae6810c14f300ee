use super::graph::Graph;
use super::path_result::PathResult;

use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, trace, warn};

// Entries are (tentative distance, vertex index). Ties on distance pop the
// lowest vertex index first, so results do not depend on heap internals.
type MinHeap<T> = BinaryHeap<Reverse<T>>;

/// For each vertex: the previous vertex on its best known path and the index
/// of the edge used to get there.
type Predecessor = Option<(usize, usize)>;

///////////////////////////////////////////////////////////////////////////////
//                                  Iterator                                 //
///////////////////////////////////////////////////////////////////////////////

// Walks predecessor links backward from a vertex until it reaches the start
// vertex (the only reached vertex without a predecessor).

struct BackwardPathIterator<'a> {
    predecessors: &'a [Predecessor],
    vertex_idx: usize,
}

impl<'a> Iterator for BackwardPathIterator<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((prev_vertex_idx, edge_idx)) = self.predecessors[self.vertex_idx] {
            self.vertex_idx = prev_vertex_idx;
            Some((prev_vertex_idx, edge_idx))
        } else {
            None
        }
    }
}

fn iterate_back_from(predecessors: &[Predecessor], vertex_idx: usize) -> BackwardPathIterator<'_> {
    BackwardPathIterator {
        predecessors,
        vertex_idx,
    }
}

///////////////////////////////////////////////////////////////////////////////
//                                   Search                                  //
///////////////////////////////////////////////////////////////////////////////

struct Search {
    dist: Vec<f64>,
    predecessors: Vec<Predecessor>,
}

/// Dijkstra from `start`. When `target` is given the search stops as soon as
/// the target is finalized; distances of other vertices are then only upper
/// bounds. Edge distances are assumed to be non-negative.
fn search(graph: &Graph, start: usize, target: Option<usize>) -> Search {
    let n = graph.num_vertices();

    let mut dist: Vec<f64> = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Predecessor> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut queue: MinHeap<(OrderedFloat<f64>, usize)> = MinHeap::with_capacity(n);

    dist[start] = 0.0;
    queue.push(Reverse((OrderedFloat(0.0), start)));

    let mut num_finalized: usize = 0;
    let mut num_stale: usize = 0;

    while let Some(Reverse((_, cur_vertex_idx))) = queue.pop() {
        // Lazy deletion: older, larger entries of improved vertices stay in the
        // queue and are dropped here.
        if finalized[cur_vertex_idx] {
            num_stale += 1;
            continue;
        }
        finalized[cur_vertex_idx] = true;
        num_finalized += 1;

        if Some(cur_vertex_idx) == target {
            break;
        }

        let cur_dist = dist[cur_vertex_idx];
        for (edge_idx, edge) in graph.incident_edges(cur_vertex_idx) {
            let neighbor_idx = match edge.other_end(cur_vertex_idx) {
                Some(idx) => idx,
                None => continue,
            };
            if finalized[neighbor_idx] {
                continue;
            }

            let candidate = cur_dist + edge.distance;
            if candidate < dist[neighbor_idx] {
                trace!(
                    vertex = neighbor_idx,
                    via = cur_vertex_idx,
                    edge = edge_idx,
                    distance = candidate,
                    "relaxed"
                );
                dist[neighbor_idx] = candidate;
                predecessors[neighbor_idx] = Some((cur_vertex_idx, edge_idx));
                queue.push(Reverse((OrderedFloat(candidate), neighbor_idx)));
            }
        }
    }

    debug!(start, ?target, num_finalized, num_stale, "search finished");

    Search { dist, predecessors }
}

///////////////////////////////////////////////////////////////////////////////
//                     Meat: shortest path between two vertices              //
///////////////////////////////////////////////////////////////////////////////

/// Compute the shortest path from `start` to `end`.
///
/// A missing start or end (nothing selected) yields the "no path" sentinel, as
/// does an end that cannot be reached from start. Vertex indices outside the
/// graph are treated like a missing selection. `start == end` gives the
/// single-vertex path of distance 0.
pub fn find_shortest_path(graph: &Graph, start: Option<usize>, end: Option<usize>) -> PathResult {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return PathResult::no_path(),
    };
    for &idx in [start, end].iter() {
        if !graph.contains_vertex(idx) {
            warn!(vertex = idx, num_vertices = graph.num_vertices(), "vertex not in graph");
            return PathResult::no_path();
        }
    }

    let Search { dist, predecessors } = search(graph, start, Some(end));

    let total_distance = dist[end];
    if total_distance == f64::INFINITY {
        return PathResult::no_path();
    }

    let mut path: Vec<usize> = vec![end];
    let mut edges: Vec<usize> = Vec::new();
    for (prev_vertex_idx, edge_idx) in iterate_back_from(&predecessors, end) {
        path.push(prev_vertex_idx);
        edges.push(edge_idx);
    }
    path.reverse();
    edges.reverse();

    PathResult::new(path, edges, total_distance)
}

/// Distances from `start` to every vertex, `f64::INFINITY` where unreachable.
pub fn shortest_distances_from(graph: &Graph, start: usize) -> Vec<f64> {
    if !graph.contains_vertex(start) {
        warn!(vertex = start, num_vertices = graph.num_vertices(), "vertex not in graph");
        return vec![f64::INFINITY; graph.num_vertices()];
    }
    search(graph, start, None).dist
}

/// Borrows a graph and answers shortest path queries on it. Each query keeps
/// its own bookkeeping, so a finder can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> ShortestPathFinder<'g> {
    pub fn new(graph: &'g Graph) -> ShortestPathFinder<'g> {
        ShortestPathFinder { graph }
    }

    pub fn find_shortest_path(&self, start: Option<usize>, end: Option<usize>) -> PathResult {
        find_shortest_path(self.graph, start, end)
    }
}
