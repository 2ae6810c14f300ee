use super::graph::Graph;

/// Result of a single shortest path query.
///
/// When no path exists (or no start/end was given) the result is the "no path"
/// sentinel: empty `path`, empty `edges` and an infinite `total_distance`.
/// Otherwise `path` runs from start to end inclusive, `edges[i]` connects
/// `path[i]` and `path[i + 1]`, and `total_distance` is the sum of their
/// distances.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub path: Vec<usize>,
    pub edges: Vec<usize>,
    pub total_distance: f64,
}

pub const NO_PATH_MESSAGE: &str = "No path found";

impl PathResult {
    pub fn new(path: Vec<usize>, edges: Vec<usize>, total_distance: f64) -> PathResult {
        PathResult {
            path,
            edges,
            total_distance,
        }
    }

    pub fn no_path() -> PathResult {
        PathResult::new(Vec::new(), Vec::new(), f64::INFINITY)
    }

    pub fn path_exists(&self) -> bool {
        !self.path.is_empty() && self.total_distance != f64::INFINITY
    }

    /// Vertex names along the path joined by arrows, e.g. `"Wien → Linz"`.
    pub fn path_as_string(&self, graph: &Graph) -> String {
        if !self.path_exists() {
            return NO_PATH_MESSAGE.to_string();
        }
        self.path
            .iter()
            .map(|&idx| graph.vertex(idx).map(|v| v.name.as_str()).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Total distance truncated toward zero, for display only.
    pub fn display_distance(&self) -> i64 {
        self.total_distance as i64
    }
}
