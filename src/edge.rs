/// Edge describes an undirected road between two vertices with some distance.
/// The distance must not be negative; this is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
}

impl Edge {
    pub fn new(from: usize, to: usize, distance: f64) -> Edge {
        Edge { from, to, distance }
    }

    /// The endpoint opposite to `vertex_idx`, or `None` if the edge does not
    /// touch `vertex_idx`. A self-loop returns its own vertex.
    pub fn other_end(&self, vertex_idx: usize) -> Option<usize> {
        if self.from == vertex_idx {
            Some(self.to)
        } else if self.to == vertex_idx {
            Some(self.from)
        } else {
            None
        }
    }

    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn other_end_works() {
        use super::*;
        let e = Edge::new(3, 7, 1.5);
        assert_eq!(e.other_end(3), Some(7));
        assert_eq!(e.other_end(7), Some(3));
        assert_eq!(e.other_end(4), None);

        let self_loop = Edge::new(2, 2, 0.0);
        assert_eq!(self_loop.other_end(2), Some(2));
    }

    #[test]
    fn connects_is_undirected() {
        use super::*;
        let e = Edge::new(0, 1, 4.0);
        assert!(e.connects(0, 1));
        assert!(e.connects(1, 0));
        assert!(!e.connects(0, 2));
    }
}
