use thiserror::Error;

/// Errors raised while building or loading a graph. Path queries themselves
/// never fail; a missing path is reported through `PathResult::no_path`.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Unknown vertex {idx}: graph has {num_vertices} vertices")]
    UnknownVertex { idx: usize, num_vertices: usize },

    #[error("Negative vertex index {0} in edge list")]
    NegativeVertexIndex(i64),

    #[error("No vertex named {0:?}")]
    UnknownName(String),

    #[error("Mismatched input lengths: {0} sources, {1} destinations, {2} distances")]
    MismatchedLengths(usize, usize, usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
