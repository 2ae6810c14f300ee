pub mod edge;
pub mod vertex;
pub mod graph;
pub mod error;
pub mod path_result;
pub mod dijkstra;
pub mod distance_matrix;
pub mod road_network;
pub mod loader;
pub mod python_bindings;

pub use edge::Edge;
pub use vertex::Vertex;
pub use graph::Graph;
pub use error::{GraphError, Result};
pub use path_result::PathResult;
pub use dijkstra::{find_shortest_path, shortest_distances_from, ShortestPathFinder};
pub use distance_matrix::{distance_matrix, distance_matrix_with_progress, write_distance_matrix};
pub use road_network::road_network;
pub use loader::{load_names, load_npy_graph};
