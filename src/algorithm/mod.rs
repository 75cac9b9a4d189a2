pub mod dijkstra;
pub mod traits;

pub use traits::{reconstruct_path, ShortestPathAlgorithm, ShortestPathResult};
