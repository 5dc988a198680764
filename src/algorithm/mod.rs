pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub mod traits;

pub use traits::{CostMatrix, ShortestPathAlgorithm, ShortestPathResult};
