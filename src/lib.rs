//! Batch shortest-path solver for weighted directed graphs.
//!
//! Four classical algorithms are provided: Floyd-Warshall, Bellman-Ford,
//! Dijkstra and Johnson. Edge weights are signed integers and may be
//! negative; every engine reports negative cycles in a well-defined way
//! (Bellman-Ford as a result flag, Floyd-Warshall on the matrix diagonal,
//! Johnson as an error).
//!
//! Unreachable distances are `None` throughout the crate; the textual
//! "inf" token only exists at the serialization boundary in [`io`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    bellman_ford::{BellmanFord, BellmanFordResult},
    dijkstra::Dijkstra,
    floyd_warshall::FloydWarshall,
    johnson::Johnson,
    CostMatrix, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::digraph::Digraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Graph contains a negative edge weight")]
    NegativeEdge,

    #[error("Graph contains a negative cycle")]
    NegativeCycle,

    #[error("Invalid graph format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
