//! SSSP Engine - Single-Source Shortest Paths over weighted directed graphs
//!
//! This library computes shortest-path distances from one origin node to every
//! other node of a directed graph with non-negative edge weights, using classical
//! priority-driven relaxation (Dijkstra's algorithm with a lazy-deletion binary
//! heap), and reconstructs shortest paths from predecessor links.
//!
//! Total work is bounded by O((n + m) log n) for n nodes and m edges. Negative
//! edge weights are rejected up front; silently accepting them would produce
//! wrong answers without diagnostic.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, reconstruct_path, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Origin node {0} not found in graph")]
    InvalidOrigin(String),

    #[error("Negative weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Node {0} not found in predecessor table")]
    UnknownNode(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
