//! Weighted directed graph used by every analysis in this crate.
//!
//! # Overview
//!
//! [`WeightedGraph`] wraps a petgraph `DiGraph<(), f64>` and exposes it
//! through dense vertex indices `0..vertex_count`. Weights are finite and
//! non-negative; this is checked once when an edge is added, so the
//! shortest-path engine can rely on Dijkstra's precondition without
//! re-validating.
//!
//! ## Edge-list files
//!
//! ```text
//! # comments and blank lines are ignored
//! 4            <- vertex count
//! 0 1 2.5      <- from to weight
//! 1,2,1        <- commas work as separators too
//! ```
//!
//! ```rust
//! use bough_graph::graph::WeightedGraph;
//!
//! let g = WeightedGraph::parse("3\n0 1 1\n1 2 1\n0 2 5\n")?;
//! assert_eq!(g.vertex_count(), 3);
//! assert!(g.has_edge(0, 2));
//! # Ok::<(), bough_graph::graph::GraphError>(())
//! ```

pub mod build;
pub mod parse;

use std::io;
use std::path::PathBuf;

use bough_core::ErrorCode;

pub use build::WeightedGraph;

/// Errors raised while building or querying a [`WeightedGraph`].
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("edge {from} -> {to} has weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GraphError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidVertex { .. } => ErrorCode::InvalidVertex,
            Self::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            Self::Parse { .. } => ErrorCode::GraphParseError,
            Self::Io { .. } => ErrorCode::InputReadFailed,
        }
    }
}
