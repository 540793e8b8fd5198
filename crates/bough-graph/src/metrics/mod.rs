//! Centrality measures over a [`WeightedGraph`](crate::graph::WeightedGraph).
//!
//! # Overview
//!
//! Both measures run the shortest-path engine once per source vertex and
//! fold the results into one score per vertex:
//!
//! - **Closeness** (`closeness`): how near a vertex is to everything it can
//!   reach, scaled down when it reaches only part of the graph.
//! - **Betweenness** (`betweenness`): how many shortest paths between other
//!   pairs pass through a vertex. The normalised variant divides by the
//!   number of ordered pairs that exclude the vertex.
//!
//! Scores come back as [`NodeValues`], indexed by vertex and independent of
//! the graph they were computed from.
//!
//! ```rust
//! use bough_graph::graph::WeightedGraph;
//! use bough_graph::metrics::{betweenness_centrality, closeness_centrality};
//!
//! let g = WeightedGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)])?;
//! let between = betweenness_centrality(&g);
//! assert_eq!(between[1], 1.0);
//! assert_eq!(closeness_centrality(&g)[2], 0.0);
//! # Ok::<(), bough_graph::graph::GraphError>(())
//! ```

pub mod betweenness;
pub mod closeness;

use std::ops::Index;

use bough_core::ErrorCode;
use serde::Serialize;

pub use betweenness::{betweenness_centrality, betweenness_centrality_normalised};
pub use closeness::closeness_centrality;

/// One `f64` per vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NodeValues(Vec<f64>);

impl NodeValues {
    #[must_use]
    pub fn get(&self, vertex: usize) -> Option<f64> {
        self.0.get(vertex).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// `(vertex, value)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for NodeValues {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Index<usize> for NodeValues {
    type Output = f64;

    fn index(&self, vertex: usize) -> &f64 {
        &self.0[vertex]
    }
}

/// Errors raised by centrality measures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CentralityError {
    #[error(
        "normalised betweenness is undefined for {vertex_count} vertices (needs at least 3)"
    )]
    NormalisationUndefined { vertex_count: usize },
}

impl CentralityError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NormalisationUndefined { .. } => ErrorCode::NormalisationUndefined,
        }
    }
}
