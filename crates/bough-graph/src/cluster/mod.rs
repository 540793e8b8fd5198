//! Hierarchical agglomerative clustering over graph edge weights.
//!
//! # Overview
//!
//! Edge weights are read as similarities: the distance between two
//! vertices is `1 / w` for the heaviest edge joining them in either
//! direction. Starting from one cluster per vertex, the closest pair of
//! clusters is merged until one remains, and distances to the merged
//! cluster are recomputed with the Lance-Williams update for the chosen
//! [`Linkage`]:
//!
//! ```text
//! single:    d(k, i ∪ j) = min(d(k, i), d(k, j))
//! complete:  d(k, i ∪ j) = max(d(k, i), d(k, j))
//! ```
//!
//! A side with no link never wins `min`/`max`; the other side's distance is
//! kept as is.
//!
//! ## Disconnected graphs
//!
//! Once no finite distance remains but several clusters are still active,
//! the two lowest-numbered active clusters are merged with no distance
//! (`Merge { distance: None, .. }`). The result always covers every vertex.
//!
//! ```rust
//! use bough_graph::cluster::{Linkage, hierarchical_clustering};
//! use bough_graph::graph::WeightedGraph;
//!
//! let g = WeightedGraph::from_edges(3, &[(0, 1, 4.0), (1, 2, 1.0)])?;
//! let tree = hierarchical_clustering(&g, Linkage::Single)?.expect("non-empty graph");
//! assert_eq!(tree.leaf_count(), 3);
//! assert_eq!(tree.distance(), Some(1.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dendrogram;
pub mod matrix;

use bough_core::ErrorCode;
use tracing::{debug, instrument};

use crate::graph::WeightedGraph;

pub use bough_core::Linkage;
pub use dendrogram::Dendrogram;
pub use matrix::{Cell, DistanceMatrix};

/// Errors raised by [`hierarchical_clustering`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClusterError {
    #[error("distance matrix for {vertex_count} vertices does not fit in memory")]
    Capacity { vertex_count: usize },

    #[error("cluster slot {slot} was merged twice")]
    InactiveSlot { slot: usize },
}

impl ClusterError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Capacity { .. } => ErrorCode::CapacityExceeded,
            Self::InactiveSlot { .. } => ErrorCode::InternalUnexpected,
        }
    }
}

/// Cluster every vertex of `graph` into a single dendrogram.
///
/// Returns `Ok(None)` for a graph without vertices and a lone leaf for a
/// single vertex.
///
/// # Errors
///
/// [`ClusterError::Capacity`] when the `n × n` distance matrix cannot be
/// allocated.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn hierarchical_clustering(
    graph: &WeightedGraph,
    linkage: Linkage,
) -> Result<Option<Dendrogram>, ClusterError> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(None);
    }

    let mut matrix = DistanceMatrix::from_graph(graph)?;
    let mut slots: Vec<Option<Dendrogram>> = (0..n).map(|v| Some(Dendrogram::leaf(v))).collect();

    for step in 1..n {
        let (keep, absorbed, distance) = match matrix.closest_pair() {
            Some((i, j, d)) => (i, j, Some(d)),
            None => {
                let mut active = slots
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_some())
                    .map(|(index, _)| index);
                let (Some(i), Some(j)) = (active.next(), active.next()) else {
                    return Err(ClusterError::InactiveSlot { slot: 0 });
                };
                (i, j, None)
            }
        };

        let left = slots[keep]
            .take()
            .ok_or(ClusterError::InactiveSlot { slot: keep })?;
        let right = slots[absorbed]
            .take()
            .ok_or(ClusterError::InactiveSlot { slot: absorbed })?;
        slots[keep] = Some(Dendrogram::merge(distance, left, right));
        matrix.merge(keep, absorbed, linkage);

        debug!(step, keep, absorbed, ?distance, "merged clusters");
    }

    Ok(slots.swap_remove(0))
}
