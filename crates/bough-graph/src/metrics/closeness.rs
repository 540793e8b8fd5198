//! Closeness centrality with a reachability correction.
//!
//! For vertex `i` with `r - 1` reachable vertices (excluding itself) at
//! total distance `s`:
//!
//! ```text
//! closeness(i) = (r - 1)^2 / ((n - 1) * s)      s > 0
//! closeness(i) = 0                              s = 0
//! ```
//!
//! The `(r - 1) / (n - 1)` factor discounts vertices that only reach a small
//! part of the graph, so isolated or sink-like vertices do not look central
//! just because their few distances are short.

use tracing::{debug, instrument};

use super::NodeValues;
use crate::graph::WeightedGraph;
use crate::paths::dijkstra;

/// Closeness centrality of every vertex.
///
/// A vertex that reaches nothing (or reaches others only through
/// zero-weight edges) scores 0. An empty graph yields empty values.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(graph: &WeightedGraph) -> NodeValues {
    let n = graph.vertex_count();
    let mut scores = vec![0.0; n];

    for (source, score) in scores.iter_mut().enumerate() {
        let paths = dijkstra::run(graph, source);
        let (others, total) = paths
            .reachable()
            .filter(|&(v, _)| v != source)
            .fold((0_usize, 0.0_f64), |(count, sum), (_, d)| (count + 1, sum + d));

        if total > 0.0 {
            let reached = others as f64;
            *score = reached * reached / (n - 1) as f64 / total;
        }
        debug!(source, reached = others, total, score = *score, "closeness");
    }

    NodeValues::from(scores)
}
