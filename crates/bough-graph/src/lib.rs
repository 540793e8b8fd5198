#![forbid(unsafe_code)]
//! bough-graph: weighted graph analytics.
//!
//! - [`graph`]: the [`WeightedGraph`] container and its edge-list format.
//! - [`paths`]: Dijkstra that keeps every co-optimal predecessor.
//! - [`metrics`]: closeness and betweenness centrality.
//! - [`cluster`]: single / complete linkage agglomerative clustering.
//!
//! All analyses are synchronous and allocate their own working state, so
//! one graph can be analysed from several threads at once.

pub mod cluster;
pub mod graph;
pub mod metrics;
pub mod paths;

pub use cluster::{ClusterError, Dendrogram, Linkage, hierarchical_clustering};
pub use graph::{GraphError, WeightedGraph};
pub use metrics::{
    CentralityError, NodeValues, betweenness_centrality, betweenness_centrality_normalised,
    closeness_centrality,
};
pub use paths::{ShortestPaths, VertexQueue, shortest_paths};
