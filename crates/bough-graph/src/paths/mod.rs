//! Shortest-path engine.
//!
//! [`shortest_paths`] runs Dijkstra from one source and records, for every
//! reachable vertex, the full set of predecessors that lie on *some*
//! shortest path. Centrality measures build on those sets, so ties matter:
//!
//! ```text
//!   0 ──1──▶ 1 ──1──▶ 3        pred[3] = {1, 2}
//!   └──1──▶ 2 ──1────┘         two shortest paths 0→3
//! ```
//!
//! ```rust
//! use bough_graph::graph::WeightedGraph;
//! use bough_graph::paths::shortest_paths;
//!
//! let g = WeightedGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)])?;
//! let sp = shortest_paths(&g, 0)?;
//! assert_eq!(sp.distance(2), Some(2.0));
//! assert_eq!(sp.predecessors(2), [1]);
//! # Ok::<(), bough_graph::graph::GraphError>(())
//! ```

pub mod dijkstra;
pub mod queue;

pub use dijkstra::{ShortestPaths, shortest_paths};
pub use queue::VertexQueue;
