//! Betweenness centrality over weighted shortest paths.
//!
//! # Algorithm
//!
//! For each source `s` the shortest-path engine yields a predecessor DAG and
//! a topological order of it. Over that order:
//!
//! - `σ(s) = 1`, `σ(x) = Σ σ(p)` over predecessors `p` of `x`, the number of
//!   shortest `s → x` paths;
//! - for a candidate `v`, `through_v(x) = Σ t(p)` where `t(p)` is 0 when
//!   `p = s`, `σ(v)` when `p = v`, and `through_v(p)` otherwise.
//!
//! Vertex `v` then scores `Σ through_v(d) / σ(d)` over every ordered pair
//! `(s, d)` with `s`, `d`, `v` distinct. `through_v(d)` counts the shortest
//! `s → d` paths that pass through `v`: every such path reaches `v` one of
//! `σ(v)` ways and leaves it along one of the shortest `v → d` routes, so
//! `through_v(d) = σ(v) · σ(v → d)`. The sum is therefore the pair
//! dependency Brandes' algorithm accumulates, computed forwards per
//! candidate instead of backwards per source.
//!
//! Complexity: one Dijkstra per source plus `O(V · (V + E))` folding per
//! source, so `O(V² (V + E))` overall.

use tracing::{debug, instrument};

use super::{CentralityError, NodeValues};
use crate::graph::WeightedGraph;
use crate::paths::{ShortestPaths, dijkstra};

/// Raw betweenness centrality of every vertex.
///
/// Vertices that no shortest path passes through score 0. An empty graph
/// yields empty values.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn betweenness_centrality(graph: &WeightedGraph) -> NodeValues {
    let n = graph.vertex_count();
    let mut scores = vec![0.0; n];
    let mut through = vec![0.0; n];

    for source in 0..n {
        let paths = dijkstra::run(graph, source);
        let sigma = paths.path_counts();

        for &v in paths.settle_order() {
            if v == source {
                continue;
            }
            fold_through(&paths, &sigma, v, &mut through);
            scores[v] += paths
                .settle_order()
                .iter()
                .filter(|&&dest| dest != source && dest != v && sigma[dest] > 0.0)
                .map(|&dest| through[dest] / sigma[dest])
                .sum::<f64>();
        }
        debug!(source, reached = paths.settle_order().len(), "betweenness source done");
    }

    NodeValues::from(scores)
}

/// Betweenness scaled by `1 / ((n - 1)(n - 2))`, the number of ordered
/// pairs that exclude a given vertex.
///
/// # Errors
///
/// [`CentralityError::NormalisationUndefined`] for graphs with one or two
/// vertices, where the scale factor divides by zero. An empty graph yields
/// empty values.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality_normalised(
    graph: &WeightedGraph,
) -> Result<NodeValues, CentralityError> {
    let n = graph.vertex_count();
    match n {
        0 => return Ok(NodeValues::default()),
        1 | 2 => return Err(CentralityError::NormalisationUndefined { vertex_count: n }),
        _ => {}
    }

    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    let scores = betweenness_centrality(graph)
        .into_vec()
        .into_iter()
        .map(|score| score * scale)
        .collect::<Vec<_>>();
    Ok(NodeValues::from(scores))
}

/// Fill `through` with `through_v(x)` for every reachable `x`.
///
/// Entries for unreachable vertices are left untouched; callers only read
/// reachable ones.
fn fold_through(paths: &ShortestPaths, sigma: &[f64], v: usize, through: &mut [f64]) {
    let source = paths.source();
    for &x in paths.topological_order() {
        through[x] = if x == source {
            0.0
        } else {
            paths
                .predecessors(x)
                .iter()
                .map(|&p| {
                    if p == source {
                        0.0
                    } else if p == v {
                        sigma[v]
                    } else {
                        through[p]
                    }
                })
                .sum()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
        WeightedGraph::from_edges(n, edges).expect("valid graph")
    }

    fn undirected(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
        let both: Vec<_> = edges
            .iter()
            .flat_map(|&(a, b, w)| [(a, b, w), (b, a, w)])
            .collect();
        graph(n, &both)
    }

    #[test]
    fn empty_graph() {
        assert!(betweenness_centrality(&WeightedGraph::new(0)).is_empty());
        assert_eq!(
            betweenness_centrality_normalised(&WeightedGraph::new(0)),
            Ok(NodeValues::default())
        );
    }

    #[test]
    fn directed_chain_middle_is_bridge() {
        let b = betweenness_centrality(&graph(3, &[(0, 1, 1.0), (1, 2, 1.0)]));
        assert_eq!(b.as_slice(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn shortcut_edge_bypasses_middle() {
        let b = betweenness_centrality(&graph(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]));
        assert_eq!(b.as_slice(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn symmetric_triangle_is_uniform() {
        let b = betweenness_centrality(&undirected(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]));
        assert_eq!(b[0], b[1]);
        assert_eq!(b[1], b[2]);
    }

    #[test]
    fn diamond_splits_credit() {
        // 0 → {1, 2} → 3, equal weights: each middle vertex carries half.
        let b = betweenness_centrality(&graph(
            4,
            &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
        ));
        assert_eq!(b.as_slice(), [0.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn undirected_path_of_four() {
        // 0 - 1 - 2 - 3: vertex 1 sits on (0,2), (0,3) both ways.
        let b = betweenness_centrality(&undirected(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]));
        assert_eq!(b.as_slice(), [0.0, 4.0, 4.0, 0.0]);
    }

    #[test]
    fn zero_weight_detour_shares_the_pair() {
        // 0 -> 2 -> 1 ties 0 -> 1 even though 1 settles before 2.
        let b = betweenness_centrality(&graph(3, &[(0, 1, 1.0), (0, 2, 1.0), (2, 1, 0.0)]));
        assert_eq!(b.as_slice(), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn weights_pick_the_route() {
        // Direct 0 → 2 is heavier than going through 1.
        let b = betweenness_centrality(&graph(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0)]));
        assert_eq!(b[1], 1.0);
    }

    #[test]
    fn normalised_scales_by_pair_count() {
        let g = undirected(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        let b = betweenness_centrality_normalised(&g).expect("n >= 3");
        assert!((b[1] - 4.0 / 6.0).abs() < 1e-12);
        assert_eq!(b[0], 0.0);
    }

    #[test]
    fn normalised_rejects_tiny_graphs() {
        for n in [1, 2] {
            assert_eq!(
                betweenness_centrality_normalised(&WeightedGraph::new(n)),
                Err(CentralityError::NormalisationUndefined { vertex_count: n })
            );
        }
    }
}
