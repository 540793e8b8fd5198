//! Property tests over randomly generated graphs.
//!
//! Weights are small integers, zero included, so path sums are exact in
//! `f64` and ties between equal-cost routes (and zero-weight cycles)
//! actually occur.

use bough_graph::{
    Linkage, WeightedGraph, betweenness_centrality, closeness_centrality,
    hierarchical_clustering, shortest_paths,
};
use bough_graph::ShortestPaths;
use proptest::prelude::*;

fn arb_graph(max_vertices: usize) -> impl Strategy<Value = WeightedGraph> {
    (1..=max_vertices).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0_u8..=4), 0..(n * 3)).prop_map(move |edges| {
            let edges: Vec<_> = edges
                .into_iter()
                .map(|(a, b, w)| (a, b, f64::from(w)))
                .collect();
            WeightedGraph::from_edges(n, &edges).expect("generated edges are valid")
        })
    })
}

/// Whether `ancestor` is reachable from `vertex` along predecessor links.
fn is_ancestor(sp: &ShortestPaths, ancestor: usize, vertex: usize) -> bool {
    let mut seen = vec![false; sp.vertex_count()];
    let mut stack = vec![vertex];
    while let Some(x) = stack.pop() {
        if x == ancestor {
            return true;
        }
        if !seen[x] {
            seen[x] = true;
            stack.extend_from_slice(sp.predecessors(x));
        }
    }
    false
}

proptest! {
    #[test]
    fn prop_source_is_at_distance_zero(g in arb_graph(12)) {
        for source in 0..g.vertex_count() {
            let sp = shortest_paths(&g, source).expect("valid source");
            prop_assert_eq!(sp.distance(source), Some(0.0));
            prop_assert!(sp.predecessors(source).is_empty());
            prop_assert_eq!(sp.settle_order().first(), Some(&source));
        }
    }

    #[test]
    fn prop_predecessors_are_exactly_the_tight_in_edges(g in arb_graph(12)) {
        for source in 0..g.vertex_count() {
            let sp = shortest_paths(&g, source).expect("valid source");
            for v in 0..g.vertex_count() {
                let Some(dv) = sp.distance(v) else {
                    prop_assert!(sp.predecessors(v).is_empty());
                    continue;
                };
                for &p in sp.predecessors(v) {
                    let dp = sp.distance(p).expect("predecessor is reachable");
                    let w = g.edge_weight(p, v).expect("predecessor has an edge");
                    prop_assert_eq!(dp + w, dv);
                }
                for (u, w) in g.in_edges(v) {
                    if u == v {
                        continue;
                    }
                    if let Some(du) = sp.distance(u) {
                        prop_assert!(du + w >= dv, "edge {} -> {} undercuts dist", u, v);
                        // A tight edge is dropped only when it would close a
                        // cycle of zero-weight predecessor links.
                        if du + w == dv && !sp.predecessors(v).contains(&u) {
                            prop_assert!(
                                is_ancestor(&sp, v, u),
                                "tight edge {} -> {} missing from predecessors",
                                u,
                                v
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn prop_topological_order_puts_predecessors_first(g in arb_graph(12)) {
        for source in 0..g.vertex_count() {
            let sp = shortest_paths(&g, source).expect("valid source");
            let order = sp.topological_order();
            prop_assert_eq!(order.first(), Some(&source));
            prop_assert_eq!(order.len(), sp.settle_order().len());
            let mut position = vec![usize::MAX; g.vertex_count()];
            for (index, &v) in order.iter().enumerate() {
                position[v] = index;
            }
            for &v in order {
                for &p in sp.predecessors(v) {
                    prop_assert!(position[p] < position[v], "{} listed after {}", p, v);
                }
            }
        }
    }

    #[test]
    fn prop_path_enumeration_matches_count(g in arb_graph(8)) {
        let sp = shortest_paths(&g, 0).expect("valid source");
        for v in 0..g.vertex_count() {
            let paths = sp.paths_to(v);
            #[allow(clippy::cast_precision_loss)]
            let enumerated = paths.len() as f64;
            prop_assert_eq!(enumerated, sp.path_count(v));
            for path in &paths {
                prop_assert_eq!(path.first(), Some(&0));
                prop_assert_eq!(path.last(), Some(&v));
            }
        }
    }

    #[test]
    fn prop_centrality_is_finite_and_non_negative(g in arb_graph(10)) {
        let c = closeness_centrality(&g);
        let b = betweenness_centrality(&g);
        prop_assert_eq!(c.len(), g.vertex_count());
        prop_assert_eq!(b.len(), g.vertex_count());
        for (_, value) in c.iter().chain(b.iter()) {
            prop_assert!(value.is_finite() && value >= 0.0);
        }
    }

    #[test]
    fn prop_dendrogram_covers_every_vertex_once(g in arb_graph(16), complete in any::<bool>()) {
        let linkage = if complete { Linkage::Complete } else { Linkage::Single };
        let tree = hierarchical_clustering(&g, linkage)
            .expect("fits in memory")
            .expect("at least one vertex");
        let n = g.vertex_count();
        let mut leaves: Vec<_> = tree.leaves().collect();
        leaves.sort_unstable();
        prop_assert_eq!(leaves, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(tree.merge_count(), n - 1);
    }
}
