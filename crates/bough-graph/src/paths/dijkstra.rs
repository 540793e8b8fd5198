//! Single-source shortest paths that keep every co-optimal predecessor.

use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use super::queue::VertexQueue;
use crate::graph::{GraphError, WeightedGraph};

/// Result of one [`shortest_paths`] run.
///
/// Distances are stored with `f64::INFINITY` for unreached vertices and
/// surfaced as `Option<f64>`. Predecessor sets are sorted ascending and
/// never contain duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<f64>,
    pred: Vec<Vec<usize>>,
    order: Vec<usize>,
    topo: Vec<usize>,
}

impl ShortestPaths {
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Shortest distance from the source, or `None` if `vertex` is
    /// unreachable or out of range.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.dist.get(vertex).copied().filter(|d| d.is_finite())
    }

    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Every vertex `p` with `dist[p] + w(p, vertex) == dist[vertex]`.
    ///
    /// Empty for the source, for unreachable vertices and for out-of-range
    /// indices.
    #[must_use]
    pub fn predecessors(&self, vertex: usize) -> &[usize] {
        self.pred.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Reachable vertices in the order they were settled, source first.
    ///
    /// With zero-weight edges a vertex settled late can still be a
    /// predecessor of one settled earlier; fold over
    /// [`Self::topological_order`] instead.
    #[must_use]
    pub fn settle_order(&self) -> &[usize] {
        &self.order
    }

    /// Reachable vertices with every predecessor ahead of its successors.
    ///
    /// Starts with the source, so a single forward pass can fold values
    /// along the predecessor graph.
    #[must_use]
    pub fn topological_order(&self) -> &[usize] {
        &self.topo
    }

    /// `(vertex, distance)` for every reachable vertex, source included,
    /// in settle order.
    pub fn reachable(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.order.iter().map(|&v| (v, self.dist[v]))
    }

    /// Number of distinct shortest paths from the source to each vertex.
    ///
    /// The source has exactly one (the empty path); unreachable vertices
    /// have zero. Counts are `f64` because they grow exponentially on
    /// layered graphs.
    #[must_use]
    pub fn path_counts(&self) -> Vec<f64> {
        let mut sigma = vec![0.0; self.vertex_count()];
        for &v in &self.topo {
            sigma[v] = if v == self.source {
                1.0
            } else {
                self.pred[v].iter().map(|&p| sigma[p]).sum()
            };
        }
        sigma
    }

    #[must_use]
    pub fn path_count(&self, vertex: usize) -> f64 {
        self.path_counts().get(vertex).copied().unwrap_or(0.0)
    }

    /// Every shortest path from the source to `target`, source first.
    ///
    /// Paths come back in lexicographic order. The number of paths can be
    /// exponential in the vertex count; check [`Self::path_count`] first
    /// when that matters.
    #[must_use]
    pub fn paths_to(&self, target: usize) -> Vec<Vec<usize>> {
        if !self.is_reachable(target) {
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut stack = vec![vec![target]];
        while let Some(mut partial) = stack.pop() {
            let Some(&head) = partial.last() else {
                continue;
            };
            if head == self.source {
                partial.reverse();
                paths.push(partial);
                continue;
            }
            for &p in self.predecessors(head) {
                let mut next = partial.clone();
                next.push(p);
                stack.push(next);
            }
        }
        paths.sort();
        paths
    }
}

/// Shortest distances and co-optimal predecessor sets from `source`.
///
/// # Errors
///
/// [`GraphError::InvalidVertex`] if `source` is not a vertex of `graph`.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_paths(graph: &WeightedGraph, source: usize) -> Result<ShortestPaths, GraphError> {
    graph.check_vertex(source)?;
    let paths = run(graph, source);
    debug!(reached = paths.order.len(), "shortest paths complete");
    Ok(paths)
}

/// Dijkstra over a source already known to be in range.
///
/// Every tight edge `dist[u] + w == dist[v]` makes `u` a predecessor of `v`,
/// including zero-weight ties into a vertex settled earlier. The one
/// exception is an edge that would close a cycle in the predecessor graph
/// (a self-loop, an edge back into the source, or the last edge of a
/// zero-weight cycle).
pub(crate) fn run(graph: &WeightedGraph, source: usize) -> ShortestPaths {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut settled = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = VertexQueue::new(n);

    dist[source] = 0.0;
    queue.insert_or_update(source, 0.0);

    while let Some(u) = queue.dequeue_min() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        order.push(u);

        for (v, weight) in graph.out_edges(u) {
            if v == u {
                continue;
            }
            let candidate = dist[u] + weight;
            match candidate.total_cmp(&dist[v]) {
                Ordering::Less => {
                    trace!(from = u, to = v, distance = candidate, "relaxed");
                    dist[v] = candidate;
                    pred[v].clear();
                    pred[v].push(u);
                    queue.insert_or_update(v, candidate);
                }
                Ordering::Equal => {
                    if pred[v].contains(&u) {
                        continue;
                    }
                    // Only settled vertices are ever predecessors, so an
                    // unsettled `v` cannot be an ancestor of `u`.
                    if settled[v] && is_ancestor(&pred, v, u) {
                        trace!(from = u, to = v, "tie would close a zero-weight cycle");
                        continue;
                    }
                    trace!(from = u, to = v, "co-optimal predecessor");
                    pred[v].push(u);
                }
                Ordering::Greater => {}
            }
        }
    }

    for set in &mut pred {
        set.sort_unstable();
    }
    let topo = topological(&order, &pred);

    ShortestPaths {
        source,
        dist,
        pred,
        order,
        topo,
    }
}

/// Whether `ancestor` can be reached from `vertex` by following
/// predecessor links.
fn is_ancestor(pred: &[Vec<usize>], ancestor: usize, vertex: usize) -> bool {
    let mut seen = vec![false; pred.len()];
    let mut stack = vec![vertex];
    while let Some(x) = stack.pop() {
        if x == ancestor {
            return true;
        }
        if std::mem::replace(&mut seen[x], true) {
            continue;
        }
        stack.extend(pred[x].iter().copied().filter(|&p| !seen[p]));
    }
    false
}

/// Depth-first post-order over predecessor links, rooted in settle order.
fn topological(order: &[usize], pred: &[Vec<usize>]) -> Vec<usize> {
    let mut placed = vec![false; pred.len()];
    let mut topo = Vec::with_capacity(order.len());
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for &root in order {
        if placed[root] {
            continue;
        }
        stack.push((root, 0));
        while let Some((x, next)) = stack.pop() {
            if let Some(&p) = pred[x].get(next) {
                stack.push((x, next + 1));
                if !placed[p] {
                    stack.push((p, 0));
                }
            } else if !placed[x] {
                placed[x] = true;
                topo.push(x);
            }
        }
    }
    topo
}
