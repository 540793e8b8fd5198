//! Construction and queries for [`WeightedGraph`].

#![allow(clippy::module_name_repetitions)]

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use super::GraphError;

/// Directed graph with dense vertex ids and non-negative `f64` weights.
///
/// Parallel edges and self-loops are allowed.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: DiGraph<(), f64>,
}

impl WeightedGraph {
    /// Graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        let mut graph = DiGraph::with_capacity(vertex_count, 0);
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        Self { graph }
    }

    /// Build a graph from `(from, to, weight)` triples.
    ///
    /// # Errors
    ///
    /// Fails on the first edge that [`Self::add_edge`] rejects.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Add a directed edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either endpoint is out of range,
    /// [`GraphError::InvalidWeight`] if `weight` is negative or not finite.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        self.graph
            .add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        Ok(())
    }

    /// Ensure `vertex` names a vertex of this graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] when `vertex >= vertex_count()`.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count,
            })
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// `true` if at least one edge `from → to` exists. Out-of-range
    /// vertices have no edges.
    #[must_use]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.vertex_count()
            && to < self.vertex_count()
            && self
                .graph
                .contains_edge(NodeIndex::new(from), NodeIndex::new(to))
    }

    /// Outgoing edges of `vertex` as `(target, weight)`.
    ///
    /// Order is unspecified. Empty for out-of-range vertices.
    pub fn out_edges(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.graph
            .edges_directed(NodeIndex::new(vertex), Direction::Outgoing)
            .map(|e| (e.target().index(), *e.weight()))
    }

    /// Incoming edges of `vertex` as `(source, weight)`.
    ///
    /// Order is unspecified. Empty for out-of-range vertices.
    pub fn in_edges(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.graph
            .edges_directed(NodeIndex::new(vertex), Direction::Incoming)
            .map(|e| (e.source().index(), *e.weight()))
    }

    /// Every edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Lightest edge `from → to`, if any.
    #[must_use]
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        if to >= self.vertex_count() {
            return None;
        }
        self.out_edges(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .min_by(f64::total_cmp)
    }
}
