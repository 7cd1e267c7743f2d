//! In-memory adjacency-list graph
//!
//! A small reference implementation of the capability traits, used by the
//! documentation examples and test suites. Vertices enumerate in insertion
//! order. The graph reports itself undirected until a one-way edge is added.

use crate::error::{PathError, Result};
use crate::graph::traversal::{Graph, WeightedGraph};
use crate::graph::types::Connection;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Directed adjacency lists keyed by vertex
#[derive(Debug, Clone)]
pub struct MemoryGraph<V, C = ()> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<Connection<V, C>>>,
    /// Edges added through `add_edge` rather than in mirrored pairs
    one_way: usize,
}

impl<V, C> Default for MemoryGraph<V, C> {
    fn default() -> Self {
        MemoryGraph {
            order: Vec::new(),
            adjacency: HashMap::new(),
            one_way: 0,
        }
    }
}

impl<V, C> MemoryGraph<V, C>
where
    V: Clone + Eq + Hash + Debug,
    C: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an undirected graph from `(a, b, cost)` triples
    pub fn from_undirected_edges(edges: impl IntoIterator<Item = (V, V, C)>) -> Self {
        let mut graph = Self::new();
        for (a, b, cost) in edges {
            graph.add_undirected_edge(a, b, cost);
        }
        graph
    }

    /// Add a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Add a directed edge, creating missing endpoints.
    ///
    /// Marks the graph as directed.
    pub fn add_edge(&mut self, from: V, to: V, cost: C) {
        self.one_way += 1;
        self.push_edge(from, to, cost);
    }

    /// Add the edge in both directions
    pub fn add_undirected_edge(&mut self, a: V, b: V, cost: C) {
        self.push_edge(a.clone(), b.clone(), cost.clone());
        self.push_edge(b, a, cost);
    }

    fn push_edge(&mut self, from: V, to: V, cost: C) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Connection::new(from, to, cost));
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V, C> Graph for MemoryGraph<V, C>
where
    V: Clone + Eq + Hash + Debug,
    C: Clone,
{
    type Vertex = V;
    type Cost = C;

    fn connections(&self, vertex: &V) -> Result<Vec<Connection<V, C>>> {
        self.adjacency
            .get(vertex)
            .cloned()
            .ok_or_else(|| PathError::not_found(vertex))
    }

    fn vertices(&self) -> Vec<V> {
        self.order.clone()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn is_directed(&self) -> bool {
        self.one_way > 0
    }
}

impl<V, C> WeightedGraph for MemoryGraph<V, C>
where
    V: Clone + Eq + Hash + Debug,
    C: Clone + Ord + Default + Add<Output = C>,
{
    fn zero(&self) -> C {
        C::default()
    }

    fn add(&self, a: &C, b: &C) -> C {
        a.clone() + b.clone()
    }

    fn compare(&self, a: &C, b: &C) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_in_insertion_order() {
        let mut graph: MemoryGraph<&str> = MemoryGraph::new();
        assert!(graph.add_vertex("c"));
        assert!(graph.add_vertex("a"));
        assert!(!graph.add_vertex("c"));
        graph.add_edge("a", "b", ());

        assert_eq!(graph.vertices(), vec!["c", "a", "b"]);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_undirected_edges_are_stored_both_ways() {
        let graph = MemoryGraph::from_undirected_edges([(1, 2, 5u32)]);
        let out = graph.connections(&1).unwrap();
        let back = graph.connections(&2).unwrap();

        assert_eq!(out, vec![Connection::new(1, 2, 5)]);
        assert_eq!(back, vec![Connection::new(2, 1, 5)]);
    }

    #[test]
    fn test_directedness_follows_edge_kind() {
        let mut graph: MemoryGraph<u8> = MemoryGraph::from_undirected_edges([(1, 2, ())]);
        assert!(!graph.is_directed());

        graph.add_undirected_edge(2, 3, ());
        assert!(!graph.is_directed());

        graph.add_edge(3, 1, ());
        assert!(graph.is_directed());
    }

    #[test]
    fn test_unknown_vertex_is_not_found() {
        let graph = MemoryGraph::from_undirected_edges([(1, 2, ())]);
        let err = graph.connections(&9).unwrap_err();
        assert!(err.is_not_found());
        assert!(!graph.contains(&9));
        assert!(graph.contains(&2));
    }

    #[test]
    fn test_numeric_cost_algebra() {
        let graph: MemoryGraph<u8, u32> = MemoryGraph::new();
        assert_eq!(graph.zero(), 0);
        assert_eq!(graph.add(&3, &4), 7);
        assert_eq!(graph.compare(&3, &4), Ordering::Less);
        assert_eq!(graph.potential(&1, &2), 0);
    }
}
