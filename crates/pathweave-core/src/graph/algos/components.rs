//! Decomposition into maximal connected sub-graphs
//!
//! Components are found by repeated BFS, so connections are expected to be
//! symmetric. On a directed graph a later component may re-collect vertices
//! already reported by an earlier one.

use crate::bail_not_found;
use crate::error::Result;
use crate::graph::bfs::bfs;
use crate::graph::types::Connection;
use crate::graph::{Graph, WeightedGraph};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Read-only view of a graph restricted to a vertex set.
///
/// Edges leaving the set are filtered out of `connections`; the backing graph
/// is untouched.
pub struct SubGraph<'a, G: Graph + ?Sized> {
    graph: &'a G,
    members: HashSet<G::Vertex>,
    order: Vec<G::Vertex>,
}

impl<'a, G: Graph + ?Sized> SubGraph<'a, G> {
    pub fn new(graph: &'a G, vertices: Vec<G::Vertex>) -> Self {
        let members = vertices.iter().cloned().collect();
        SubGraph {
            graph,
            members,
            order: vertices,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<G: Graph + ?Sized> fmt::Debug for SubGraph<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubGraph")
            .field("vertices", &self.order)
            .finish()
    }
}

impl<G: Graph + ?Sized> Graph for SubGraph<'_, G> {
    type Vertex = G::Vertex;
    type Cost = G::Cost;

    fn connections(&self, vertex: &G::Vertex) -> Result<Vec<Connection<G::Vertex, G::Cost>>> {
        if !self.members.contains(vertex) {
            bail_not_found!(vertex);
        }
        let mut connections = self.graph.connections(vertex)?;
        connections.retain(|c| self.members.contains(&c.to));
        Ok(connections)
    }

    fn vertices(&self) -> Vec<G::Vertex> {
        self.order.clone()
    }

    fn contains(&self, vertex: &G::Vertex) -> bool {
        self.members.contains(vertex)
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for SubGraph<'_, G> {
    fn zero(&self) -> G::Cost {
        self.graph.zero()
    }

    fn add(&self, a: &G::Cost, b: &G::Cost) -> G::Cost {
        self.graph.add(a, b)
    }

    fn compare(&self, a: &G::Cost, b: &G::Cost) -> Ordering {
        self.graph.compare(a, b)
    }

    fn potential(&self, from: &G::Vertex, to: &G::Vertex) -> G::Cost {
        self.graph.potential(from, to)
    }
}

/// Iterator over the connected components of a graph
pub struct Components<'a, G: Graph + ?Sized> {
    graph: &'a G,
    seeds: std::vec::IntoIter<G::Vertex>,
    undiscovered: HashSet<G::Vertex>,
    failed: bool,
}

impl<'a, G: Graph + ?Sized> Iterator for Components<'a, G> {
    type Item = Result<SubGraph<'a, G>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let seed = self
            .seeds
            .by_ref()
            .find(|v| self.undiscovered.contains(v))?;

        let mut members = Vec::new();
        if let Err(err) = bfs(self.graph, &seed, |node| {
            members.push(node.vertex.clone());
            true
        }) {
            self.failed = true;
            return Some(Err(err));
        }

        for vertex in &members {
            self.undiscovered.remove(vertex);
        }
        tracing::trace!(seed = ?seed, size = members.len(), "component collected");
        Some(Ok(SubGraph::new(self.graph, members)))
    }
}

/// Lazily partition `graph` into maximal connected sub-graphs.
///
/// Seeds are taken in `vertices()` order; each yielded view lists its
/// vertices in BFS order from its seed. After an error the iterator ends.
pub fn components<G: Graph + ?Sized>(graph: &G) -> Components<'_, G> {
    let vertices = graph.vertices();
    Components {
        graph,
        undiscovered: vertices.iter().cloned().collect(),
        seeds: vertices.into_iter(),
        failed: false,
    }
}

/// Vertex sets of every connected component
#[tracing::instrument(skip_all)]
pub fn connected_components<G: Graph + ?Sized>(graph: &G) -> Result<Vec<Vec<G::Vertex>>> {
    let groups = components(graph)
        .map(|component| component.map(|sub| sub.order))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(components = groups.len(), "components collected");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchOptions;
    use crate::error::PathError;
    use crate::graph::algos::cheapest::cheapest_path;
    use crate::graph::admit_all;
    use crate::graph::memory::MemoryGraph;

    fn sorted(mut vertices: Vec<u32>) -> Vec<u32> {
        vertices.sort();
        vertices
    }

    fn two_pieces() -> MemoryGraph<u32> {
        let mut graph = MemoryGraph::new();
        for v in 1..=5 {
            graph.add_vertex(v);
        }
        graph.add_undirected_edge(1, 2, ());
        graph.add_undirected_edge(2, 3, ());
        graph.add_undirected_edge(4, 5, ());
        graph
    }

    #[test]
    fn test_two_components() {
        let graph = two_pieces();
        let groups = connected_components(&graph).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(sorted(groups[0].clone()), vec![1, 2, 3]);
        assert_eq!(sorted(groups[1].clone()), vec![4, 5]);
    }

    #[test]
    fn test_isolated_vertices_are_components() {
        let mut graph = two_pieces();
        graph.add_vertex(6);
        graph.add_vertex(7);

        let groups = connected_components(&graph).unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[2], vec![6]);
        assert_eq!(groups[3], vec![7]);
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph: MemoryGraph<u32> = MemoryGraph::new();
        assert!(components(&graph).next().is_none());
    }

    #[test]
    fn test_sub_graph_filters_crossing_edges() {
        let mut graph = two_pieces();
        graph.add_edge(3, 4, ());

        let view = SubGraph::new(&graph, vec![1, 2, 3]);
        let targets: Vec<u32> = view
            .connections(&3)
            .unwrap()
            .into_iter()
            .map(|c| c.to)
            .collect();

        assert_eq!(targets, vec![2]);
        assert!(view.connections(&4).unwrap_err().is_not_found());
        assert!(view.contains(&1));
        assert!(!view.contains(&5));
        assert_eq!(view.len(), 3);
        // Backing graph still has the crossing edge
        assert_eq!(graph.connections(&3).unwrap().len(), 2);
    }

    #[test]
    fn test_components_feed_cost_aware_search() {
        let mut graph: MemoryGraph<u32, u32> = MemoryGraph::new();
        graph.add_undirected_edge(1, 2, 4);
        graph.add_undirected_edge(2, 3, 1);
        graph.add_undirected_edge(1, 3, 9);
        graph.add_undirected_edge(7, 8, 1);

        let first = components(&graph).next().unwrap().unwrap();
        let result =
            cheapest_path(&first, &1, &3, admit_all, &SearchOptions::default()).unwrap();
        assert_eq!(result.vertices, vec![1, 2, 3]);
        assert_eq!(result.cost, Some(5));

        let err = cheapest_path(&first, &7, &8, admit_all, &SearchOptions::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_ends_iteration() {
        // 2 points at a vertex the graph never registered
        struct Dangling;

        impl Graph for Dangling {
            type Vertex = u32;
            type Cost = ();

            fn connections(&self, v: &u32) -> Result<Vec<Connection<u32, ()>>> {
                match v {
                    1 => Ok(vec![Connection::new(1, 2, ())]),
                    _ => Err(PathError::not_found(v)),
                }
            }

            fn vertices(&self) -> Vec<u32> {
                vec![1, 3]
            }
        }

        let mut iter = components(&Dangling);
        assert!(iter.next().unwrap().unwrap_err().is_not_found());
        assert!(iter.next().is_none());
    }
}
