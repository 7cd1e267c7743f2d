//! Greedy complete-path heuristic
//!
//! Approximates a low-cost path through every vertex by stitching fragments:
//! the cheapest admissible directed edge is committed first, and each vertex
//! keeps at most one committed successor and one predecessor. There is no
//! optimality guarantee.

use crate::error::Result;
use crate::graph::types::PathResult;
use crate::graph::WeightedGraph;
use crate::trace_time;
use std::collections::HashMap;
use std::time::Instant;

/// Dense cheapest-edge matrix over the graph's vertices
struct CostMatrix<C> {
    size: usize,
    cells: Vec<Option<C>>,
}

impl<C: Clone> CostMatrix<C> {
    fn build<G>(graph: &G, vertices: &[G::Vertex]) -> Result<Self>
    where
        G: WeightedGraph<Cost = C> + ?Sized,
    {
        let size = vertices.len();
        let index: HashMap<&G::Vertex, usize> =
            vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
        let mut cells: Vec<Option<C>> = vec![None; size * size];

        for (from, vertex) in vertices.iter().enumerate() {
            for connection in graph.connections(vertex)? {
                let Some(&to) = index.get(&connection.to) else {
                    continue;
                };
                if to == from {
                    continue;
                }
                let cell = &mut cells[from * size + to];
                let cheaper = cell.as_ref().is_none_or(|existing| {
                    graph.compare(&connection.cost, existing) == std::cmp::Ordering::Less
                });
                if cheaper {
                    *cell = Some(connection.cost);
                }
            }
        }

        Ok(CostMatrix { size, cells })
    }

    /// Admissible edges `(from, to, cost)` in matrix order
    fn into_edges(self) -> Vec<(usize, usize, C)> {
        let size = self.size;
        self.cells
            .into_iter()
            .enumerate()
            .filter_map(|(k, cost)| cost.map(|c| (k / size, k % size, c)))
            .collect()
    }
}

/// Partial successor chain assembled from committed edges
struct Chain<C> {
    successor: Vec<Option<(usize, C)>>,
    predecessor: Vec<Option<usize>>,
    committed: usize,
}

impl<C> Chain<C> {
    fn new(size: usize) -> Self {
        Chain {
            successor: (0..size).map(|_| None).collect(),
            predecessor: vec![None; size],
            committed: 0,
        }
    }

    fn head_of(&self, mut vertex: usize) -> usize {
        while let Some(pred) = self.predecessor[vertex] {
            vertex = pred;
        }
        vertex
    }

    /// Degree limits hold and the edge would not close a cycle
    fn admits(&self, from: usize, to: usize) -> bool {
        self.successor[from].is_none()
            && self.predecessor[to].is_none()
            && self.head_of(from) != to
    }

    fn commit(&mut self, from: usize, to: usize, cost: C) {
        self.successor[from] = Some((to, cost));
        self.predecessor[to] = Some(from);
        self.committed += 1;
    }
}

/// Greedy low-cost path visiting every vertex exactly once.
///
/// Returns an empty result when the committed edges do not form a single
/// chain through all vertices, which includes every disconnected graph. An
/// empty result means "no tour found", never a partial tour. Ties between
/// equal-cost edges resolve in matrix order.
#[tracing::instrument(skip_all)]
pub fn complete_path<G>(graph: &G) -> Result<PathResult<G::Vertex, G::Cost>>
where
    G: WeightedGraph + ?Sized,
{
    let vertices = graph.vertices();
    let size = vertices.len();

    match size {
        0 => return Ok(PathResult::empty()),
        1 => {
            return Ok(PathResult {
                vertices,
                cost: Some(graph.zero()),
                truncated: false,
            })
        }
        _ => {}
    }

    let start = Instant::now();
    let mut edges = CostMatrix::build(graph, &vertices)?.into_edges();
    trace_time!(start, "cost_matrix", edges = edges.len());
    // Admissibility only ever shrinks, so one pass in cost order picks the
    // globally cheapest admissible edge at every step
    edges.sort_by(|a, b| graph.compare(&a.2, &b.2));

    let mut chain = Chain::new(size);
    for (from, to, cost) in edges {
        if chain.committed == size - 1 {
            break;
        }
        if chain.admits(from, to) {
            chain.commit(from, to, cost);
        }
    }

    if chain.committed != size - 1 {
        tracing::debug!(
            committed = chain.committed,
            vertices = size,
            "greedy chain does not span the graph"
        );
        return Ok(PathResult::empty());
    }

    let mut current = chain.head_of(0);
    let mut order = vec![current];
    let mut total = graph.zero();
    while let Some((next, cost)) = &chain.successor[current] {
        total = graph.add(&total, cost);
        current = *next;
        order.push(current);
    }

    tracing::debug!(vertices = size, "complete path assembled");
    Ok(PathResult {
        vertices: order.into_iter().map(|i| vertices[i].clone()).collect(),
        cost: Some(total),
        truncated: false,
    })
}
