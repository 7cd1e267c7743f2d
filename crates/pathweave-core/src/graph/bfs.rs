pub(crate) mod path;

use crate::config::SearchOptions;
use crate::error::Result;
use crate::graph::types::{BfsNode, PathResult, TraversalOutcome};
use crate::graph::Graph;
use path::reconstruct_from_map;
use std::collections::{HashMap, HashSet, VecDeque};

/// Level-order traversal from `start`.
///
/// Each dequeued vertex is offered to `on_complete`; returning `false` stops
/// the traversal. Vertices complete in non-decreasing hop distance.
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn bfs<G, F>(graph: &G, start: &G::Vertex, mut on_complete: F) -> Result<TraversalOutcome>
where
    G: Graph + ?Sized,
    F: FnMut(&BfsNode<G::Vertex>) -> bool,
{
    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut queue: VecDeque<BfsNode<G::Vertex>> = VecDeque::new();
    let mut outcome = TraversalOutcome::default();

    visited.insert(start.clone());
    queue.push_back(BfsNode {
        vertex: start.clone(),
        parent: None,
        depth: 0,
    });

    while let Some(node) = queue.pop_front() {
        let connections = graph.connections(&node.vertex)?;

        outcome.completed += 1;
        if !on_complete(&node) {
            outcome.stopped = true;
            break;
        }

        for connection in connections {
            if visited.insert(connection.to.clone()) {
                queue.push_back(BfsNode {
                    vertex: connection.to,
                    parent: Some(node.vertex.clone()),
                    depth: node.depth + 1,
                });
            }
        }
    }

    tracing::debug!(
        completed = outcome.completed,
        stopped = outcome.stopped,
        "bfs finished"
    );
    Ok(outcome)
}

/// Every vertex reachable from `start`, in BFS completion order
pub fn bfs_order<G>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>>
where
    G: Graph + ?Sized,
{
    let mut order = Vec::new();
    bfs(graph, start, |node| {
        order.push(node.vertex.clone());
        true
    })?;
    Ok(order)
}

/// Shortest hop path from `start` to `goal` through admitted vertices.
///
/// Every edge counts as one hop, so the first discovery of a vertex is
/// optimal and the search ends the moment `goal` is discovered. The result is
/// empty when `start` is not admitted or `goal` is unreachable.
#[tracing::instrument(skip_all, fields(start = ?start, goal = ?goal, max_expansions = ?opts.max_expansions))]
pub fn best_path<G, A>(
    graph: &G,
    start: &G::Vertex,
    goal: &G::Vertex,
    admit: A,
    opts: &SearchOptions,
) -> Result<PathResult<G::Vertex, usize>>
where
    G: Graph + ?Sized,
    A: Fn(&G, &G::Vertex) -> bool,
{
    opts.validate()?;

    if !admit(graph, start) {
        tracing::debug!("start rejected by admission predicate");
        return Ok(PathResult::empty());
    }

    if start == goal {
        return Ok(PathResult {
            vertices: vec![start.clone()],
            cost: Some(0),
            truncated: false,
        });
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut predecessors: HashMap<G::Vertex, G::Vertex> = HashMap::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();
    let mut expanded = 0usize;

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if opts.budget_exhausted(expanded) {
            tracing::warn!(expanded, "best_path stopped on expansion budget");
            return Ok(PathResult::truncated());
        }
        expanded += 1;

        for connection in graph.connections(&current)? {
            let neighbor = connection.to;
            // Rejected vertices stay visited; the predicate is pure
            if !visited.insert(neighbor.clone()) || !admit(graph, &neighbor) {
                continue;
            }

            predecessors.insert(neighbor.clone(), current.clone());

            if neighbor == *goal {
                let vertices = reconstruct_from_map(start, goal, &predecessors);
                let hops = vertices.len().saturating_sub(1);
                tracing::debug!(expanded, hops, "best_path found goal");
                return Ok(PathResult {
                    vertices,
                    cost: Some(hops),
                    truncated: false,
                });
            }

            queue.push_back(neighbor);
        }
    }

    tracing::debug!(expanded, "best_path exhausted frontier");
    Ok(PathResult::empty())
}
