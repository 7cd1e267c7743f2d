//! Flood fill over a labelled graph
//!
//! Both variants visit a vertex, and when the admission predicate accepts it,
//! assign the label and schedule every connected vertex. Neighbours are
//! scheduled whatever label they already carry, so the predicate must reject
//! labelled vertices or the fill will not terminate on a cyclic graph.

use crate::config::FloodStrategy;
use crate::error::Result;
use crate::graph::LabeledGraph;
use std::collections::VecDeque;

/// Flood fill using the given visit order; returns the number of labels assigned
#[tracing::instrument(skip_all, fields(start = ?start, strategy = ?strategy))]
pub fn flood_fill<G, A>(
    graph: &mut G,
    start: &G::Vertex,
    label: G::Label,
    admit: A,
    strategy: FloodStrategy,
) -> Result<usize>
where
    G: LabeledGraph + ?Sized,
    A: Fn(&G, &G::Vertex) -> bool,
{
    let labelled = match strategy {
        FloodStrategy::DepthFirst => flood_fill_depth_first(graph, start, label, admit)?,
        FloodStrategy::BreadthFirst => flood_fill_breadth_first(graph, start, label, admit)?,
    };
    tracing::debug!(labelled, "flood fill finished");
    Ok(labelled)
}

/// Flood fill in recursion order, driven by an explicit stack
pub fn flood_fill_depth_first<G, A>(
    graph: &mut G,
    start: &G::Vertex,
    label: G::Label,
    admit: A,
) -> Result<usize>
where
    G: LabeledGraph + ?Sized,
    A: Fn(&G, &G::Vertex) -> bool,
{
    let mut stack = vec![start.clone()];
    let mut labelled = 0;

    while let Some(vertex) = stack.pop() {
        if !admit(&*graph, &vertex) {
            continue;
        }
        graph.set_label(&vertex, label.clone())?;
        labelled += 1;

        // Reversed so the first connection is visited first, as a recursive call would
        let connections = graph.connections(&vertex)?;
        stack.extend(connections.into_iter().rev().map(|c| c.to));
    }

    Ok(labelled)
}

/// Flood fill in level order, driven by a FIFO queue
pub fn flood_fill_breadth_first<G, A>(
    graph: &mut G,
    start: &G::Vertex,
    label: G::Label,
    admit: A,
) -> Result<usize>
where
    G: LabeledGraph + ?Sized,
    A: Fn(&G, &G::Vertex) -> bool,
{
    let mut queue = VecDeque::from([start.clone()]);
    let mut labelled = 0;

    while let Some(vertex) = queue.pop_front() {
        if !admit(&*graph, &vertex) {
            continue;
        }
        graph.set_label(&vertex, label.clone())?;
        labelled += 1;

        queue.extend(graph.connections(&vertex)?.into_iter().map(|c| c.to));
    }

    Ok(labelled)
}
