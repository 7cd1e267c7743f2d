use crate::config::SearchOptions;
use crate::error::Result;
use crate::graph::bfs::path::reconstruct_path;
use crate::graph::types::PathResult;
use crate::graph::WeightedGraph;
use crate::log_search_metrics;
use crate::logging::SearchMetrics;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Best known route to a vertex during one cheapest-path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMark<V, C> {
    pub vertex: V,
    pub incoming: Option<V>,
    pub cost_from_start: C,
    /// `cost_from_start + potential(vertex, goal)`
    pub estimated_total: C,
}

/// Frontier entry ordered by estimated total cost through the graph's algebra.
///
/// Entries snapshot the cost they were pushed with; an entry whose snapshot is
/// worse than its vertex's current mark is stale and skipped on removal.
pub struct HeapEntry<'g, G: WeightedGraph + ?Sized> {
    graph: &'g G,
    pub vertex: G::Vertex,
    pub cost_from_start: G::Cost,
    pub estimated_total: G::Cost,
}

impl<G: WeightedGraph + ?Sized> PartialEq for HeapEntry<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<G: WeightedGraph + ?Sized> Eq for HeapEntry<'_, G> {}

impl<G: WeightedGraph + ?Sized> PartialOrd for HeapEntry<'_, G> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<G: WeightedGraph + ?Sized> Ord for HeapEntry<'_, G> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.graph.compare(&self.estimated_total, &other.estimated_total)
    }
}

/// State tracked during one cheapest-path search
struct CheapestState<'g, G: WeightedGraph + ?Sized> {
    graph: &'g G,
    marks: HashMap<G::Vertex, SearchMark<G::Vertex, G::Cost>>,
    heap: BinaryHeap<Reverse<HeapEntry<'g, G>>>,
    metrics: SearchMetrics,
}

impl<'g, G: WeightedGraph + ?Sized> CheapestState<'g, G> {
    fn new(graph: &'g G) -> Self {
        CheapestState {
            graph,
            marks: HashMap::new(),
            heap: BinaryHeap::new(),
            metrics: SearchMetrics::new(),
        }
    }

    /// Record `mark` and queue it for expansion
    fn push(&mut self, mark: SearchMark<G::Vertex, G::Cost>) {
        self.heap.push(Reverse(HeapEntry {
            graph: self.graph,
            vertex: mark.vertex.clone(),
            cost_from_start: mark.cost_from_start.clone(),
            estimated_total: mark.estimated_total.clone(),
        }));
        self.metrics.record_push();
        self.marks.insert(mark.vertex.clone(), mark);
    }

    /// True when `entry` no longer reflects its vertex's best known cost
    fn is_stale(&self, entry: &HeapEntry<'g, G>) -> bool {
        self.marks.get(&entry.vertex).is_none_or(|mark| {
            self.graph
                .compare(&entry.cost_from_start, &mark.cost_from_start)
                == Ordering::Greater
        })
    }

    /// Offer a route to `to` via `from`; keeps it only on strict improvement
    fn relax(&mut self, from: &G::Vertex, to: G::Vertex, candidate: G::Cost, goal: &G::Vertex) {
        if let Some(existing) = self.marks.get(&to) {
            if self.graph.compare(&candidate, &existing.cost_from_start) != Ordering::Less {
                return;
            }
        }
        let estimated_total = self
            .graph
            .add(&candidate, &self.graph.potential(&to, goal));
        self.push(SearchMark {
            vertex: to,
            incoming: Some(from.clone()),
            cost_from_start: candidate,
            estimated_total,
        });
    }
}

/// Cheapest path from `start` to `goal` through admitted vertices.
///
/// Generalised Dijkstra/A*: the frontier is ordered by
/// `cost_from_start + potential(vertex, goal)` under the graph's cost algebra.
/// With an admissible potential the returned cost is minimal; with a potential
/// that overestimates it may not be. Equal-cost alternatives are chosen in
/// arbitrary order.
///
/// The result is empty when `start` is not admitted or `goal` is unreachable.
/// When the expansion budget runs out the result is marked `truncated`; it
/// still carries the best goal route recorded so far, if any, which may not
/// be the cheapest.
#[tracing::instrument(skip_all, fields(start = ?start, goal = ?goal, max_expansions = ?opts.max_expansions))]
pub fn cheapest_path<G, A>(
    graph: &G,
    start: &G::Vertex,
    goal: &G::Vertex,
    admit: A,
    opts: &SearchOptions,
) -> Result<PathResult<G::Vertex, G::Cost>>
where
    G: WeightedGraph + ?Sized,
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
            cost: Some(graph.zero()),
            truncated: false,
        });
    }

    let mut state = CheapestState::new(graph);
    let zero = graph.zero();
    state.push(SearchMark {
        vertex: start.clone(),
        incoming: None,
        estimated_total: graph.add(&zero, &graph.potential(start, goal)),
        cost_from_start: zero,
    });

    let mut best: Option<G::Cost> = None;
    let mut expanded = 0usize;
    let mut truncated = false;

    while let Some(Reverse(entry)) = state.heap.pop() {
        if state.is_stale(&entry) {
            state.metrics.record_stale();
            continue;
        }

        if let Some(best_cost) = &best {
            // Nothing left on the frontier can undercut the recorded goal cost
            if graph.compare(&entry.estimated_total, best_cost) != Ordering::Less {
                break;
            }
            if graph.compare(&entry.cost_from_start, best_cost) != Ordering::Less {
                state.metrics.record_stale();
                continue;
            }
        }

        if entry.vertex == *goal {
            best = Some(entry.cost_from_start);
            continue;
        }

        if opts.budget_exhausted(expanded) {
            tracing::warn!(
                expanded,
                goal_reached = best.is_some(),
                "cheapest_path stopped on expansion budget"
            );
            truncated = true;
            break;
        }
        expanded += 1;
        state.metrics.record_expansion();

        for connection in graph.connections(&entry.vertex)? {
            if !admit(graph, &connection.to) {
                continue;
            }
            let candidate = graph.add(&entry.cost_from_start, &connection.cost);
            state.relax(&entry.vertex, connection.to, candidate, goal);
        }
    }

    log_search_metrics!(&state.metrics, "cheapest_path");

    if best.is_none() {
        if truncated {
            return Ok(PathResult::truncated());
        }
        tracing::debug!(expanded, "cheapest_path exhausted frontier");
        return Ok(PathResult::empty());
    }

    let cost = state.marks.get(goal).map(|mark| mark.cost_from_start.clone());
    let vertices = reconstruct_path(start, goal, |v| {
        state.marks.get(v).and_then(|mark| mark.incoming.clone())
    });
    tracing::debug!(
        expanded,
        hops = vertices.len().saturating_sub(1),
        "cheapest_path found goal"
    );

    Ok(PathResult {
        vertices,
        cost,
        truncated,
    })
}
