//! Depth-first traversal with articulation points and cycle callbacks
//!
//! The traversal keeps an explicit stack of frames instead of recursing. A
//! frame is pushed when its vertex is entered and popped on return, so the
//! discovery/exit clock and the low-link bookkeeping match the recursive
//! formulation exactly.

use crate::error::Result;
use crate::graph::types::DfsNode;
use crate::graph::Graph;
use std::collections::HashMap;
use std::hash::Hash;

/// Result of a depth-first traversal
#[derive(Debug, Clone)]
pub struct DfsTree<V> {
    nodes: HashMap<V, DfsNode<V>>,
    order: Vec<V>,
    back_edges: usize,
    stopped: bool,
}

impl<V: Clone + Eq + Hash> DfsTree<V> {
    pub fn node(&self, vertex: &V) -> Option<&DfsNode<V>> {
        self.nodes.get(vertex)
    }

    /// Vertices in discovery order
    pub fn discovery_order(&self) -> &[V] {
        &self.order
    }

    /// Articulation points in discovery order
    pub fn articulation_points(&self) -> Vec<V> {
        self.order
            .iter()
            .filter(|v| self.nodes.get(*v).is_some_and(|n| n.is_articulation))
            .cloned()
            .collect()
    }

    /// Back-edges reported to the cycle callback
    pub fn back_edges(&self) -> usize {
        self.back_edges
    }

    /// A callback ended the traversal early
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A vertex on the explicit stack, with its not-yet-examined targets
struct Frame<V> {
    vertex: V,
    targets: Vec<V>,
    next: usize,
}

impl<V: Clone> Frame<V> {
    fn advance(&mut self) -> Option<V> {
        let target = self.targets.get(self.next).cloned();
        self.next += 1;
        target
    }
}

/// Mutable traversal state shared by the enter and return phases
struct DfsState<V> {
    tree: DfsTree<V>,
    /// Earliest-discovered vertex reachable from each subtree via one back-edge
    reachable_ancestor: HashMap<V, V>,
    stack: Vec<Frame<V>>,
    clock: usize,
    root_children: usize,
}

impl<V: Clone + Eq + Hash> DfsState<V> {
    fn new() -> Self {
        DfsState {
            tree: DfsTree {
                nodes: HashMap::new(),
                order: Vec::new(),
                back_edges: 0,
                stopped: false,
            },
            reachable_ancestor: HashMap::new(),
            stack: Vec::new(),
            clock: 0,
            root_children: 0,
        }
    }

    fn discovered(&self, vertex: &V) -> usize {
        self.tree.nodes.get(vertex).map_or(usize::MAX, |n| n.discovered)
    }

    fn reach_time(&self, vertex: &V) -> usize {
        self.reachable_ancestor
            .get(vertex)
            .map_or(usize::MAX, |a| self.discovered(a))
    }

    /// Enter phase: stamp discovery and push a frame
    fn enter<G>(&mut self, graph: &G, vertex: V, parent: Option<V>) -> Result<()>
    where
        G: Graph<Vertex = V> + ?Sized,
    {
        let targets = graph
            .connections(&vertex)?
            .into_iter()
            .map(|c| c.to)
            .collect();

        self.tree.nodes.insert(
            vertex.clone(),
            DfsNode {
                vertex: vertex.clone(),
                parent,
                discovered: self.clock,
                exited: None,
                is_articulation: false,
            },
        );
        self.clock += 1;
        self.tree.order.push(vertex.clone());
        self.reachable_ancestor.insert(vertex.clone(), vertex.clone());
        self.stack.push(Frame {
            vertex,
            targets,
            next: 0,
        });
        Ok(())
    }

    /// Return phase: stamp exit and fold the subtree's reach into its parent
    fn leave(&mut self, vertex: &V) {
        let exit = self.clock;
        self.clock += 1;

        let parent = match self.tree.nodes.get_mut(vertex) {
            Some(node) => {
                node.exited = Some(exit);
                node.parent.clone()
            }
            None => return,
        };

        let Some(parent) = parent else {
            if let Some(root) = self.tree.nodes.get_mut(vertex) {
                root.is_articulation = self.root_children > 1;
            }
            return;
        };

        let child_reach = self.reach_time(vertex);
        let parent_is_root = self
            .tree
            .nodes
            .get(&parent)
            .is_some_and(|n| n.parent.is_none());

        if parent_is_root {
            self.root_children += 1;
        } else if child_reach >= self.discovered(&parent) {
            if let Some(node) = self.tree.nodes.get_mut(&parent) {
                node.is_articulation = true;
            }
        }

        if child_reach < self.reach_time(&parent) {
            if let Some(reach) = self.reachable_ancestor.get(vertex).cloned() {
                self.reachable_ancestor.insert(parent, reach);
            }
        }
    }
}

/// Depth-first traversal from `start`.
///
/// `on_cycle(node, ancestor)` fires for every back-edge from `node` to an
/// ancestor still on the stack; returning `true` aborts. On undirected graphs
/// (see [`Graph::is_directed`]) the edge leading back to a vertex's own tree
/// parent is not a back-edge. `on_complete(node)` fires
/// when a vertex is left; returning `false` stops the traversal.
///
/// A non-root vertex is an articulation point when one of its child subtrees
/// has no back-edge above it; the root is one when it has more than one child.
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn dfs<G, C, F>(
    graph: &G,
    start: &G::Vertex,
    mut on_cycle: C,
    mut on_complete: F,
) -> Result<DfsTree<G::Vertex>>
where
    G: Graph + ?Sized,
    C: FnMut(&DfsNode<G::Vertex>, &G::Vertex) -> bool,
    F: FnMut(&DfsNode<G::Vertex>) -> bool,
{
    let directed = graph.is_directed();
    let mut state = DfsState::new();
    state.enter(graph, start.clone(), None)?;

    while let Some(frame) = state.stack.last_mut() {
        let vertex = frame.vertex.clone();

        let Some(target) = frame.advance() else {
            state.stack.pop();
            state.leave(&vertex);
            let keep_going = state.tree.nodes.get(&vertex).is_none_or(&mut on_complete);
            if !keep_going {
                state.tree.stopped = true;
                break;
            }
            continue;
        };

        let Some(target_node) = state.tree.nodes.get(&target) else {
            state.enter(graph, target, Some(vertex))?;
            continue;
        };

        // Finished vertices are descendants or cross edges, never cycles here
        if target_node.exited.is_some() {
            continue;
        }

        let Some(node) = state.tree.nodes.get(&vertex) else {
            continue;
        };
        if !directed && node.parent.as_ref() == Some(&target) {
            continue;
        }

        state.tree.back_edges += 1;
        if on_cycle(node, &target) {
            state.tree.stopped = true;
            break;
        }

        if state.discovered(&target) < state.reach_time(&vertex) {
            state.reachable_ancestor.insert(vertex, target);
        }
    }

    tracing::debug!(
        discovered = state.tree.order.len(),
        back_edges = state.tree.back_edges,
        stopped = state.tree.stopped,
        "dfs finished"
    );
    Ok(state.tree)
}

/// Every vertex reachable from `start`, in DFS discovery order
pub fn dfs_order<G>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>>
where
    G: Graph + ?Sized,
{
    let tree = dfs(graph, start, |_, _| false, |_| true)?;
    Ok(tree.order)
}

/// Articulation points of the component containing `start`
pub fn articulation_points<G>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>>
where
    G: Graph + ?Sized,
{
    let tree = dfs(graph, start, |_, _| false, |_| true)?;
    Ok(tree.articulation_points())
}

/// True when a back-edge is reachable from `start`
pub fn has_cycle<G>(graph: &G, start: &G::Vertex) -> Result<bool>
where
    G: Graph + ?Sized,
{
    let tree = dfs(graph, start, |_, _| true, |_| true)?;
    Ok(tree.back_edges > 0)
}
