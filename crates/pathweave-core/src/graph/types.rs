/// A directed, costed relation between two vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection<V, C> {
    pub from: V,
    pub to: V,
    pub cost: C,
}

impl<V, C> Connection<V, C> {
    pub fn new(from: V, to: V, cost: C) -> Self {
        Connection { from, to, cost }
    }
}

/// Outcome of a path search or tour construction.
///
/// An empty `vertices` list means "no path found"; that is a normal result,
/// not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<V, C> {
    /// Vertices from start to goal inclusive
    pub vertices: Vec<V>,
    /// Total cost of `vertices`, when a path was found
    pub cost: Option<C>,
    /// The search stopped on its expansion budget before deciding
    pub truncated: bool,
}

impl<V, C> PathResult<V, C> {
    pub fn empty() -> Self {
        PathResult {
            vertices: Vec::new(),
            cost: None,
            truncated: false,
        }
    }

    pub fn truncated() -> Self {
        PathResult {
            truncated: true,
            ..Self::empty()
        }
    }

    pub fn found(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// A vertex completed by breadth-first traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsNode<V> {
    pub vertex: V,
    pub parent: Option<V>,
    /// Hop count from the start vertex
    pub depth: usize,
}

/// A vertex of a depth-first traversal tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsNode<V> {
    pub vertex: V,
    pub parent: Option<V>,
    /// Clock value when the vertex was entered
    pub discovered: usize,
    /// Clock value when the vertex was left; `None` while still on the stack
    pub exited: Option<usize>,
    pub is_articulation: bool,
}

/// Summary of a callback-driven traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOutcome {
    /// Vertices offered to the completion callback
    pub completed: usize,
    /// A callback asked the traversal to stop
    pub stopped: bool,
}
