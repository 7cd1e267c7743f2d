use crate::error::Result;
use crate::graph::types::Connection;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for providing vertex identity and outgoing connections.
///
/// Enumeration must be finite and must not mutate the graph. Whether
/// connections are symmetric is up to the implementation; no algorithm
/// assumes it.
pub trait Graph {
    /// Opaque vertex identifier. No ordering is assumed.
    type Vertex: Clone + Eq + Hash + Debug;
    /// Edge cost carried by connections; `()` for unweighted graphs.
    type Cost: Clone;

    /// Outgoing connections of `vertex`.
    ///
    /// Fails with `PathError::NotFound` when `vertex` is not part of the graph.
    fn connections(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<Vec<Connection<Self::Vertex, Self::Cost>>>;

    /// Every vertex of the graph.
    fn vertices(&self) -> Vec<Self::Vertex>;

    fn contains(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().contains(vertex)
    }

    /// Whether connections are one-way.
    ///
    /// Defaults to `true`. Implementations whose every connection has a
    /// mirror may return `false`; traversals then treat the edge back to a
    /// vertex's tree parent as the same undirected edge rather than a cycle.
    fn is_directed(&self) -> bool {
        true
    }
}

/// Cost algebra for cost-aware search.
///
/// `add` must be associative and monotonic, and `potential` must never
/// overestimate the remaining cost or optimality is lost.
pub trait WeightedGraph: Graph {
    fn zero(&self) -> Self::Cost;

    fn add(&self, a: &Self::Cost, b: &Self::Cost) -> Self::Cost;

    fn compare(&self, a: &Self::Cost, b: &Self::Cost) -> Ordering;

    /// Lower bound on the cost from `from` to `to`. Zero degrades A* to Dijkstra.
    fn potential(&self, _from: &Self::Vertex, _to: &Self::Vertex) -> Self::Cost {
        self.zero()
    }
}

/// Graphs whose vertices carry a mutable label (flood fill).
pub trait LabeledGraph: Graph {
    type Label: Clone;

    fn label(&self, vertex: &Self::Vertex) -> Result<Self::Label>;

    fn set_label(&mut self, vertex: &Self::Vertex, label: Self::Label) -> Result<()>;
}

/// Admission predicate that lets every vertex through.
pub fn admit_all<G: Graph + ?Sized>(_graph: &G, _vertex: &G::Vertex) -> bool {
    true
}
