//! Graph traversal and path-finding operations
//!
//! Algorithms are written against the capability traits in [`traversal`],
//! so any vertex and cost types a caller supplies can be searched:
//! - BFS traversal and fewest-hop paths
//! - DFS with cycle detection and articulation points
//! - A* / Dijkstra cheapest paths under a custom cost algebra
//! - Flood fill, connected components and a greedy complete path

pub mod algos;
pub mod bfs;
pub mod grid;
pub mod memory;
pub mod traversal;
pub mod types;

pub use algos::{
    articulation_points, cheapest_path, complete_path, components, connected_components, dfs,
    dfs_order, flood_fill, has_cycle, Components, DfsTree, SubGraph,
};
pub use bfs::{best_path, bfs, bfs_order};
pub use grid::{Cell, GridGraph};
pub use memory::MemoryGraph;
pub use traversal::{admit_all, Graph, LabeledGraph, WeightedGraph};
pub use types::{BfsNode, Connection, DfsNode, PathResult, TraversalOutcome};
