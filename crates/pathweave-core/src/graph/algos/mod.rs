//! Graph algorithm implementations
//!
//! - `cheapest`: A* / Dijkstra over a caller-defined cost algebra
//! - `complete_path`: greedy path through every vertex
//! - `components`: connected components as sub-graph views
//! - `dfs`: depth-first traversal, cycle detection and articulation points
//! - `flood`: labelling of admitted reachable regions

pub mod cheapest;
pub mod complete_path;
pub mod components;
pub mod dfs;
pub mod flood;

pub use cheapest::{cheapest_path, SearchMark};
pub use complete_path::complete_path;
pub use components::{components, connected_components, Components, SubGraph};
pub use dfs::{articulation_points, dfs, dfs_order, has_cycle, DfsTree};
pub use flood::{flood_fill, flood_fill_breadth_first, flood_fill_depth_first};
