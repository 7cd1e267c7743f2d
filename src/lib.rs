//! Pathweave - generic graph traversal and path-finding
//!
//! The algorithms live in `pathweave-core`; this crate re-exports them under
//! one name. Any type that can enumerate its vertices and outgoing
//! connections can be searched:
//!
//! ```
//! use pathweave::config::SearchOptions;
//! use pathweave::graph::{cheapest_path, GridGraph};
//!
//! let grid = GridGraph::<u32>::from_rows(&["....", ".##.", "...."])?;
//! let open = |g: &GridGraph, cell: &(usize, usize)| g.is_open(cell);
//! let path = cheapest_path(&grid, &(0, 0), &(3, 2), open, &SearchOptions::default())?;
//!
//! assert_eq!(path.cost, Some(5));
//! assert_eq!(path.vertices.first(), Some(&(0, 0)));
//! # Ok::<(), pathweave::error::PathError>(())
//! ```

pub use pathweave_core::{config, error, graph, logging};

pub use pathweave_core::config::{FloodStrategy, SearchOptions};
pub use pathweave_core::error::{PathError, Result};
pub use pathweave_core::graph::{admit_all, Graph, LabeledGraph, PathResult, WeightedGraph};
