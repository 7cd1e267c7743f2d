//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Tunables shared by the admission-gated searches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchOptions {
    /// Upper bound on vertices expanded by best/cheapest path (unbounded if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,

    /// Visit order used by `flood_fill`
    #[serde(default)]
    pub flood_strategy: FloodStrategy,
}

/// Visit order for flood fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloodStrategy {
    /// Recursion order, driven by an explicit LIFO stack
    DepthFirst,
    /// Level order, driven by a FIFO queue
    #[default]
    BreadthFirst,
}
