//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root children included.
    pub nodes: u64,

    /// Positions scored by the evaluator at the depth limit.
    pub leaf_evaluations: u64,

    /// Sibling lists abandoned because `alpha >= beta`.
    pub cutoffs: u64,

    /// Wall placements checked while ordering moves.
    pub wall_checks: u64,

    /// Deepest iteration that finished.
    pub depth_completed: u32,

    /// BFS answers served from the path cache.
    pub path_cache_hits: u64,

    /// BFS runs performed.
    pub path_cache_misses: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of path lookups answered by the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.path_cache_hits + self.path_cache_misses;
        if total == 0 {
            0.0
        } else {
            self.path_cache_hits as f64 / total as f64
        }
    }
}
