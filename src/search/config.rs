//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the root (default: 3).
    /// Values below 1 are treated as 1.
    pub max_depth: u32,

    /// Wall moves kept per node after ordering (default: 10).
    /// Bounds the branching factor; pawn moves are never cut.
    pub wall_candidates: usize,

    /// Score of a won position, reduced by one per ply so faster wins rank
    /// higher. Must exceed anything the evaluator can return.
    pub win_score: i32,

    /// Penalty for a node where the opponent is to move with a winning
    /// step available. Must also exceed any evaluator score.
    pub threat_penalty: i32,

    /// Alpha-beta cutoffs on (default) or plain minimax.
    /// Both choose the same move with the same score.
    pub pruning: bool,

    /// Wall-clock budget in milliseconds. When set, the search deepens
    /// iteratively from depth 1 and keeps the deepest completed iteration.
    pub time_limit_ms: Option<u64>,

    /// Evaluator weights used at the depth limit.
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            wall_candidates: 10,
            win_score: 1_000_000,
            threat_penalty: 500_000,
            pruning: true,
            time_limit_ms: None,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set how many wall moves survive ordering.
    pub fn with_wall_candidates(mut self, count: usize) -> Self {
        self.wall_candidates = count;
        self
    }

    /// Enable or disable alpha-beta cutoffs.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Set a wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the win and threat magnitudes.
    pub fn with_win_scores(mut self, win_score: i32, threat_penalty: i32) -> Self {
        self.win_score = win_score;
        self.threat_penalty = threat_penalty;
        self
    }

    /// Depth actually searched.
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.max_depth.max(1)
    }
}
