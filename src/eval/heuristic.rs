//! Heuristic evaluation of a Quoridor position.
//!
//! The score is a weighted sum, always from the point of view of the
//! `perspective` player regardless of whose turn it is:
//! - path differential (opponent's shortest path minus ours)
//! - wall supply differential
//! - rows advanced toward the goal
//!
//! Path differential dominates; the other two terms break ties between
//! positions that are equally far from finishing.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, BOARD_CELLS};
use crate::rules::{Bfs, PathOracle};

/// Per-term weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per step of path differential.
    pub path: i32,
    /// Per wall of supply differential.
    pub walls: i32,
    /// Per row advanced.
    pub progress: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            path: 1000,
            walls: 50,
            progress: 100,
        }
    }
}

impl EvalWeights {
    /// Largest magnitude [`evaluate_with`] can return under these weights.
    #[must_use]
    pub fn max_magnitude(&self) -> i32 {
        let cells = BOARD_CELLS as i32;
        self.path.abs() * cells + self.walls.abs() * 10 + self.progress.abs() * 8
    }
}

/// Path length with an unreachable goal mapped past any real distance.
///
/// Cannot happen in a legal position; the mapping keeps the arithmetic
/// total if it ever does.
#[must_use]
pub fn path_or_worst(length: Option<u32>) -> i32 {
    length.map_or(BOARD_CELLS as i32, |l| l as i32)
}

/// Score `state` for `perspective` with default weights and plain BFS.
#[must_use]
pub fn evaluate(state: &GameState, perspective: PlayerId) -> i32 {
    evaluate_with(state, perspective, &EvalWeights::default(), &mut Bfs)
}

/// Score `state` for `perspective`.
#[must_use]
pub fn evaluate_with<O: PathOracle>(
    state: &GameState,
    perspective: PlayerId,
    weights: &EvalWeights,
    oracle: &mut O,
) -> i32 {
    let opponent = perspective.opponent();
    let mask = state.wall_mask();

    let mine = path_or_worst(oracle.path_length(mask, state.position(perspective), perspective.goal_row()));
    let theirs = path_or_worst(oracle.path_length(mask, state.position(opponent), opponent.goal_row()));

    let wall_diff = i32::from(state.walls_remaining(perspective)) - i32::from(state.walls_remaining(opponent));
    let progress = i32::from(perspective.progress(state.position(perspective)));

    weights.path * (theirs - mine) + weights.walls * wall_diff + weights.progress * progress
}
