//! Entry points for a turn controller.
//!
//! A host drives a game through four calls:
//! - [`describe_legal_moves`] to highlight what the human may do
//! - [`validate_move`] / [`apply_move`] to act on input
//! - [`is_terminal`] after every applied move
//!
//! AI moves come from [`crate::ai::request_ai_move`] and go through the
//! same [`apply_move`].

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{GameState, Move, PlayerId, Position, Wall};

use super::error::MoveError;
use super::movegen::{legal_pawn_moves, legal_wall_placements};
use super::validator::check_wall_placement;

/// Everything `player` may do from a state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoves {
    pub pawn_targets: Vec<Position>,
    pub wall_candidates: Vec<Wall>,
}

impl LegalMoves {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pawn_targets.len() + self.wall_candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pawn_targets.is_empty() && self.wall_candidates.is_empty()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        match mv {
            Move::Pawn(target) => self.pawn_targets.contains(&target),
            Move::Wall(wall) => self.wall_candidates.contains(&wall),
        }
    }

    /// Flatten into moves, pawn moves first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.pawn_targets
            .iter()
            .copied()
            .map(Move::Pawn)
            .chain(self.wall_candidates.iter().copied().map(Move::Wall))
    }
}

/// Pawn targets and legal walls for `player`.
///
/// Empty once the game is over.
#[must_use]
pub fn describe_legal_moves(state: &GameState, player: PlayerId) -> LegalMoves {
    if state.is_over() {
        return LegalMoves::default();
    }
    LegalMoves {
        pawn_targets: legal_pawn_moves(state, player).into_vec(),
        wall_candidates: legal_wall_placements(state, player),
    }
}

/// Check `mv` for the side to move without changing anything.
pub fn validate_move(state: &GameState, mv: Move) -> Result<(), MoveError> {
    let result = check_move(state, mv);
    if let Err(err) = &result {
        debug!(player = %state.to_move(), %mv, %err, "move rejected");
    }
    result
}

fn check_move(state: &GameState, mv: Move) -> Result<(), MoveError> {
    if state.is_over() {
        return Err(MoveError::GameOver);
    }
    let player = state.to_move();

    match mv {
        Move::Pawn(to) => {
            if legal_pawn_moves(state, player).contains(&to) {
                Ok(())
            } else {
                Err(MoveError::IllegalPawnMove {
                    from: state.position(player),
                    to,
                })
            }
        }
        Move::Wall(wall) => {
            if !state.player(player).has_walls() {
                return Err(MoveError::NoWallsRemaining { player });
            }
            check_wall_placement(state, wall)?;
            Ok(())
        }
    }
}

/// Validate `mv` for the side to move and return the resulting state.
///
/// `state` itself is never modified.
#[instrument(level = "debug", skip_all, fields(player = %state.to_move(), mv = %mv))]
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    validate_move(state, mv)?;
    let next = state.after(mv);
    if let Some(winner) = next.winner() {
        debug!(%winner, "game over");
    }
    Ok(next)
}

/// The winner, once there is one.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<PlayerId> {
    state.winner()
}
