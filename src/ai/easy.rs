//! Easy AI: greedy steps with random walls.

use tracing::trace;

use crate::core::{GameRng, GameRngState, GameState, Move, PlayerId};
use crate::rules::{legal_pawn_moves, legal_wall_placements, MoveError};

use super::{ensure_can_move, Strategy};

/// Flips a weighted coin each turn: heads places a uniformly random legal
/// wall, tails steps to the neighbor nearest the goal row by row count
/// alone, ignoring walls.
#[derive(Clone, Debug)]
pub struct EasyAi {
    rng: GameRng,
    wall_probability: f64,
}

impl EasyAi {
    #[must_use]
    pub fn new(seed: u64, wall_probability: f64) -> Self {
        Self {
            rng: GameRng::new(seed),
            wall_probability,
        }
    }

    /// Continue a saved random stream.
    #[must_use]
    pub fn resume(rng: &GameRngState, wall_probability: f64) -> Self {
        Self {
            rng: GameRng::from_state(rng),
            wall_probability,
        }
    }

    /// Stream position to persist alongside a game snapshot.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Pawn target closest to the goal row; ties go to the lowest column.
    fn greedy_step(state: &GameState, player: PlayerId) -> Option<Move> {
        let goal = player.goal_row();
        legal_pawn_moves(state, player)
            .into_iter()
            .min_by_key(|p| (p.row.abs_diff(goal), p.col))
            .map(Move::Pawn)
    }
}

impl Strategy for EasyAi {
    fn decide(&mut self, state: &GameState, player: PlayerId) -> Result<Move, MoveError> {
        ensure_can_move(state, player)?;

        if state.player(player).has_walls() && self.rng.coin(self.wall_probability) {
            let walls = legal_wall_placements(state, player);
            if let Some(wall) = self.rng.pick(&walls) {
                trace!(%wall, candidates = walls.len(), "random wall");
                return Ok(Move::Wall(wall));
            }
        }

        Self::greedy_step(state, player).ok_or(MoveError::NoLegalMoves { player })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, Wall};

    #[test]
    fn test_nan_probability_only_steps() {
        let state = GameState::new();
        let mut ai = EasyAi::new(1, f64::NAN);
        for _ in 0..10 {
            assert_eq!(ai.decide(&state, PlayerId::ONE).unwrap(), Move::Pawn(Position::new(7, 4)));
        }
    }

    #[test]
    fn test_never_walls_without_supply() {
        let state = GameState::builder()
            .walls_remaining(PlayerId::ONE, 0)
            .build()
            .unwrap();
        let mut ai = EasyAi::new(1, 1.0);

        for _ in 0..20 {
            assert!(ai.decide(&state, PlayerId::ONE).unwrap().is_pawn());
        }
    }

    #[test]
    fn test_always_walls_at_probability_one() {
        let state = GameState::new();
        let mut ai = EasyAi::new(3, 1.0);
        let mv = ai.decide(&state, PlayerId::ONE).unwrap();
        assert!(mv.is_wall());
        assert!(state.clone().play(mv).is_ok());
    }

    #[test]
    fn test_greedy_step_forward() {
        let state = GameState::new();
        let mut ai = EasyAi::new(3, 0.0);
        assert_eq!(ai.decide(&state, PlayerId::ONE).unwrap(), Move::Pawn(Position::new(7, 4)));
    }

    #[test]
    fn test_greedy_tie_takes_lowest_column() {
        // Forward is walled off, so both sideways steps tie on row distance.
        let state = GameState::builder()
            .wall(PlayerId::TWO, Wall::horizontal(7, 4))
            .build()
            .unwrap();
        let mut ai = EasyAi::new(3, 0.0);
        assert_eq!(ai.decide(&state, PlayerId::ONE).unwrap(), Move::Pawn(Position::new(8, 3)));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let state = GameState::new();
        let mut a = EasyAi::new(99, 0.5);
        let mut b = EasyAi::new(99, 0.5);
        for _ in 0..10 {
            assert_eq!(a.decide(&state, PlayerId::ONE), b.decide(&state, PlayerId::ONE));
        }
    }

    #[test]
    fn test_resume_continues_stream() {
        let state = GameState::new();
        let mut ai = EasyAi::new(5, 0.5);
        ai.decide(&state, PlayerId::ONE).unwrap();

        let mut resumed = EasyAi::resume(&ai.rng_state(), 0.5);
        for _ in 0..10 {
            assert_eq!(ai.decide(&state, PlayerId::ONE), resumed.decide(&state, PlayerId::ONE));
        }
    }
}
