//! Medium AI: path-aware steps and targeted walls.

use tracing::trace;

use crate::core::{GameState, Move, PlayerId, Position, Wall, LATTICE_SIZE};
use crate::eval::path_or_worst;
use crate::rules::{legal_pawn_moves, winning_pawn_move, MoveError, PathCache, PathOracle};
use crate::search::rank_walls;

use super::{ensure_can_move, Strategy};

/// Takes a winning step when one exists. Otherwise, unless clearly ahead
/// in the race, looks for the wall near the opponent that lengthens their
/// path the most and places it if it costs them at least one step. Falls
/// back to the step that shortens its own path the most.
#[derive(Clone, Debug, Default)]
pub struct MediumAi {
    cache: PathCache,
}

/// How far ahead (in path steps) the AI may be and still place walls.
const WALL_LEAD_TOLERANCE: i32 = 1;

impl MediumAi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Walls on the 4x4 block of anchors around `center`, horizontal first at
/// each anchor, rows then columns.
pub fn wall_neighborhood(center: Position) -> impl Iterator<Item = Wall> {
    let span = |c: u8| {
        (i16::from(c) - 2..=i16::from(c) + 1).filter(|&v| (0..i16::from(LATTICE_SIZE)).contains(&v))
    };
    span(center.row).flat_map(move |row| {
        span(center.col).flat_map(move |col| {
            let (row, col) = (row as u8, col as u8);
            [Wall::horizontal(row, col), Wall::vertical(row, col)]
        })
    })
}

impl Strategy for MediumAi {
    fn decide(&mut self, state: &GameState, player: PlayerId) -> Result<Move, MoveError> {
        ensure_can_move(state, player)?;

        if let Some(cell) = winning_pawn_move(state, player) {
            return Ok(Move::Pawn(cell));
        }

        self.cache.clear();
        let mask = state.wall_mask();
        let opponent = player.opponent();
        let mine = path_or_worst(self.cache.path_length(mask, state.position(player), player.goal_row()));
        let theirs = path_or_worst(self.cache.path_length(mask, state.position(opponent), opponent.goal_row()));

        if state.player(player).has_walls() && mine - theirs >= -WALL_LEAD_TOLERANCE {
            let candidates = wall_neighborhood(state.position(opponent));
            let ranked = rank_walls(state, player, candidates, &mut self.cache);
            if let Some(best) = ranked.first().filter(|r| r.gain > 0) {
                trace!(wall = %best.wall, gain = best.gain, "blocking wall");
                return Ok(Move::Wall(best.wall));
            }
        }

        let goal = player.goal_row();
        legal_pawn_moves(state, player)
            .into_iter()
            .min_by_key(|&target| path_or_worst(self.cache.path_length(mask, target, goal)))
            .map(Move::Pawn)
            .ok_or(MoveError::NoLegalMoves { player })
    }
}
