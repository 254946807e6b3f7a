//! Move ordering and wall candidate selection.
//!
//! Pawn moves always come first, sorted by the mover's remaining path
//! length after the step. Walls follow, ranked by how much they lengthen
//! the opponent's path and then by closeness to the opponent's pawn, and
//! only the best few are kept.

use std::cmp::Reverse;

use crate::core::{GameState, Move, PlayerId, Wall, LATTICE_SIZE};
use crate::eval::path_or_worst;
use crate::rules::{check_wall_placement_with, legal_pawn_moves, PathOracle};

use super::stats::SearchStats;

/// Anchor/orientation combinations on the lattice.
const WALL_SLOTS: u64 = 2 * (LATTICE_SIZE as u64) * (LATTICE_SIZE as u64);

/// A legal wall with its effect on the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedWall {
    pub wall: Wall,
    /// Steps added to the opponent's shortest path.
    pub gain: i32,
    /// Cell distance from the wall to the opponent's pawn.
    pub distance: u32,
}

/// Rank the legal walls among `candidates` for `player` to place.
///
/// Illegal candidates are dropped. Order: largest gain, then nearest to the
/// opponent, then candidate order.
pub fn rank_walls<O, I>(state: &GameState, player: PlayerId, candidates: I, oracle: &mut O) -> Vec<RankedWall>
where
    O: PathOracle,
    I: IntoIterator<Item = Wall>,
{
    let opponent = player.opponent();
    let opp_pos = state.position(opponent);
    let before = path_or_worst(oracle.path_length(state.wall_mask(), opp_pos, opponent.goal_row()));

    let mut ranked: Vec<RankedWall> = candidates
        .into_iter()
        .filter_map(|wall| {
            let impact = check_wall_placement_with(state, wall, oracle).ok()?;
            Some(RankedWall {
                wall,
                gain: impact.path_lengths[opponent] as i32 - before,
                distance: wall.distance_to(opp_pos),
            })
        })
        .collect();

    ranked.sort_by_key(|r| (Reverse(r.gain), r.distance));
    ranked
}

/// Moves for `player` in search order, walls capped at `wall_limit`.
pub fn ordered_moves<O: PathOracle>(
    state: &GameState,
    player: PlayerId,
    wall_limit: usize,
    oracle: &mut O,
    stats: &mut SearchStats,
) -> Vec<Move> {
    let mask = state.wall_mask();
    let goal = player.goal_row();

    let mut pawns: Vec<_> = legal_pawn_moves(state, player)
        .into_iter()
        .map(|target| (path_or_worst(oracle.path_length(mask, target, goal)), target))
        .collect();
    pawns.sort_by_key(|&(length, _)| length);

    let mut moves: Vec<Move> = pawns.into_iter().map(|(_, target)| Move::Pawn(target)).collect();

    if wall_limit > 0 && state.player(player).has_walls() {
        stats.wall_checks += WALL_SLOTS;
        let walls = rank_walls(state, player, Wall::all(), oracle);
        moves.extend(walls.into_iter().take(wall_limit).map(|r| Move::Wall(r.wall)));
    }

    moves
}
