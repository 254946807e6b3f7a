//! Legal move enumeration.
//!
//! Pawn targets come out in a fixed order: up, down, left, right, with a
//! jump or diagonal pair substituted in place when the neighbor in that
//! direction is the opponent. Strategies that break ties "by generation
//! order" rely on this.

use smallvec::SmallVec;

use crate::core::{Direction, GameState, Move, PlayerId, Position, Wall};

use super::pathfinder::PathOracle;
use super::validator::{check_wall_placement_with, is_legal_wall_placement, PlacementImpact};

/// At most four steps, or three steps plus a diagonal pair.
pub type PawnTargets = SmallVec<[Position; 5]>;

/// Cells `player`'s pawn may move to.
#[must_use]
pub fn legal_pawn_moves(state: &GameState, player: PlayerId) -> PawnTargets {
    let mask = state.wall_mask();
    let from = state.position(player);
    let opponent = state.position(player.opponent());
    let mut targets = PawnTargets::new();

    for direction in Direction::ALL {
        if mask.blocks_step(from, direction) {
            continue;
        }
        let Some(next) = from.step(direction) else {
            continue;
        };

        if next != opponent {
            targets.push(next);
            continue;
        }

        // Straight jump if nothing stops it; otherwise sidestep around the opponent.
        let beyond = opponent.step(direction).filter(|_| !mask.blocks_step(opponent, direction));
        match beyond {
            Some(landing) => targets.push(landing),
            None => {
                for side in direction.perpendicular() {
                    if mask.blocks_step(opponent, side) {
                        continue;
                    }
                    if let Some(diagonal) = opponent.step(side) {
                        targets.push(diagonal);
                    }
                }
            }
        }
    }

    targets
}

/// A pawn target on `player`'s goal row, if one is reachable this turn.
#[must_use]
pub fn winning_pawn_move(state: &GameState, player: PlayerId) -> Option<Position> {
    let goal = player.goal_row();
    legal_pawn_moves(state, player).into_iter().find(|p| p.row == goal)
}

/// Every wall `player` may legally place, in lattice order.
///
/// Empty when the player has no walls left.
#[must_use]
pub fn legal_wall_placements(state: &GameState, player: PlayerId) -> Vec<Wall> {
    if !state.player(player).has_walls() {
        return Vec::new();
    }
    Wall::all().filter(|&wall| is_legal_wall_placement(state, wall)).collect()
}

/// Legal walls for `player` with the path lengths each would leave behind.
#[must_use]
pub fn wall_placements_with<O: PathOracle>(
    state: &GameState,
    player: PlayerId,
    oracle: &mut O,
) -> Vec<(Wall, PlacementImpact)> {
    if !state.player(player).has_walls() {
        return Vec::new();
    }
    Wall::all()
        .filter_map(|wall| {
            check_wall_placement_with(state, wall, oracle)
                .ok()
                .map(|impact| (wall, impact))
        })
        .collect()
}

/// All legal moves for `player`: pawn moves first, then walls.
#[must_use]
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Move> {
    let mut moves: Vec<Move> = legal_pawn_moves(state, player).into_iter().map(Move::Pawn).collect();
    moves.extend(legal_wall_placements(state, player).into_iter().map(Move::Wall));
    moves
}
