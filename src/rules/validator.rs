//! Wall placement legality.
//!
//! A placement must pass three checks, in order:
//!
//! 1. the anchor lies on the 8x8 lattice
//! 2. it does not overlap or cross a placed wall
//! 3. with the wall added, both players still reach their goal rows
//!
//! Step 3 runs on a by-value copy of the wall bitboards; the state itself
//! is never touched. It costs two BFS runs and dominates the cost of move
//! generation and search.

use crate::core::{GameState, PlayerId, PlayerMap, Wall, WallMask};

use super::error::WallPlacementError;
use super::pathfinder::{Bfs, PathOracle};

/// Path lengths both players would face after a legal placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementImpact {
    pub path_lengths: PlayerMap<u32>,
}

/// Bounds and conflict checks only (steps 1 and 2).
pub fn check_wall_geometry(mask: WallMask, wall: Wall) -> Result<(), WallPlacementError> {
    if !wall.is_in_bounds() {
        return Err(WallPlacementError::OutOfBounds(wall));
    }
    if let Some(existing) = mask.conflict(wall) {
        return Err(WallPlacementError::Conflict { wall, existing });
    }
    Ok(())
}

/// Full legality check, reporting the resulting path lengths on success.
pub fn check_wall_placement(state: &GameState, wall: Wall) -> Result<PlacementImpact, WallPlacementError> {
    check_wall_placement_with(state, wall, &mut Bfs)
}

/// [`check_wall_placement`] with a caller-supplied path oracle.
pub fn check_wall_placement_with<O: PathOracle>(
    state: &GameState,
    wall: Wall,
    oracle: &mut O,
) -> Result<PlacementImpact, WallPlacementError> {
    let mask = state.wall_mask();
    check_wall_geometry(mask, wall)?;

    let hypothetical = mask.with(wall);
    let mut path_lengths = PlayerMap::with_value(0);
    for player in PlayerId::all() {
        match oracle.path_length(hypothetical, state.position(player), player.goal_row()) {
            Some(length) => path_lengths[player] = length,
            None => return Err(WallPlacementError::BlocksPath { wall, player }),
        }
    }

    Ok(PlacementImpact { path_lengths })
}

#[must_use]
pub fn is_legal_wall_placement(state: &GameState, wall: Wall) -> bool {
    check_wall_placement(state, wall).is_ok()
}
