//! Lossless snapshots of a game and a builder for arbitrary positions.
//!
//! A [`GameSnapshot`] captures everything needed to resume play or search:
//! the walls in placement order with their owners, both pawns and wall
//! supplies, and the side to move. Restoring re-checks every board
//! invariant, so a snapshot from disk or the network can never produce a
//! state the rules engine could not have reached.
//!
//! Move history is not part of a snapshot; a restored state starts with an
//! empty history.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap, PlayerState, WALLS_PER_PLAYER};
use super::position::Position;
use super::state::GameState;
use super::wall::{PlacedWall, Wall, WallSet};
use crate::rules::{self, WallPlacementError};

/// Reason a snapshot does not describe a legal game state.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    #[display("{player} stands off the board at {position}")]
    PositionOffBoard { player: PlayerId, position: Position },

    #[display("both pawns occupy {}", _0)]
    SharedCell(Position),

    #[display("wall #{index} is illegal: {error}")]
    InvalidWall { index: usize, error: WallPlacementError },

    #[display("{player} has more walls placed and in hand than a player owns")]
    TooManyWalls { player: PlayerId },

    #[display("{player} has no path to their goal row")]
    Unreachable { player: PlayerId },

    #[display("both players stand on their goal rows")]
    MultipleWinners,

    #[display("snapshot encoding failed: {}", _0)]
    Encoding(String),
}

impl std::error::Error for SnapshotError {}

/// Serializable picture of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Placed walls, oldest first.
    pub walls: Vec<PlacedWall>,

    /// Pawn cell and wall supply per player.
    pub players: PlayerMap<PlayerState>,

    /// Side to move.
    pub to_move: PlayerId,
}

impl GameSnapshot {
    /// Rebuild a game state, checking every invariant.
    pub fn restore(&self) -> Result<GameState, SnapshotError> {
        for (player, state) in self.players.iter() {
            if !state.position.is_on_board() {
                return Err(SnapshotError::PositionOffBoard {
                    player,
                    position: state.position,
                });
            }
        }

        let one = self.players[PlayerId::ONE].position;
        if one == self.players[PlayerId::TWO].position {
            return Err(SnapshotError::SharedCell(one));
        }

        if PlayerId::all().all(|p| self.players[p].position.row == p.goal_row()) {
            return Err(SnapshotError::MultipleWinners);
        }

        let mut walls = WallSet::new();
        for (index, placed) in self.walls.iter().enumerate() {
            rules::check_wall_geometry(walls.mask(), placed.wall)
                .map_err(|error| SnapshotError::InvalidWall { index, error })?;
            walls.push(*placed);
        }

        for (player, state) in self.players.iter() {
            let total = walls.placed_by(player) + usize::from(state.walls_remaining);
            if total > usize::from(WALLS_PER_PLAYER) {
                return Err(SnapshotError::TooManyWalls { player });
            }
            if rules::shortest_path_length(walls.mask(), state.position, player.goal_row()).is_none() {
                return Err(SnapshotError::Unreachable { player });
            }
        }

        Ok(GameState::from_parts(walls, self.players, self.to_move))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encoding(e.to_string()))
    }

    /// Decode with bincode. The result still needs [`GameSnapshot::restore`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Encoding(e.to_string()))
    }
}

impl GameState {
    /// Capture this state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            walls: self.walls().iter().copied().collect(),
            players: *self.players(),
            to_move: self.to_move(),
        }
    }

    /// Rebuild a state from a snapshot, checking every invariant.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        snapshot.restore()
    }

    /// Start a builder for a custom position.
    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::new()
    }
}

/// Builder for setting up arbitrary positions.
///
/// Wall supplies default to ten minus the walls each player placed.
///
/// ```
/// use quoridor_engine::core::{GameState, PlayerId, Position, Wall};
///
/// let state = GameState::builder()
///     .position(PlayerId::ONE, Position::new(1, 4))
///     .wall(PlayerId::TWO, Wall::horizontal(0, 4))
///     .to_move(PlayerId::ONE)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.walls_remaining(PlayerId::TWO), 9);
/// ```
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    positions: PlayerMap<Position>,
    walls: Vec<PlacedWall>,
    walls_remaining: PlayerMap<Option<u8>>,
    to_move: PlayerId,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self {
            positions: PlayerMap::new(PlayerId::start_position),
            walls: Vec::new(),
            walls_remaining: PlayerMap::with_value(None),
            to_move: PlayerId::ONE,
        }
    }
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, player: PlayerId, position: Position) -> Self {
        self.positions[player] = position;
        self
    }

    /// Add a wall placed by `owner`, after any walls already added.
    pub fn wall(mut self, owner: PlayerId, wall: Wall) -> Self {
        self.walls.push(PlacedWall::new(wall, owner));
        self
    }

    /// Override the wall supply instead of deriving it from placed walls.
    pub fn walls_remaining(mut self, player: PlayerId, count: u8) -> Self {
        self.walls_remaining[player] = Some(count);
        self
    }

    pub fn to_move(mut self, player: PlayerId) -> Self {
        self.to_move = player;
        self
    }

    /// The snapshot this builder describes.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let players = PlayerMap::new(|player| {
            let placed = self.walls.iter().filter(|w| w.owner == player).count();
            let derived = usize::from(WALLS_PER_PLAYER).saturating_sub(placed) as u8;
            PlayerState {
                position: self.positions[player],
                walls_remaining: self.walls_remaining[player].unwrap_or(derived),
            }
        });
        GameSnapshot {
            walls: self.walls.clone(),
            players,
            to_move: self.to_move,
        }
    }

    pub fn build(self) -> Result<GameState, SnapshotError> {
        self.snapshot().restore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, Move};

    #[test]
    fn test_snapshot_roundtrip() {
        let mut state = GameState::new();
        state.play(Move::Wall(Wall::horizontal(2, 2))).unwrap();
        state.play(Move::Pawn(Position::new(1, 4))).unwrap();
        state.play(Move::Wall(Wall::vertical(6, 6))).unwrap();

        let restored = GameState::from_snapshot(&state.snapshot()).unwrap();

        assert_eq!(restored.snapshot(), state.snapshot());
        assert_eq!(restored.wall_mask(), state.wall_mask());
        assert_eq!(restored.to_move(), PlayerId::TWO);
        assert_eq!(restored.ply(), 0);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let state = GameState::builder()
            .wall(PlayerId::ONE, Wall::horizontal(4, 4))
            .wall(PlayerId::TWO, Wall::vertical(1, 1))
            .to_move(PlayerId::ONE)
            .build()
            .unwrap();

        let bytes = state.snapshot().to_bytes().unwrap();
        let decoded = GameSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, state.snapshot());
        assert_eq!(decoded.walls[1].owner, PlayerId::TWO);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            GameSnapshot::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Encoding(_))
        ));
    }

    #[test]
    fn test_builder_derives_wall_supply() {
        let state = GameState::builder()
            .wall(PlayerId::ONE, Wall::horizontal(0, 0))
            .wall(PlayerId::ONE, Wall::horizontal(0, 2))
            .build()
            .unwrap();

        assert_eq!(state.walls_remaining(PlayerId::ONE), 8);
        assert_eq!(state.walls_remaining(PlayerId::TWO), 10);
    }

    #[test]
    fn test_rejects_shared_cell() {
        let result = GameState::builder()
            .position(PlayerId::ONE, Position::new(4, 4))
            .position(PlayerId::TWO, Position::new(4, 4))
            .build();
        assert_eq!(result, Err(SnapshotError::SharedCell(Position::new(4, 4))));
    }

    #[test]
    fn test_rejects_off_board() {
        let result = GameState::builder()
            .position(PlayerId::TWO, Position::new(9, 0))
            .build();
        assert!(matches!(result, Err(SnapshotError::PositionOffBoard { .. })));
    }

    #[test]
    fn test_rejects_conflicting_walls() {
        let result = GameState::builder()
            .wall(PlayerId::ONE, Wall::horizontal(3, 3))
            .wall(PlayerId::TWO, Wall::vertical(3, 3))
            .build();
        assert!(matches!(
            result,
            Err(SnapshotError::InvalidWall { index: 1, error: WallPlacementError::Conflict { .. } })
        ));
    }

    #[test]
    fn test_rejects_too_many_walls() {
        let result = GameState::builder()
            .wall(PlayerId::ONE, Wall::horizontal(3, 3))
            .walls_remaining(PlayerId::ONE, 10)
            .build();
        assert_eq!(result, Err(SnapshotError::TooManyWalls { player: PlayerId::ONE }));
    }

    #[test]
    fn test_rejects_crossing_walls() {
        let result = GameState::builder()
            .wall(PlayerId::ONE, Wall::horizontal(0, 0))
            .wall(PlayerId::ONE, Wall::vertical(0, 0))
            .build();
        assert!(matches!(result, Err(SnapshotError::InvalidWall { index: 1, .. })));
    }

    #[test]
    fn test_rejects_sealed_player() {
        // Two walls close off (0, 0) and (0, 1) from the rest of the board.
        let result = GameState::builder()
            .position(PlayerId::TWO, Position::new(0, 0))
            .wall(PlayerId::ONE, Wall::horizontal(0, 0))
            .wall(PlayerId::ONE, Wall::vertical(0, 1))
            .build();
        assert_eq!(result, Err(SnapshotError::Unreachable { player: PlayerId::TWO }));

        let result = GameState::builder()
            .position(PlayerId::TWO, Position::new(0, 0))
            .wall(PlayerId::ONE, Wall::horizontal(0, 0))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_status_derived_on_restore() {
        let state = GameState::builder()
            .position(PlayerId::ONE, Position::new(0, 3))
            .build()
            .unwrap();
        assert_eq!(state.status(), GameStatus::Won(PlayerId::ONE));
    }
}
