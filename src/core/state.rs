//! Game state: walls, pawns, turn and outcome.
//!
//! `GameState` is an explicit value passed into every rules and AI
//! operation; there is no global current game. Cloning is cheap because the
//! placed-wall order and the move history live in `im` persistent vectors,
//! so search can copy a state per node instead of mutating and reverting.
//!
//! The only ways to change a state are [`GameState::play`], which validates
//! first and mutates only on success, and [`GameState::undo`].

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::player::{PlayerId, PlayerMap, PlayerState};
use super::position::Position;
use super::wall::{PlacedWall, WallMask, WallSet};
use crate::rules::{self, MoveError};

/// Terminal status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(PlayerId),
}

impl GameStatus {
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    walls: WallSet,
    players: PlayerMap<PlayerState>,
    to_move: PlayerId,
    status: GameStatus,
    history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, pawns on their starting edges, ten walls each,
    /// Player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            walls: WallSet::new(),
            players: PlayerMap::new(PlayerState::initial),
            to_move: PlayerId::ONE,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    /// Assemble a state from already-validated parts.
    pub(crate) fn from_parts(walls: WallSet, players: PlayerMap<PlayerState>, to_move: PlayerId) -> Self {
        let status = PlayerId::all()
            .find(|&p| players[p].position.row == p.goal_row())
            .map_or(GameStatus::InProgress, GameStatus::Won);
        Self {
            walls,
            players,
            to_move,
            status,
            history: Vector::new(),
        }
    }

    /// Start over from the initial position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Queries ===

    #[must_use]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    #[must_use]
    pub fn wall_mask(&self) -> WallMask {
        self.walls.mask()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn position(&self, player: PlayerId) -> Position {
        self.players[player].position
    }

    #[must_use]
    pub fn walls_remaining(&self, player: PlayerId) -> u8 {
        self.players[player].walls_remaining
    }

    /// Whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The player standing on `pos`, if any.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<PlayerId> {
        PlayerId::all().find(|&p| self.players[p].position == pos)
    }

    /// Shortest orthogonal path length from `player`'s pawn to their goal row.
    #[must_use]
    pub fn path_length(&self, player: PlayerId) -> Option<u32> {
        rules::shortest_path_length(self.wall_mask(), self.position(player), player.goal_row())
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter()
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    // === Mutation ===

    /// Validate `mv` for the side to move and apply it.
    ///
    /// On error the state is untouched.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        rules::validate_move(self, mv)?;
        self.apply_unchecked(mv);
        Ok(())
    }

    /// Copy of this state with an already-legal move applied.
    #[must_use]
    pub(crate) fn after(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply_unchecked(mv);
        next
    }

    /// Apply a move known to be legal for the side to move.
    pub(crate) fn apply_unchecked(&mut self, mv: Move) {
        let mover = self.to_move;
        let record = MoveRecord::new(mover, mv, self.position(mover), self.ply());

        match mv {
            Move::Pawn(target) => {
                self.players[mover].position = target;
                if target.row == mover.goal_row() {
                    self.status = GameStatus::Won(mover);
                }
            }
            Move::Wall(wall) => {
                self.walls.push(PlacedWall::new(wall, mover));
                let remaining = &mut self.players[mover].walls_remaining;
                *remaining = remaining.saturating_sub(1);
            }
        }

        self.history.push_back(record);
        if !self.is_over() {
            self.to_move = mover.opponent();
        }
    }

    /// Revert the most recent move. Returns the undone record.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop_back()?;

        match record.mv {
            Move::Pawn(_) => {
                self.players[record.player].position = record.from;
            }
            Move::Wall(_) => {
                self.walls.pop();
                self.players[record.player].walls_remaining += 1;
            }
        }

        self.status = GameStatus::InProgress;
        self.to_move = record.player;
        Some(record)
    }
}
