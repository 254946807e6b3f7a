//! Move representation.
//!
//! A move is exactly one of two things: step the pawn to a target cell, or
//! place a wall. Jumps and diagonal side-steps are ordinary pawn moves
//! whose target happens to be two cells away; legality is decided by the
//! rules module, not encoded in the move itself.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;
use super::wall::Wall;

/// One turn's action.
///
/// ```
/// use quoridor_engine::core::{Move, Position, Wall};
///
/// let step = Move::Pawn(Position::new(7, 4));
/// let block = Move::Wall(Wall::horizontal(1, 3));
///
/// assert!(step.is_pawn());
/// assert_eq!(block.wall(), Some(Wall::horizontal(1, 3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the pawn to this cell.
    Pawn(Position),
    /// Place this wall.
    Wall(Wall),
}

impl Move {
    #[must_use]
    pub const fn is_pawn(&self) -> bool {
        matches!(self, Move::Pawn(_))
    }

    #[must_use]
    pub const fn is_wall(&self) -> bool {
        matches!(self, Move::Wall(_))
    }

    #[must_use]
    pub const fn target(&self) -> Option<Position> {
        match self {
            Move::Pawn(pos) => Some(*pos),
            Move::Wall(_) => None,
        }
    }

    #[must_use]
    pub const fn wall(&self) -> Option<Wall> {
        match self {
            Move::Wall(wall) => Some(*wall),
            Move::Pawn(_) => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pawn(pos) => write!(f, "pawn -> {}", pos),
            Move::Wall(wall) => write!(f, "wall {}", wall),
        }
    }
}

/// A move as it was applied, with enough context to undo it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move applied.
    pub mv: Move,

    /// The mover's pawn cell before the move.
    pub from: Position,

    /// 0-based ply number of this move within the game.
    pub ply: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, from: Position, ply: u32) -> Self {
        Self { player, mv, from, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accessors() {
        let pawn = Move::Pawn(Position::new(3, 3));
        assert!(pawn.is_pawn());
        assert!(!pawn.is_wall());
        assert_eq!(pawn.target(), Some(Position::new(3, 3)));
        assert_eq!(pawn.wall(), None);

        let wall = Move::Wall(Wall::vertical(2, 2));
        assert!(wall.is_wall());
        assert_eq!(wall.target(), None);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Pawn(Position::new(7, 4)).to_string(), "pawn -> (7, 4)");
        assert_eq!(Move::Wall(Wall::horizontal(0, 1)).to_string(), "wall H(0, 1)");
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(
            PlayerId::TWO,
            Move::Wall(Wall::horizontal(6, 1)),
            Position::new(0, 4),
            3,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
