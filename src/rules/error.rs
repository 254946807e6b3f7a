//! Rejection reasons for moves and wall placements.
//!
//! Every rejection happens before any mutation, so an error never leaves a
//! half-applied state behind.

use crate::core::{PlayerId, Position, Wall};

/// Why a wall cannot go where it was asked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum WallPlacementError {
    /// Anchor outside the 8x8 lattice.
    #[display("wall {} lies outside the anchor lattice", _0)]
    OutOfBounds(Wall),

    /// Overlaps or crosses a wall already on the board.
    #[display("wall {wall} conflicts with {existing}")]
    Conflict { wall: Wall, existing: Wall },

    /// Would leave a player with no route to their goal row.
    #[display("wall {wall} would cut {player} off from their goal row")]
    BlocksPath { wall: Wall, player: PlayerId },
}

impl std::error::Error for WallPlacementError {}

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner.
    #[display("the game is already over")]
    GameOver,

    /// Someone other than the side to move tried to act.
    #[display("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    /// Target is not a legal step, jump or diagonal from the pawn's cell.
    #[display("pawn cannot move from {from} to {to}")]
    IllegalPawnMove { from: Position, to: Position },

    #[display("{player} has no walls left")]
    NoWallsRemaining { player: PlayerId },

    #[display("{}", _0)]
    InvalidWall(WallPlacementError),

    /// The mover has nothing to do; only possible if the connectivity
    /// invariant was broken upstream.
    #[display("{player} has no legal moves")]
    NoLegalMoves { player: PlayerId },
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidWall(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WallPlacementError> for MoveError {
    fn from(err: WallPlacementError) -> Self {
        MoveError::InvalidWall(err)
    }
}
