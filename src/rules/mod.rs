//! Movement and wall rules.
//!
//! Everything here is a pure function of a [`GameState`](crate::core::GameState):
//! - `pathfinder`: BFS distance to a goal row, plain or memoized
//! - `validator`: wall bounds, conflicts and connectivity
//! - `movegen`: pawn targets (steps, jumps, diagonals) and wall candidates
//! - `engine`: validate/apply/describe for a turn controller
//!
//! No function in this module mutates a state it was handed.

pub mod error;
pub mod pathfinder;
pub mod validator;
pub mod movegen;
pub mod engine;

pub use error::{MoveError, WallPlacementError};
pub use pathfinder::{has_path, shortest_path_length, Bfs, PathCache, PathOracle};
pub use validator::{
    check_wall_geometry, check_wall_placement, check_wall_placement_with, is_legal_wall_placement,
    PlacementImpact,
};
pub use movegen::{
    legal_moves, legal_pawn_moves, legal_wall_placements, wall_placements_with, winning_pawn_move,
    PawnTargets,
};
pub use engine::{apply_move, describe_legal_moves, is_terminal, validate_move, LegalMoves};
