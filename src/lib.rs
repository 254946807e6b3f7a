//! # quoridor-engine
//!
//! Rules and AI for two-player Quoridor on the standard 9x9 board.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Every operation takes a `GameState` value. There
//!    is no global current game.
//!
//! 2. **Validate, Then Mutate**: A rejected move never touches the state;
//!    speculative wall checks run on by-value copies of the wall bitboards.
//!
//! 3. **One Source of Truth for Blocking**: Legality and heuristics all
//!    reduce to a single BFS shortest-path query.
//!
//! ## Architecture
//!
//! - **Bitboard Walls**: Placed walls are two 64-bit anchor masks, so a
//!   hypothetical placement is a copy plus one bit.
//!
//! - **Persistent Data Structures**: Wall order and move history use
//!   `im-rs`, so search clones states per node cheaply.
//!
//! - **Bounded Search**: Depth-3 alpha-beta with every pawn move but only
//!   the ten most disruptive walls per node.
//!
//! ## Modules
//!
//! - `core`: Positions, walls, players, moves, state, snapshots, RNG
//! - `rules`: Pathfinding, wall validation, move generation, turn entry points
//! - `eval`: Static position evaluation
//! - `search`: Alpha-beta search with move ordering
//! - `ai`: Easy, Medium and Hard opponents
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::{request_ai_move, Difficulty, GameState, Move, PlayerId, Position};
//!
//! let mut state = GameState::new();
//! state.play(Move::Pawn(Position::new(7, 4))).unwrap();
//!
//! let reply = request_ai_move(&state, PlayerId::TWO, Difficulty::Medium).unwrap();
//! state.play(reply).unwrap();
//! assert_eq!(state.to_move(), PlayerId::ONE);
//! ```

pub mod core;
pub mod rules;
pub mod eval;
pub mod search;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Direction, Position, BOARD_SIZE,
    Orientation, Wall, WallMask, WallSet, PlacedWall,
    PlayerId, PlayerMap, PlayerState, WALLS_PER_PLAYER,
    Move, MoveRecord,
    GameState, GameStatus, GameStateBuilder, GameSnapshot, SnapshotError,
    GameRng,
};

pub use crate::rules::{
    apply_move, describe_legal_moves, is_terminal, validate_move,
    shortest_path_length, is_legal_wall_placement,
    legal_moves, legal_pawn_moves, legal_wall_placements,
    LegalMoves, MoveError, WallPlacementError,
};

pub use crate::eval::{evaluate, EvalWeights};

pub use crate::search::{SearchConfig, SearchEngine, SearchResult, SearchStats};

pub use crate::ai::{request_ai_move, AiConfig, AiPlayer, Difficulty, Strategy};
