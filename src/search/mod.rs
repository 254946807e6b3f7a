//! Game-tree search for the strongest AI.
//!
//! ## Overview
//!
//! A depth-limited minimax over [`GameState`](crate::core::GameState) copies
//! with alpha-beta pruning. Branching is kept small by move ordering: every
//! pawn move is searched, but only the top few walls by measured effect on
//! the opponent's path.
//!
//! ## Usage
//!
//! ```rust
//! use quoridor_engine::core::{GameState, PlayerId};
//! use quoridor_engine::search::{SearchConfig, SearchEngine};
//!
//! let state = GameState::new();
//! let mut engine = SearchEngine::new(SearchConfig::default().with_max_depth(1));
//! let result = engine.search(&state, PlayerId::ONE).unwrap();
//! println!("{} scored {}", result.best_move, result.score);
//! ```

pub mod alphabeta;
pub mod config;
pub mod ordering;
pub mod stats;

pub use alphabeta::{SearchEngine, SearchResult};
pub use config::SearchConfig;
pub use ordering::{ordered_moves, rank_walls, RankedWall};
pub use stats::SearchStats;
