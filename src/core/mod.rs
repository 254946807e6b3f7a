//! Board and state model: cells, walls, players, moves, game state.
//!
//! Storage and cheap queries only. Legality lives in `rules`.

pub mod position;
pub mod wall;
pub mod player;
pub mod action;
pub mod state;
pub mod snapshot;
pub mod rng;

pub use position::{Direction, Position, BOARD_CELLS, BOARD_SIZE};
pub use wall::{Orientation, PlacedWall, Wall, WallMask, WallSet, LATTICE_SIZE};
pub use player::{PlayerId, PlayerMap, PlayerState, WALLS_PER_PLAYER};
pub use action::{Move, MoveRecord};
pub use state::{GameState, GameStatus};
pub use snapshot::{GameSnapshot, GameStateBuilder, SnapshotError};
pub use rng::{GameRng, GameRngState};
