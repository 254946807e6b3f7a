//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Player 1 starts on the
//! bottom edge and races to row 0; Player 2 starts on the top edge and
//! races to row 8.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::{Position, BOARD_SIZE};

/// Walls each player receives at the start of a game.
pub const WALLS_PER_PLAYER: u8 = 10;

/// Identifier for one of the two players.
///
/// Indices are 0-based: Player 1 is `PlayerId::ONE` with index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Moves first, starts at (8, 4), goal row 0.
    pub const ONE: PlayerId = PlayerId(0);
    /// Starts at (0, 4), goal row 8.
    pub const TWO: PlayerId = PlayerId(1);

    /// Player for a 0-based index, if it names one of the two seats.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ONE),
            1 => Some(Self::TWO),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Row this player must reach.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self.0 {
            0 => 0,
            _ => BOARD_SIZE - 1,
        }
    }

    /// Starting cell on an empty board.
    #[must_use]
    pub const fn start_position(self) -> Position {
        match self.0 {
            0 => Position::new(BOARD_SIZE - 1, BOARD_SIZE / 2),
            _ => Position::new(0, BOARD_SIZE / 2),
        }
    }

    /// Rows advanced from the starting edge toward the goal row.
    #[must_use]
    pub fn progress(self, pos: Position) -> u8 {
        (BOARD_SIZE - 1) - pos.row.abs_diff(self.goal_row())
    }

    /// Both players, in seat order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{PlayerId, PlayerMap};
///
/// let mut walls: PlayerMap<u8> = PlayerMap::with_value(10);
/// walls[PlayerId::TWO] -= 1;
///
/// assert_eq!(walls[PlayerId::ONE], 10);
/// assert_eq!(walls[PlayerId::TWO], 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(p, self.get(p)))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Mutable per-player game data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    pub walls_remaining: u8,
}

impl PlayerState {
    /// Player at their starting cell with a full wall supply.
    #[must_use]
    pub const fn initial(player: PlayerId) -> Self {
        Self {
            position: player.start_position(),
            walls_remaining: WALLS_PER_PLAYER,
        }
    }

    #[must_use]
    pub const fn has_walls(&self) -> bool {
        self.walls_remaining > 0
    }
}
