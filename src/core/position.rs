//! Board cells and orthogonal directions.
//!
//! The board is a fixed 9x9 grid. Row 0 is the top edge (Player 1's goal),
//! row 8 the bottom edge (Player 2's goal).

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 9;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A cell on the 9x9 board.
///
/// Positions are plain coordinates; a `Position` built from untrusted input
/// may lie off the board, which `is_on_board` reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check that the cell lies within the 9x9 grid.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Dense index in `0..81`, row-major.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE as usize) as u8,
            col: (index % BOARD_SIZE as usize) as u8,
        }
    }

    /// The neighboring cell in `direction`, or `None` past the board edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// True when the two cells differ by one unit in exactly one axis.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }

    #[must_use]
    pub fn manhattan(self, other: Self) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }

    /// Iterate over every cell of the board, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_CELLS).map(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Generation order used everywhere moves are enumerated.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row, col) offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The two directions at right angles to this one.
    #[must_use]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for pos in Position::all() {
            assert_eq!(Position::from_index(pos.index()), pos);
        }
        assert_eq!(Position::all().count(), BOARD_CELLS);
    }

    #[test]
    fn test_step_stops_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(corner.step(Direction::Right), Some(Position::new(0, 1)));

        let far = Position::new(8, 8);
        assert_eq!(far.step(Direction::Down), None);
        assert_eq!(far.step(Direction::Right), None);
    }

    #[test]
    fn test_adjacency() {
        let center = Position::new(4, 4);
        assert!(center.is_adjacent(Position::new(3, 4)));
        assert!(center.is_adjacent(Position::new(4, 5)));
        assert!(!center.is_adjacent(Position::new(3, 3)));
        assert!(!center.is_adjacent(Position::new(4, 6)));
        assert!(!center.is_adjacent(center));
    }

    #[test]
    fn test_on_board() {
        assert!(Position::new(8, 8).is_on_board());
        assert!(!Position::new(9, 0).is_on_board());
        assert!(!Position::new(0, 9).is_on_board());
    }

    #[test]
    fn test_perpendicular() {
        assert_eq!(Direction::Up.perpendicular(), [Direction::Left, Direction::Right]);
        assert_eq!(Direction::Right.perpendicular(), [Direction::Up, Direction::Down]);
    }
}
