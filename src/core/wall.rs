//! Wall segments, their geometry, and the placed-wall set.
//!
//! ## Anchors
//!
//! Walls are anchored on the 8x8 lattice of intersections between cells.
//! Anchor `(r, c)` is the point shared by cells `(r, c)`, `(r, c + 1)`,
//! `(r + 1, c)` and `(r + 1, c + 1)`. A wall is two cell-edges long and is
//! centered on its anchor:
//!
//! - horizontal at `(r, c)` blocks `(r, c) <-> (r + 1, c)` and
//!   `(r, c + 1) <-> (r + 1, c + 1)`
//! - vertical at `(r, c)` blocks `(r, c) <-> (r, c + 1)` and
//!   `(r + 1, c) <-> (r + 1, c + 1)`
//!
//! ## WallMask
//!
//! Two 64-bit anchor bitboards, one per orientation. Edge queries and
//! conflict checks are a handful of bit tests, and a hypothetical placement
//! is just a copy with one more bit set.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::{Direction, Position};

/// Number of anchor rows and columns.
pub const LATTICE_SIZE: u8 = 8;

/// Wall orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// A two-cell wall segment at a lattice anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    pub row: u8,
    pub col: u8,
    pub orientation: Orientation,
}

impl Wall {
    #[must_use]
    pub const fn new(row: u8, col: u8, orientation: Orientation) -> Self {
        Self { row, col, orientation }
    }

    #[must_use]
    pub const fn horizontal(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    #[must_use]
    pub const fn vertical(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    /// Check that the anchor lies within the 8x8 lattice.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row < LATTICE_SIZE && self.col < LATTICE_SIZE
    }

    /// Every anchor and orientation on the lattice, horizontal first at each anchor.
    pub fn all() -> impl Iterator<Item = Wall> {
        (0..LATTICE_SIZE).flat_map(|row| {
            (0..LATTICE_SIZE).flat_map(move |col| {
                Orientation::ALL
                    .into_iter()
                    .map(move |orientation| Wall::new(row, col, orientation))
            })
        })
    }

    /// Geometric conflict: the two walls would share an edge or cross.
    ///
    /// Symmetric by construction.
    #[must_use]
    pub fn conflicts_with(self, other: Wall) -> bool {
        if self.row == other.row && self.col == other.col {
            return true;
        }
        match (self.orientation, other.orientation) {
            (Orientation::Horizontal, Orientation::Horizontal) => {
                self.row == other.row && self.col.abs_diff(other.col) == 1
            }
            (Orientation::Vertical, Orientation::Vertical) => {
                self.col == other.col && self.row.abs_diff(other.row) == 1
            }
            _ => false,
        }
    }

    /// Whether this wall cuts the edge between two adjacent cells.
    #[must_use]
    pub fn blocks(self, from: Position, to: Position) -> bool {
        if !from.is_adjacent(to) {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => {
                from.col == to.col
                    && from.row.min(to.row) == self.row
                    && (from.col == self.col || from.col == self.col + 1)
            }
            Orientation::Vertical => {
                from.row == to.row
                    && from.col.min(to.col) == self.col
                    && (from.row == self.row || from.row == self.row + 1)
            }
        }
    }

    /// Lattice distance from the four cells around the anchor to `pos`.
    #[must_use]
    pub fn distance_to(self, pos: Position) -> u32 {
        let gap = |anchor: u8, cell: u8| -> u32 {
            if cell < anchor {
                u32::from(anchor - cell)
            } else if cell > anchor + 1 {
                u32::from(cell - anchor - 1)
            } else {
                0
            }
        };
        gap(self.row, pos.row) + gap(self.col, pos.col)
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}({}, {})", tag, self.row, self.col)
    }
}

/// A wall together with the player who placed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedWall {
    pub wall: Wall,
    pub owner: PlayerId,
}

impl PlacedWall {
    #[must_use]
    pub const fn new(wall: Wall, owner: PlayerId) -> Self {
        Self { wall, owner }
    }
}

/// Anchor occupancy bitboards, one bit per lattice anchor and orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallMask {
    horizontal: u64,
    vertical: u64,
}

#[inline]
fn anchor_bit(row: u8, col: u8) -> u64 {
    if row < LATTICE_SIZE && col < LATTICE_SIZE {
        1u64 << (row as u32 * LATTICE_SIZE as u32 + col as u32)
    } else {
        0
    }
}

impl WallMask {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            horizontal: 0,
            vertical: 0,
        }
    }

    /// Raw bitboards, used as a cache key.
    #[must_use]
    pub const fn bits(&self) -> (u64, u64) {
        (self.horizontal, self.vertical)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.horizontal == 0 && self.vertical == 0
    }

    #[must_use]
    pub fn contains(&self, wall: Wall) -> bool {
        let bit = anchor_bit(wall.row, wall.col);
        match wall.orientation {
            Orientation::Horizontal => self.horizontal & bit != 0,
            Orientation::Vertical => self.vertical & bit != 0,
        }
    }

    /// The already-present wall that `wall` would conflict with, if any.
    #[must_use]
    pub fn conflict(&self, wall: Wall) -> Option<Wall> {
        let Wall { row, col, orientation } = wall;
        let mut candidates = [None; 4];
        candidates[0] = Some(Wall::horizontal(row, col));
        candidates[1] = Some(Wall::vertical(row, col));
        match orientation {
            Orientation::Horizontal => {
                candidates[2] = col.checked_sub(1).map(|c| Wall::horizontal(row, c));
                candidates[3] = col.checked_add(1).map(|c| Wall::horizontal(row, c));
            }
            Orientation::Vertical => {
                candidates[2] = row.checked_sub(1).map(|r| Wall::vertical(r, col));
                candidates[3] = row.checked_add(1).map(|r| Wall::vertical(r, col));
            }
        }
        candidates.into_iter().flatten().find(|&w| self.contains(w))
    }

    /// Copy of this mask with `wall` added.
    #[must_use]
    pub fn with(mut self, wall: Wall) -> Self {
        self.insert(wall);
        self
    }

    pub fn insert(&mut self, wall: Wall) {
        let bit = anchor_bit(wall.row, wall.col);
        match wall.orientation {
            Orientation::Horizontal => self.horizontal |= bit,
            Orientation::Vertical => self.vertical |= bit,
        }
    }

    pub fn remove(&mut self, wall: Wall) {
        let bit = anchor_bit(wall.row, wall.col);
        match wall.orientation {
            Orientation::Horizontal => self.horizontal &= !bit,
            Orientation::Vertical => self.vertical &= !bit,
        }
    }

    /// Whether the edge leaving `from` in `direction` is cut by a wall.
    ///
    /// Steps off the board report `false`; callers bound-check separately.
    #[must_use]
    pub fn blocks_step(&self, from: Position, direction: Direction) -> bool {
        let Position { row, col } = from;
        match direction {
            Direction::Down => self.cuts_column_edge(row, col),
            Direction::Up => row > 0 && self.cuts_column_edge(row - 1, col),
            Direction::Right => self.cuts_row_edge(row, col),
            Direction::Left => col > 0 && self.cuts_row_edge(row, col - 1),
        }
    }

    /// Edge between `(top, col)` and `(top + 1, col)`.
    fn cuts_column_edge(&self, top: u8, col: u8) -> bool {
        let mut bits = anchor_bit(top, col);
        if col > 0 {
            bits |= anchor_bit(top, col - 1);
        }
        self.horizontal & bits != 0
    }

    /// Edge between `(row, left)` and `(row, left + 1)`.
    fn cuts_row_edge(&self, row: u8, left: u8) -> bool {
        let mut bits = anchor_bit(row, left);
        if row > 0 {
            bits |= anchor_bit(row - 1, left);
        }
        self.vertical & bits != 0
    }
}

/// The authoritative set of placed walls.
///
/// Keeps the bitboards for queries and the placement order for undo,
/// replay and snapshots. Cloning is O(1) thanks to `im::Vector`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallSet {
    mask: WallMask,
    placed: Vector<PlacedWall>,
}

impl WallSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mask(&self) -> WallMask {
        self.mask
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    #[must_use]
    pub fn contains(&self, wall: Wall) -> bool {
        self.mask.contains(wall)
    }

    /// Walls in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedWall> {
        self.placed.iter()
    }

    /// Number of walls placed by `owner`.
    #[must_use]
    pub fn placed_by(&self, owner: PlayerId) -> usize {
        self.placed.iter().filter(|p| p.owner == owner).count()
    }

    /// Append a wall. Legality is the caller's responsibility.
    pub(crate) fn push(&mut self, placed: PlacedWall) {
        self.mask.insert(placed.wall);
        self.placed.push_back(placed);
    }

    /// Remove the most recently placed wall.
    pub(crate) fn pop(&mut self) -> Option<PlacedWall> {
        let placed = self.placed.pop_back()?;
        self.mask.remove(placed.wall);
        Some(placed)
    }
}
