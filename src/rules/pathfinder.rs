//! Breadth-first shortest paths over the walled grid.
//!
//! The graph is the 81 cells with an edge between orthogonal neighbors
//! unless a wall cuts it. Pawns, jumps and diagonals play no part here;
//! only distance matters, so the path itself is never materialized.
//!
//! Every legality check and every heuristic in the crate reduces to
//! [`shortest_path_length`]. Callers that ask the same question many times
//! (move ordering, evaluation) go through a [`PathOracle`], which may be the
//! plain [`Bfs`] or a memoizing [`PathCache`].

use rustc_hash::FxHashMap;

use crate::core::{Direction, Position, WallMask, BOARD_CELLS};

/// Length of the shortest path from `from` to any cell of `goal_row`.
///
/// Returns `None` when the goal row is unreachable or `from` is off the board.
#[must_use]
pub fn shortest_path_length(mask: WallMask, from: Position, goal_row: u8) -> Option<u32> {
    if !from.is_on_board() {
        return None;
    }
    if from.row == goal_row {
        return Some(0);
    }

    let mut visited = [false; BOARD_CELLS];
    let mut distance = [0u8; BOARD_CELLS];
    // Each cell is enqueued at most once, so a flat array is enough.
    let mut queue = [0u8; BOARD_CELLS];
    let (mut head, mut tail) = (0usize, 0usize);

    visited[from.index()] = true;
    queue[tail] = from.index() as u8;
    tail += 1;

    while head < tail {
        let index = queue[head] as usize;
        head += 1;
        let cell = Position::from_index(index);

        for direction in Direction::ALL {
            if mask.blocks_step(cell, direction) {
                continue;
            }
            let Some(next) = cell.step(direction) else {
                continue;
            };
            let next_index = next.index();
            if visited[next_index] {
                continue;
            }

            let d = distance[index] + 1;
            if next.row == goal_row {
                return Some(u32::from(d));
            }
            visited[next_index] = true;
            distance[next_index] = d;
            queue[tail] = next_index as u8;
            tail += 1;
        }
    }

    None
}

/// Whether any path to `goal_row` exists.
#[must_use]
pub fn has_path(mask: WallMask, from: Position, goal_row: u8) -> bool {
    shortest_path_length(mask, from, goal_row).is_some()
}

/// Source of shortest-path answers.
pub trait PathOracle {
    fn path_length(&mut self, mask: WallMask, from: Position, goal_row: u8) -> Option<u32>;
}

/// Uncached breadth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bfs;

impl PathOracle for Bfs {
    fn path_length(&mut self, mask: WallMask, from: Position, goal_row: u8) -> Option<u32> {
        shortest_path_length(mask, from, goal_row)
    }
}

type PathKey = (u64, u64, u8, u8);

/// Memoized BFS keyed on wall bitboards, start cell and goal row.
///
/// Meant to live for one AI decision: within a search most nodes share a
/// wall layout with their parent, so the same question recurs constantly.
#[derive(Clone, Debug, Default)]
pub struct PathCache {
    entries: FxHashMap<PathKey, Option<u32>>,
    hits: u64,
    misses: u64,
}

impl PathCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that ran a BFS.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl PathOracle for PathCache {
    fn path_length(&mut self, mask: WallMask, from: Position, goal_row: u8) -> Option<u32> {
        // Off-board starts have no path and no valid key.
        if !from.is_on_board() {
            return None;
        }
        let (horizontal, vertical) = mask.bits();
        let key = (horizontal, vertical, from.index() as u8, goal_row);
        if let Some(&cached) = self.entries.get(&key) {
            self.hits += 1;
            return cached;
        }
        self.misses += 1;
        let length = shortest_path_length(mask, from, goal_row);
        self.entries.insert(key, length);
        length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Wall;

    #[test]
    fn test_empty_board() {
        let mask = WallMask::new();
        assert_eq!(shortest_path_length(mask, Position::new(8, 4), 0), Some(8));
        assert_eq!(shortest_path_length(mask, Position::new(0, 4), 8), Some(8));
        assert_eq!(shortest_path_length(mask, Position::new(3, 0), 0), Some(3));
    }

    #[test]
    fn test_already_on_goal() {
        assert_eq!(shortest_path_length(WallMask::new(), Position::new(0, 7), 0), Some(0));
    }

    #[test]
    fn test_off_board_start() {
        assert_eq!(shortest_path_length(WallMask::new(), Position::new(9, 0), 0), None);
    }

    #[test]
    fn test_wall_forces_detour() {
        // Wall directly above (8, 4): one step sideways first.
        let mask = WallMask::new().with(Wall::horizontal(7, 4));
        assert_eq!(shortest_path_length(mask, Position::new(8, 4), 0), Some(9));
    }

    #[test]
    fn test_sealed_corner() {
        let mask = WallMask::new()
            .with(Wall::horizontal(0, 0))
            .with(Wall::vertical(0, 1));
        assert_eq!(shortest_path_length(mask, Position::new(0, 0), 8), None);
        assert!(!has_path(mask, Position::new(0, 1), 8));
        assert!(has_path(mask, Position::new(0, 2), 8));
    }

    #[test]
    fn test_full_row_barrier_with_gap() {
        // Horizontal walls between rows 4 and 5 covering columns 0-7.
        let mut mask = WallMask::new();
        for col in [0, 2, 4, 6] {
            mask.insert(Wall::horizontal(4, col));
        }
        // Must walk to column 8 to get through.
        assert_eq!(shortest_path_length(mask, Position::new(8, 0), 0), Some(16));
        assert_eq!(shortest_path_length(mask, Position::new(8, 8), 0), Some(8));
    }

    #[test]
    fn test_cache_matches_bfs() {
        let mut cache = PathCache::new();
        let mask = WallMask::new().with(Wall::horizontal(3, 3)).with(Wall::vertical(5, 1));

        for pos in Position::all() {
            for goal in [0, 8] {
                assert_eq!(
                    cache.path_length(mask, pos, goal),
                    Bfs.path_length(mask, pos, goal)
                );
            }
        }
        assert_eq!(cache.misses(), 162);

        let _ = cache.path_length(mask, Position::new(4, 4), 0);
        assert_eq!(cache.hits(), 1);

        cache.clear();
        assert!(cache.is_empty());

        // Index 261 must not alias cell (0, 5).
        assert_eq!(cache.path_length(WallMask::new(), Position::new(29, 0), 8), None);
        assert_eq!(cache.path_length(WallMask::new(), Position::new(0, 5), 8), Some(8));
        assert_eq!(cache.len(), 1);
    }
}
