//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from the root mover's point of view: the root mover
//! maximizes, the opponent minimizes. Every node checks, in order:
//!
//! 1. the game is already won: `±(win_score - ply)`
//! 2. the side to move can step onto its goal row: a near-certain win for
//!    the root mover, or `-(threat_penalty - ply)` when it is the opponent
//! 3. the depth limit: the static evaluation
//!
//! The ply adjustment makes faster wins and slower losses rank higher.
//! Both magnitudes exceed anything the evaluator returns, so a forced win is
//! preferred over any quiet line and a move that hands the opponent a
//! winning step is avoided whenever an alternative exists.
//!
//! Each decision starts from a fresh [`PathCache`]; nothing persists
//! between calls.

use std::time::{Duration, Instant};

use tracing::{debug, instrument, trace};

use crate::core::{GameState, Move, PlayerId};
use crate::eval::evaluate_with;
use crate::rules::{winning_pawn_move, MoveError, PathCache};

use super::config::SearchConfig;
use super::ordering::ordered_moves;
use super::stats::SearchStats;

/// Bound used for the initial alpha-beta window.
const INF: i32 = i32::MAX;

/// Best move found and how it scored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score from the searching player's point of view.
    pub score: i32,
    /// Depth of the iteration that produced this result.
    pub depth: u32,
    pub stats: SearchStats,
}

/// Reusable search context.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    cache: PathCache,
    stats: SearchStats,
    deadline: Option<Instant>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a move for `player`, who must be the side to move.
    #[instrument(level = "debug", skip_all, fields(player = %player, ply = state.ply()))]
    pub fn search(&mut self, state: &GameState, player: PlayerId) -> Result<SearchResult, MoveError> {
        if state.is_over() {
            return Err(MoveError::GameOver);
        }
        if state.to_move() != player {
            return Err(MoveError::NotYourTurn { player });
        }

        self.stats.reset();
        self.cache.clear();
        let start = Instant::now();

        let result = self.run(state, player, start);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.path_cache_hits = self.cache.hits();
        self.stats.path_cache_misses = self.cache.misses();

        let (best_move, score, depth) = result?;
        self.stats.depth_completed = depth;
        debug!(
            best = %best_move,
            score,
            depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats.clone(),
        })
    }

    fn run(&mut self, state: &GameState, root: PlayerId, start: Instant) -> Result<(Move, i32, u32), MoveError> {
        if let Some(cell) = winning_pawn_move(state, root) {
            trace!(%cell, "immediate win");
            return Ok((Move::Pawn(cell), self.config.win_score - 1, 1));
        }

        let moves = ordered_moves(state, root, self.config.wall_candidates, &mut self.cache, &mut self.stats);
        if moves.is_empty() {
            return Err(MoveError::NoLegalMoves { player: root });
        }

        let max_depth = self.config.effective_depth();
        let Some(limit) = self.config.time_limit_ms else {
            self.deadline = None;
            let (mv, score) = self
                .search_root(state, root, &moves, max_depth)
                .ok_or(MoveError::NoLegalMoves { player: root })?;
            return Ok((mv, score, max_depth));
        };

        // Iterative deepening. Depth 1 always completes; deeper iterations
        // are discarded if the deadline passes mid-search.
        let deadline = start + Duration::from_millis(limit);
        let mut best = None;
        for depth in 1..=max_depth {
            self.deadline = (depth > 1).then_some(deadline);
            match self.search_root(state, root, &moves, depth) {
                Some((mv, score)) => {
                    trace!(depth, %mv, score, "iteration complete");
                    best = Some((mv, score, depth));
                }
                None => {
                    trace!(depth, "iteration abandoned at deadline");
                    break;
                }
            }
            if Instant::now() >= deadline {
                break;
            }
        }
        self.deadline = None;
        best.ok_or(MoveError::NoLegalMoves { player: root })
    }

    /// Returns `None` if the deadline passed before every root move was searched.
    fn search_root(&mut self, state: &GameState, root: PlayerId, moves: &[Move], depth: u32) -> Option<(Move, i32)> {
        let mut alpha = -INF;
        let mut best: Option<(Move, i32)> = None;

        for &mv in moves {
            let child = state.after(mv);
            let score = self.node(&child, root, depth - 1, 1, alpha, INF)?;
            // Strict comparison: ties go to the earlier move.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if self.config.pruning {
                alpha = alpha.max(score);
            }
        }

        best
    }

    fn node(
        &mut self,
        state: &GameState,
        root: PlayerId,
        depth: u32,
        ply: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Option<i32> {
        self.stats.nodes += 1;
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return None;
        }

        if let Some(winner) = state.winner() {
            let score = self.config.win_score - ply;
            return Some(if winner == root { score } else { -score });
        }

        let mover = state.to_move();
        if winning_pawn_move(state, mover).is_some() {
            return Some(if mover == root {
                self.config.win_score - (ply + 1)
            } else {
                -(self.config.threat_penalty - ply)
            });
        }

        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return Some(evaluate_with(state, root, &self.config.weights, &mut self.cache));
        }

        let moves = ordered_moves(state, mover, self.config.wall_candidates, &mut self.cache, &mut self.stats);
        if moves.is_empty() {
            self.stats.leaf_evaluations += 1;
            return Some(evaluate_with(state, root, &self.config.weights, &mut self.cache));
        }

        let maximizing = mover == root;
        let mut best = if maximizing { -INF } else { INF };

        for mv in moves {
            let child = state.after(mv);
            let score = self.node(&child, root, depth - 1, ply + 1, alpha, beta)?;

            if maximizing {
                best = best.max(score);
                if self.config.pruning {
                    alpha = alpha.max(score);
                }
            } else {
                best = best.min(score);
                if self.config.pruning {
                    beta = beta.min(score);
                }
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Some(best)
    }
}
