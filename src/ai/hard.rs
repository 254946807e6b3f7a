//! Hard AI: alpha-beta search.

use crate::core::{GameState, Move, PlayerId};
use crate::rules::MoveError;
use crate::search::{SearchConfig, SearchEngine, SearchStats};

use super::Strategy;

/// Delegates every decision to a [`SearchEngine`].
#[derive(Clone, Debug, Default)]
pub struct HardAi {
    engine: SearchEngine,
}

impl HardAi {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            engine: SearchEngine::new(config),
        }
    }

    /// Statistics from the last decision.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.engine.stats()
    }
}

impl Strategy for HardAi {
    fn decide(&mut self, state: &GameState, player: PlayerId) -> Result<Move, MoveError> {
        self.engine.search(state, player).map(|result| result.best_move)
    }
}
