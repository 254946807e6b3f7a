//! Computer opponents.
//!
//! Three fixed difficulty levels share one capability, [`Strategy::decide`]:
//!
//! | Level  | Behavior                                                   |
//! |--------|------------------------------------------------------------|
//! | Easy   | greedy row-count steps, random walls half the time         |
//! | Medium | shortest-path steps, best wall near the opponent           |
//! | Hard   | depth-3 alpha-beta search over ordered moves               |
//!
//! [`AiPlayer`] is the closed set of all three. Hosts that just want a move
//! call [`request_ai_move`].

pub mod config;
pub mod easy;
pub mod medium;
pub mod hard;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{GameState, Move, PlayerId};
use crate::rules::MoveError;

pub use config::AiConfig;
pub use easy::EasyAi;
pub use hard::HardAi;
pub use medium::{wall_neighborhood, MediumAi};

/// A move-choosing policy.
pub trait Strategy {
    /// Pick a legal move for `player`, who must be the side to move.
    fn decide(&mut self, state: &GameState, player: PlayerId) -> Result<Move, MoveError>;
}

/// Difficulty level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// One AI of any difficulty.
#[derive(Clone, Debug)]
pub enum AiPlayer {
    Easy(EasyAi),
    Medium(MediumAi),
    Hard(HardAi),
}

impl AiPlayer {
    #[must_use]
    pub fn new(difficulty: Difficulty, config: &AiConfig) -> Self {
        match difficulty {
            Difficulty::Easy => AiPlayer::Easy(EasyAi::new(config.seed, config.easy_wall_probability)),
            Difficulty::Medium => AiPlayer::Medium(MediumAi::new()),
            Difficulty::Hard => AiPlayer::Hard(HardAi::new(config.search.clone())),
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        match self {
            AiPlayer::Easy(_) => Difficulty::Easy,
            AiPlayer::Medium(_) => Difficulty::Medium,
            AiPlayer::Hard(_) => Difficulty::Hard,
        }
    }
}

impl Strategy for AiPlayer {
    #[instrument(level = "debug", skip_all, fields(difficulty = %self.difficulty(), player = %player))]
    fn decide(&mut self, state: &GameState, player: PlayerId) -> Result<Move, MoveError> {
        let mv = match self {
            AiPlayer::Easy(ai) => ai.decide(state, player),
            AiPlayer::Medium(ai) => ai.decide(state, player),
            AiPlayer::Hard(ai) => ai.decide(state, player),
        }?;
        debug!(%mv, "ai decided");
        Ok(mv)
    }
}

/// Ask a freshly built AI of `difficulty` for `player`'s move.
///
/// Uses [`AiConfig::default`]; build an [`AiPlayer`] to control the seed
/// or search settings.
pub fn request_ai_move(state: &GameState, player: PlayerId, difficulty: Difficulty) -> Result<Move, MoveError> {
    AiPlayer::new(difficulty, &AiConfig::default()).decide(state, player)
}

/// Reject decisions for a finished game or out of turn.
pub(crate) fn ensure_can_move(state: &GameState, player: PlayerId) -> Result<(), MoveError> {
    if state.is_over() {
        return Err(MoveError::GameOver);
    }
    if state.to_move() != player {
        return Err(MoveError::NotYourTurn { player });
    }
    Ok(())
}
