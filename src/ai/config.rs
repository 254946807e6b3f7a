//! AI configuration parameters.

use serde::{Deserialize, Serialize};

use crate::search::SearchConfig;

/// Settings shared by every difficulty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Seed for the Easy AI's random stream.
    /// Same seed produces the same sequence of decisions.
    pub seed: u64,

    /// Chance the Easy AI places a wall instead of stepping (default: 0.5).
    pub easy_wall_probability: f64,

    /// Search settings for the Hard AI.
    pub search: SearchConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            easy_wall_probability: 0.5,
            search: SearchConfig::default(),
        }
    }
}

impl AiConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_easy_wall_probability(mut self, probability: f64) -> Self {
        self.easy_wall_probability = probability;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AiConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.easy_wall_probability, 0.5);
        assert_eq!(config.search.max_depth, 3);
    }

    #[test]
    fn test_serialization() {
        let config = AiConfig::default()
            .with_seed(7)
            .with_search(SearchConfig::default().with_max_depth(2));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
