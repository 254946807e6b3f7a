//! Seeded randomness for the Easy AI.
//!
//! Same seed, same decisions. The stream position can be saved next to a
//! [`GameSnapshot`](super::GameSnapshot) so a resumed game continues with
//! the exact coin flips it would have seen.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream tagged with its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Weighted coin; `probability` is clamped to `[0, 1]` and a NaN or
    /// infinite value always lands tails.
    pub fn coin(&mut self, probability: f64) -> bool {
        if !probability.is_finite() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Uniform pick from `items`, `None` when empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.inner).copied()
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self { inner, seed: state.seed }
    }
}

/// Serializable stream position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word counter.
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_coins() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let flips_a: Vec<_> = (0..64).map(|_| a.coin(0.5)).collect();
        let flips_b: Vec<_> = (0..64).map(|_| b.coin(0.5)).collect();
        assert_eq!(flips_a, flips_b);
        assert!(flips_a.contains(&true) && flips_a.contains(&false));
    }

    #[test]
    fn test_coin_extremes() {
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            assert!(!rng.coin(0.0));
            assert!(rng.coin(1.0));
            assert!(rng.coin(3.0));
            assert!(!rng.coin(-1.0));
            assert!(!rng.coin(f64::NAN));
            assert!(!rng.coin(f64::INFINITY));
        }
    }

    #[test]
    fn test_pick() {
        let mut rng = GameRng::new(3);
        let cells = [10u8, 20, 30];
        for _ in 0..20 {
            assert!(cells.contains(&rng.pick(&cells).unwrap()));
        }
        assert_eq!(rng.pick::<u8>(&[]), None);
    }

    #[test]
    fn test_resume_from_state() {
        let mut rng = GameRng::new(42);
        let items: Vec<u32> = (0..128).collect();
        for _ in 0..37 {
            rng.coin(0.5);
        }

        let saved = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pick(&items)).collect();

        let mut resumed = GameRng::from_state(&saved);
        let actual: Vec<_> = (0..10).map(|_| resumed.pick(&items)).collect();
        assert_eq!(expected, actual);
        assert_eq!(resumed.seed(), 42);

        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), saved);
    }
}
