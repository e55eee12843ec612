//! Deterministic random number generation for matches.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for seating and dice
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use dice_mafia::core::{DieRoller, GameRng};
//!
//! let rng = GameRng::new(42);
//!
//! // Seating shuffles never disturb the dice stream
//! let mut seating = rng.for_context("seating");
//! let mut dice = rng.for_context("dice");
//!
//! let face = dice.roll_face();
//! assert!((1..=6).contains(&face.value()));
//!
//! let mut seats = vec![1, 2, 3, 4];
//! seating.shuffle(&mut seats);
//! assert_eq!(seats.len(), 4);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::die::{DieRoller, Face};

/// Deterministic RNG backing every random decision of a match.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// so reshuffling the seating never changes the dice a seed produces.
    ///
    /// Context seeds are FNV-1a over the seed bytes and the context name, so
    /// they do not depend on the standard library's hasher.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieRoller for GameRng {
    fn roll_face(&mut self) -> Face {
        Face::from_index(self.inner.gen_range(0..Face::COUNT))
    }
}

/// FNV-1a over the little-endian seed followed by the context bytes.
fn context_seed(seed: u64, context: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    seed.to_le_bytes()
        .iter()
        .chain(context.as_bytes())
        .fold(OFFSET, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(rng: &mut GameRng, n: usize) -> Vec<u8> {
        (0..n).map(|_| rng.roll_face().value()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(faces(&mut rng1, 100), faces(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(faces(&mut rng1, 20), faces(&mut rng2, 20));
    }

    #[test]
    fn test_rolls_cover_all_faces() {
        let mut rng = GameRng::new(7);
        let rolled = faces(&mut rng, 600);

        for face in 1..=6u8 {
            assert!(rolled.contains(&face), "face {face} never rolled");
        }
        assert!(rolled.iter().all(|f| (1..=6).contains(f)));
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut seating = rng.for_context("seating");
        let mut dice = rng.for_context("dice");

        assert_ne!(faces(&mut seating, 20), faces(&mut dice, 20));
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("dice");
        let mut ctx2 = GameRng::new(42).for_context("dice");

        assert_eq!(faces(&mut ctx1, 20), faces(&mut ctx2, 20));
    }

    #[test]
    fn test_context_seeds_are_pinned() {
        // Fixed values keep seeded matches reproducible across toolchains
        assert_eq!(context_seed(42, "dice"), 1_572_107_913_467_482_204);
        assert_eq!(context_seed(42, "seating"), 163_732_623_985_044_506);
        assert_eq!(GameRng::new(42).for_context("dice").seed, 1_572_107_913_467_482_204);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);
        faces(&mut rng, 50);

        let state = rng.state();
        let expected = faces(&mut rng, 10);

        let mut restored = GameRng::from_state(&state);
        assert_eq!(expected, faces(&mut restored, 10));
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
