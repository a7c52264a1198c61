//! Seedable randomness shared by every game in a session.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

/// Deterministic RNG for one arcade session.
///
/// The same seed replays the same computer moves, food and hands.
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

    /// Uses `seed` if given, otherwise draws one from the OS.
    #[instrument]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        info!(seed, "Session RNG seeded");
        Self::new(seed)
    }

    /// The seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
