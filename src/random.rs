//! Seeded random source acquisition
//!
//! Every consumer in the engine takes `&mut impl Rng`; the simulator owns a
//! `ChaCha8Rng` so a seed fully determines a life.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default engine random source
pub type LifeRng = ChaCha8Rng;

/// Seed derived from the wall clock. The only non-reproducible input.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Resolve the seed to use: the explicit one, else a clock-derived one
#[inline]
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(time_seed)
}

pub fn seeded_rng(seed: u64) -> LifeRng {
    ChaCha8Rng::seed_from_u64(seed)
}
