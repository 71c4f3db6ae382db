//! Random sources for opponent draws
//!
//! The core never touches a global generator. Callers build one of these
//! and hand it to the controller.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Reproducible generator: same seed, same draws
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Derive an independent seed for one match of a seeded session
///
/// Each match replays identically no matter how many draws earlier
/// matches consumed.
pub fn match_seed(seed: u64, match_index: u32) -> u64 {
    let mut state = seed ^ (match_index as u64).wrapping_mul(0x9e3779b97f4a7c15);
    // splitmix64 finaliser
    state = (state ^ (state >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    state = (state ^ (state >> 27)).wrapping_mul(0x94d049bb133111eb);
    state ^ (state >> 31)
}
