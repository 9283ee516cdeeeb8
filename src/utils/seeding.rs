//! Seedable random number sources
//!
//! Every environment owns its own generator. These helpers create one and
//! report the seed that was used, so runs seeded from entropy can be
//! replayed exactly.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Create a generator from an optional seed
///
/// When `seed` is `None` a fresh seed is drawn from the thread-local
/// entropy source. Returns the generator together with the seed used.
pub fn np_random(seed: Option<u64>) -> (StdRng, u64) {
    let used = seed.unwrap_or_else(|| rand::thread_rng().gen());
    (StdRng::seed_from_u64(used), used)
}

/// Derive the seed for the `index`-th member of a batch of environments
pub fn derive_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}
