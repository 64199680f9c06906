//! Pseudo-random move generation for lattice path sampling.
//!
//! Wraps the Mersenne Twister MT19937-64 from `rand_mt` behind the `rand`
//! traits, so a seeded run is reproducible across platforms.

use lt_core::Probability;
use rand::Rng;
use rand_mt::Mt64;

/// A seeded uniform generator based on MT19937-64.
pub struct MersenneTwisterUniformRng {
    rng: Mt64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt64::new(seed),
        }
    }

    /// Next Bernoulli draw: `true` with probability `p`.
    ///
    /// `p` outside `[0, 1]` is clamped; callers validate it beforehand.
    pub fn next_bernoulli(&mut self, p: Probability) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl std::fmt::Debug for MersenneTwisterUniformRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwisterUniformRng").finish_non_exhaustive()
    }
}
