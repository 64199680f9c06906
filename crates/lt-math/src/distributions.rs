//! Binomial distribution of the number of up-moves on a lattice.
//!
//! Wraps the `statrs` crate's binomial implementation.

use lt_core::{ensure, Probability, Real, Result};
use statrs::distribution::{Binomial, Discrete};

/// Binomial distribution with `n` trials and success probability `p`.
#[derive(Debug, Clone)]
pub struct BinomialDistribution {
    dist: Binomial,
}

impl BinomialDistribution {
    /// Create a binomial distribution with `n` trials and probability `p`.
    pub fn new(p: Probability, n: u64) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
        ensure!(n > 0, "n must be positive");
        let dist = Binomial::new(p, n).map_err(|e| {
            lt_core::Error::InvalidParameter(format!("binomial(p={p}, n={n}): {e}"))
        })?;
        Ok(Self { dist })
    }

    /// Probability mass function P(X = k).
    pub fn pmf(&self, k: u64) -> Real {
        self.dist.pmf(k)
    }
}
