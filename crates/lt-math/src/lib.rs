//! # lt-math
//!
//! Mathematical utilities for lattice pricing: the `Array` newtype (over
//! nalgebra) used by the vectorized strategies, price rounding, the
//! binomial distribution (via statrs), a seeded Mersenne Twister and an
//! incremental statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Dense 1D array for whole-step arithmetic.
pub mod array;

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Price rounding.
pub mod rounding;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use distributions::BinomialDistribution;
pub use random_numbers::MersenneTwisterUniformRng;
pub use rounding::{round_price, CURRENCY_PRECISION};
pub use statistics::Statistics;
