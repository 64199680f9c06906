//! # lattice
//!
//! Cox-Ross-Rubinstein binomial lattice pricing for European, single-barrier
//! knock-out and Asian options, each with an explicit-loop and a
//! whole-level (vectorized) strategy.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lt-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use lattice::instruments::{BarrierOption, BarrierType, LatticeParameters, OptionType};
//! use lattice::pricingengines::{barrier_price, Strategy};
//!
//! let params = LatticeParameters::new(100.0, 0.06, 1.1, 1.0 / 1.1, 1.0, 3);
//! let option = BarrierOption::new(OptionType::Call, 100.0, 125.0, BarrierType::UpAndOut);
//! assert_eq!(barrier_price(&option, &params, Strategy::Loop).unwrap(), 4.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lt_core as core;

/// Mathematical utilities: arrays, rounding, distributions, RNG.
pub use lt_math as math;

/// Contracts, lattice parameters and the pricing-engine trait.
pub use lt_instruments as instruments;

/// Numerical methods (lattice, backward induction, path enumeration, Monte Carlo).
pub use lt_methods as methods;

/// Pricing engines.
pub use lt_pricingengines as pricingengines;

pub use lt_core::{Error, Real, Result};
pub use lt_instruments::{
    AsianOption, BarrierOption, BarrierType, EuropeanOption, LatticeParameters, MeanType,
    OptionType, PricingEngine, PricingResults, StrikeType,
};
pub use lt_pricingengines::{
    asian_price, barrier_price, european_price, BinomialAsianEngine, BinomialBarrierEngine,
    BinomialEuropeanEngine, MonteCarloAsianEngine, Strategy,
};
