//! # lt-pricingengines
//!
//! Pricing engines on the binomial lattice.
//!
//! ## Engines
//!
//! - [`BinomialEuropeanEngine`] — backward induction for European options
//! - [`BinomialBarrierEngine`] — backward induction with knock-out masks
//! - [`BinomialAsianEngine`] — exact path enumeration for Asian options
//! - [`MonteCarloAsianEngine`] — sampled lattice paths for Asian options
//! - [`closed_form_european_value`] — binomial-sum formula for European options
//!
//! Every lattice engine runs either the [`Strategy::Loop`] or the
//! [`Strategy::Vectorized`] kernel. The free functions `*_price` return the
//! value rounded to two decimals, `*_value` the full-precision value.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_binomial_engine;
pub mod binomial_asian_engine;
pub mod binomial_barrier_engine;
pub mod binomial_european_engine;
pub mod mc_asian_engine;
pub mod strategy;

pub use analytic_binomial_engine::{closed_form_european_price, closed_form_european_value};
pub use binomial_asian_engine::{asian_price, asian_value, BinomialAsianEngine};
pub use binomial_barrier_engine::{barrier_price, barrier_value, BinomialBarrierEngine};
pub use binomial_european_engine::{european_price, european_value, BinomialEuropeanEngine};
pub use mc_asian_engine::MonteCarloAsianEngine;
pub use strategy::Strategy;

use lt_core::{Real, Result};
use lt_instruments::{LatticeParameters, PricingResults};
use lt_math::round_price;
use lt_methods::BinomialLattice;

/// Run the contract check, then build the lattice. Rejections are logged.
pub(crate) fn validated_lattice(
    contract: &str,
    params: &LatticeParameters,
    contract_check: Result<()>,
) -> Result<BinomialLattice> {
    contract_check
        .and_then(|()| BinomialLattice::new(params))
        .map_err(|e| {
            tracing::warn!(contract, error = %e, "rejected pricing request");
            e
        })
}

/// Rounded and unrounded NPV together with the per-step model quantities.
pub(crate) fn lattice_results(value: Real, params: &LatticeParameters) -> Result<PricingResults> {
    let measure = params.risk_neutral()?;
    Ok(PricingResults::new(round_price(value), value)
        .with_result("q", measure.q)
        .with_result("discount", measure.discount)
        .with_result("dt", measure.dt))
}
