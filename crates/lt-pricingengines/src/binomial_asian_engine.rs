//! Binomial lattice engine for Asian options.
//!
//! The payoff depends on the mean of the prices `S_0, ..., S_N` visited by a
//! path, so the recombining lattice only supplies node prices; the
//! valuation itself enumerates all `2^N` paths (see
//! [`lt_methods::lattice::path_enumeration`]). For larger trees use
//! [`MonteCarloAsianEngine`](crate::MonteCarloAsianEngine).

use crate::strategy::Strategy;
use lt_core::{Real, Result};
use lt_instruments::{AsianOption, LatticeParameters, PricingEngine, PricingResults};
use lt_math::round_price;
use lt_methods::{enumerate_paths_loop, enumerate_paths_vectorized};

/// Price an Asian option, rounded to two decimals.
pub fn asian_price(
    option: &AsianOption,
    params: &LatticeParameters,
    strategy: Strategy,
) -> Result<Real> {
    asian_value(option, params, strategy).map(round_price)
}

/// Price an Asian option at full precision.
pub fn asian_value(
    option: &AsianOption,
    params: &LatticeParameters,
    strategy: Strategy,
) -> Result<Real> {
    let lattice = crate::validated_lattice("asian", params, option.validate())?;
    let value = match strategy {
        Strategy::Loop => enumerate_paths_loop(&lattice, option),
        Strategy::Vectorized => enumerate_paths_vectorized(&lattice, option),
    }
    .map_err(|e| {
        tracing::warn!(steps = lattice.steps(), error = %e, "asian path enumeration failed");
        e
    })?;
    tracing::debug!(
        option_type = %option.option_type,
        strike_type = %option.strike_type,
        mean_type = %option.mean_type,
        strike = option.strike,
        steps = lattice.steps(),
        %strategy,
        value,
        "priced Asian option"
    );
    Ok(value)
}

/// Exact lattice engine for [`AsianOption`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinomialAsianEngine {
    strategy: Strategy,
}

impl BinomialAsianEngine {
    /// Create a new engine using `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

impl PricingEngine<AsianOption> for BinomialAsianEngine {
    fn calculate(
        &self,
        option: &AsianOption,
        params: &LatticeParameters,
    ) -> Result<PricingResults> {
        let value = asian_value(option, params, self.strategy)?;
        crate::lattice_results(value, params)
    }
}
