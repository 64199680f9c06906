//! Monte Carlo engine for Asian options on the binomial lattice.
//!
//! Samples up/down sequences under `q` instead of enumerating them, so it
//! is not limited by the `2^N` path count.

use lt_core::{ensure, Result, Size};
use lt_instruments::{AsianOption, LatticeParameters, PricingEngine, PricingResults};
use lt_methods::mc_path_price;

/// Monte Carlo engine for [`AsianOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloAsianEngine {
    /// Number of simulated paths.
    pub paths: Size,
    /// Seed of the Mersenne Twister.
    pub seed: u64,
}

impl MonteCarloAsianEngine {
    /// Default number of paths.
    pub const DEFAULT_PATHS: Size = 100_000;

    /// Create a new engine.
    pub fn new(paths: Size, seed: u64) -> Self {
        Self { paths, seed }
    }
}

impl Default for MonteCarloAsianEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATHS, 42)
    }
}

impl PricingEngine<AsianOption> for MonteCarloAsianEngine {
    fn calculate(
        &self,
        option: &AsianOption,
        params: &LatticeParameters,
    ) -> Result<PricingResults> {
        ensure!(
            self.paths >= 2,
            "at least two Monte Carlo paths are needed, got {}",
            self.paths
        );
        let lattice = crate::validated_lattice("asian", params, option.validate())?;
        let estimate = mc_path_price(&lattice, option, self.paths, self.seed)?;
        tracing::debug!(
            mean_type = %option.mean_type,
            strike_type = %option.strike_type,
            steps = lattice.steps(),
            paths = estimate.samples,
            value = estimate.value,
            error = estimate.error_estimate,
            "simulated Asian option"
        );
        Ok(crate::lattice_results(estimate.value, params)?
            .with_error_estimate(estimate.error_estimate)
            .with_result("samples", estimate.samples as f64))
    }
}
