//! Pricing results and the `PricingEngine` trait.
//!
//! Contracts are plain values; an engine takes a contract together with the
//! lattice parameters and computes [`PricingResults`] on demand.

use crate::parameters::LatticeParameters;
use lt_core::{Real, Result};
use std::collections::BTreeMap;

/// Results of pricing an instrument.
///
/// `npv` is rounded to currency precision; `unrounded_npv` keeps the full
/// floating-point value for comparisons and further computation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResults {
    /// Net present value, rounded to two decimals.
    pub npv: Real,
    /// Net present value at full precision.
    pub unrounded_npv: Real,
    /// Error estimate (standard error of a Monte Carlo estimate).
    pub error_estimate: Option<Real>,
    /// Additional named results (e.g. "q", "discount", "dt").
    pub additional_results: BTreeMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results from a rounded and an unrounded NPV.
    pub fn new(npv: Real, unrounded_npv: Real) -> Self {
        Self {
            npv,
            unrounded_npv,
            error_estimate: None,
            additional_results: BTreeMap::new(),
        }
    }

    /// Attach an error estimate.
    pub fn with_error_estimate(mut self, error: Real) -> Self {
        self.error_estimate = Some(error);
        self
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// Look up a named result.
    pub fn result(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }
}

/// Base trait for all pricing engines.
///
/// A pricing engine computes `PricingResults` for one contract type on the
/// lattice described by `LatticeParameters`.
pub trait PricingEngine<Contract>: std::fmt::Debug + Send + Sync {
    /// Price `contract` under `params`.
    fn calculate(&self, contract: &Contract, params: &LatticeParameters) -> Result<PricingResults>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_results_builder() {
        let r = PricingResults::new(3.99, 3.9982)
            .with_result("q", 0.5)
            .with_error_estimate(0.01);
        assert_eq!(r.npv, 3.99);
        assert_eq!(r.result("q"), Some(0.5));
        assert_eq!(r.result("delta"), None);
        assert_eq!(r.error_estimate, Some(0.01));
    }
}
