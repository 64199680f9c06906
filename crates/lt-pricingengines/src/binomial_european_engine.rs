//! Binomial lattice engine for European options.
//!
//! Builds the CRR lattice, evaluates the vanilla payoff at maturity and
//! rolls it back to the initial date:
//!
//! `V_i[j] = df · (q · V_{i+1}[j+1] + (1 − q) · V_{i+1}[j])`
//!
//! with `df = (1 + r·dt)^-1` and `q = (1 + r·dt − d) / (u − d)`.

use crate::strategy::Strategy;
use lt_core::{Real, Result};
use lt_instruments::{EuropeanOption, LatticeParameters, PricingEngine, PricingResults};
use lt_math::round_price;
use lt_methods::{backward_induction_loop, backward_induction_vectorized};

/// Price a European option, rounded to two decimals.
///
/// # Example
/// ```
/// use lt_instruments::{EuropeanOption, LatticeParameters};
/// use lt_pricingengines::{european_price, Strategy};
///
/// let params = LatticeParameters::new(100.0, 0.02, 1.1, 0.9, 1.0, 20);
/// let price = european_price(&EuropeanOption::call(100.0), &params, Strategy::Loop).unwrap();
/// assert_eq!(price, 18.77);
/// ```
pub fn european_price(
    option: &EuropeanOption,
    params: &LatticeParameters,
    strategy: Strategy,
) -> Result<Real> {
    european_value(option, params, strategy).map(round_price)
}

/// Price a European option at full precision.
pub fn european_value(
    option: &EuropeanOption,
    params: &LatticeParameters,
    strategy: Strategy,
) -> Result<Real> {
    let lattice = crate::validated_lattice("european", params, option.validate())?;
    let payoff = |s: Real| option.value_at(s);
    let value = match strategy {
        Strategy::Loop => backward_induction_loop(&lattice, &payoff, None)?,
        Strategy::Vectorized => backward_induction_vectorized(&lattice, &payoff, None)?,
    };
    tracing::debug!(
        option_type = %option.option_type,
        strike = option.strike,
        steps = lattice.steps(),
        q = lattice.q(),
        df = lattice.discount(),
        %strategy,
        value,
        "priced European option"
    );
    Ok(value)
}

/// Lattice engine for [`EuropeanOption`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinomialEuropeanEngine {
    strategy: Strategy,
}

impl BinomialEuropeanEngine {
    /// Create a new engine using `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

impl PricingEngine<EuropeanOption> for BinomialEuropeanEngine {
    fn calculate(
        &self,
        option: &EuropeanOption,
        params: &LatticeParameters,
    ) -> Result<PricingResults> {
        let value = european_value(option, params, self.strategy)?;
        crate::lattice_results(value, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lt_core::Error;
    use lt_instruments::OptionType;

    fn params() -> LatticeParameters {
        LatticeParameters::new(100.0, 0.02, 1.1, 0.9, 1.0, 20)
    }

    #[test]
    fn documented_call_example() {
        for strategy in Strategy::ALL {
            let price = european_price(&EuropeanOption::call(100.0), &params(), strategy).unwrap();
            assert_eq!(price, 18.77, "{strategy}");
            let value = european_value(&EuropeanOption::call(100.0), &params(), strategy).unwrap();
            assert_abs_diff_eq!(value, 18.768_669_602_046_284, epsilon = 1e-9);
        }
    }

    #[test]
    fn put_example() {
        for strategy in Strategy::ALL {
            let price = european_price(&EuropeanOption::put(100.0), &params(), strategy).unwrap();
            assert_eq!(price, 16.79, "{strategy}");
        }
    }

    #[test]
    fn three_step_call() {
        let p = LatticeParameters::new(100.0, 0.06, 1.1, 1.0 / 1.1, 1.0, 3);
        let value = european_value(&EuropeanOption::call(100.0), &p, Strategy::Loop).unwrap();
        assert_abs_diff_eq!(value, 10.113_947_224_370_028, epsilon = 1e-9);
    }

    #[test]
    fn single_step_reduces_to_one_expectation() {
        let p = LatticeParameters::new(100.0, 0.05, 1.2, 0.8, 0.5, 1);
        let m = p.risk_neutral().unwrap();
        let option = EuropeanOption::new(OptionType::Put, 95.0);
        let expected =
            m.discount * (m.q * option.value_at(120.0) + m.q_down() * option.value_at(80.0));
        for strategy in Strategy::ALL {
            let value = european_value(&option, &p, strategy).unwrap();
            assert_abs_diff_eq!(value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn invalid_inputs_fail_before_pricing() {
        let err =
            european_price(&EuropeanOption::call(0.0), &params(), Strategy::Loop).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        let err = european_price(
            &EuropeanOption::call(100.0),
            &params().with_rate(10.0),
            Strategy::Vectorized,
        )
        .unwrap_err();
        assert!(err.to_string().contains("risk-neutral probability"), "{err}");
    }

    #[test]
    fn overflowing_lattice_is_not_priced() {
        let p = LatticeParameters::new(100.0, 0.02, 1.1, 0.9, 1.0, 10_000);
        for strategy in Strategy::ALL {
            let err = european_price(&EuropeanOption::call(100.0), &p, strategy).unwrap_err();
            assert!(matches!(err, Error::Runtime(_)), "{strategy}: {err}");
        }
    }

    #[test]
    fn deep_lattice_stays_finite() {
        let p = LatticeParameters::new(100.0, 0.02, 1.01, 1.0 / 1.01, 1.0, 10_000);
        let call = EuropeanOption::call(100.0);
        let slow = european_value(&call, &p, Strategy::Loop).unwrap();
        let fast = european_value(&call, &p, Strategy::Vectorized).unwrap();
        assert!(slow.is_finite() && slow > 0.0 && slow < 100.0, "{slow}");
        assert_abs_diff_eq!(slow, fast, epsilon = 1e-9);
        let closed = crate::closed_form_european_value(&call, &p).unwrap();
        assert_abs_diff_eq!(slow, closed, epsilon = 1e-6);
    }

    #[test]
    fn engine_reports_model_quantities() {
        let engine = BinomialEuropeanEngine::new(Strategy::Loop);
        let r = engine.calculate(&EuropeanOption::call(100.0), &params()).unwrap();
        assert_eq!(r.npv, 18.77);
        assert_abs_diff_eq!(r.unrounded_npv, 18.768_669_602_046_284, epsilon = 1e-9);
        assert_abs_diff_eq!(r.result("q").unwrap(), 0.505, epsilon = 1e-12);
        assert_abs_diff_eq!(r.result("dt").unwrap(), 0.05, epsilon = 1e-15);
        assert!(r.error_estimate.is_none());
    }
}
