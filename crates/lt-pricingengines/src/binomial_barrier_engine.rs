//! Binomial lattice engine for single-barrier knock-out options.
//!
//! Same backward induction as the European engine, with the barrier
//! monitored at every lattice date: nodes on or beyond the barrier are
//! zeroed at maturity and again after each roll-back step.

use crate::strategy::Strategy;
use lt_core::{Price, Real, Result};
use lt_instruments::{BarrierOption, LatticeParameters, PricingEngine, PricingResults};
use lt_math::round_price;
use lt_methods::{backward_induction_loop, backward_induction_vectorized, Knockout};

/// Price a knock-out barrier option, rounded to two decimals.
///
/// # Example
/// ```
/// use lt_instruments::{BarrierOption, BarrierType, LatticeParameters, OptionType};
/// use lt_pricingengines::{barrier_price, Strategy};
///
/// let params = LatticeParameters::new(100.0, 0.06, 1.1, 1.0 / 1.1, 1.0, 3);
/// let option = BarrierOption::new(OptionType::Call, 100.0, 125.0, BarrierType::UpAndOut);
/// assert_eq!(barrier_price(&option, &params, Strategy::Vectorized).unwrap(), 4.0);
/// ```
pub fn barrier_price(
    option: &BarrierOption,
    params: &LatticeParameters,
    strategy: Strategy,
) -> Result<Real> {
    barrier_value(option, params, strategy).map(round_price)
}

/// Price a knock-out barrier option at full precision.
pub fn barrier_value(
    option: &BarrierOption,
    params: &LatticeParameters,
    strategy: Strategy,
) -> Result<Real> {
    let lattice = crate::validated_lattice("barrier", params, option.validate())?;
    let payoff = |s: Price| option.value_at(s);
    let knocked_out: Knockout<'_> = &|s: Price| option.is_knocked_out(s);
    let value = match strategy {
        Strategy::Loop => backward_induction_loop(&lattice, &payoff, Some(knocked_out))?,
        Strategy::Vectorized => {
            backward_induction_vectorized(&lattice, &payoff, Some(knocked_out))?
        }
    };
    tracing::debug!(
        option_type = %option.option_type,
        barrier_type = %option.barrier_type,
        strike = option.strike,
        barrier = option.barrier,
        steps = lattice.steps(),
        %strategy,
        value,
        "priced barrier option"
    );
    Ok(value)
}

/// Lattice engine for [`BarrierOption`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinomialBarrierEngine {
    strategy: Strategy,
}

impl BinomialBarrierEngine {
    /// Create a new engine using `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

impl PricingEngine<BarrierOption> for BinomialBarrierEngine {
    fn calculate(
        &self,
        option: &BarrierOption,
        params: &LatticeParameters,
    ) -> Result<PricingResults> {
        let value = barrier_value(option, params, self.strategy)?;
        crate::lattice_results(value, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binomial_european_engine::european_value;
    use approx::assert_abs_diff_eq;
    use lt_core::Error;
    use lt_instruments::{BarrierType, EuropeanOption, OptionType};

    fn params(rate: Real, steps: usize) -> LatticeParameters {
        LatticeParameters::new(100.0, rate, 1.1, 1.0 / 1.1, 1.0, steps)
    }

    #[test]
    fn up_and_out_call_example() {
        let option = BarrierOption::new(OptionType::Call, 100.0, 125.0, BarrierType::UpAndOut);
        for strategy in Strategy::ALL {
            assert_eq!(barrier_price(&option, &params(0.06, 3), strategy).unwrap(), 4.0);
            assert_abs_diff_eq!(
                barrier_value(&option, &params(0.06, 3), strategy).unwrap(),
                3.998_206_204_117_409,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn down_and_out_put() {
        let option = BarrierOption::new(OptionType::Put, 100.0, 80.0, BarrierType::DownAndOut);
        let p = params(0.05, 10);
        for strategy in Strategy::ALL {
            let value = barrier_value(&option, &p, strategy).unwrap();
            assert_abs_diff_eq!(value, 1.437_243_820_890_894_6, epsilon = 1e-9);
            let vanilla = european_value(&EuropeanOption::put(100.0), &p, strategy).unwrap();
            assert_abs_diff_eq!(vanilla, 9.121_272_064_342_866, epsilon = 1e-9);
        }
    }

    #[test]
    fn unreachable_barrier_matches_european() {
        let option = BarrierOption::new(OptionType::Call, 100.0, 1000.0, BarrierType::UpAndOut);
        let p = params(0.05, 10);
        let vanilla = european_value(&EuropeanOption::call(100.0), &p, Strategy::Loop).unwrap();
        assert_abs_diff_eq!(vanilla, 13.986_477_994_735_901, epsilon = 1e-9);
        for strategy in Strategy::ALL {
            let value = barrier_value(&option, &p, strategy).unwrap();
            assert_abs_diff_eq!(value, vanilla, epsilon = 1e-12);
        }
    }

    #[test]
    fn never_worth_more_than_vanilla() {
        let p = params(0.05, 15);
        for (option_type, barrier, barrier_type) in [
            (OptionType::Call, 120.0, BarrierType::UpAndOut),
            (OptionType::Call, 90.0, BarrierType::DownAndOut),
            (OptionType::Put, 130.0, BarrierType::UpAndOut),
            (OptionType::Put, 85.0, BarrierType::DownAndOut),
        ] {
            let option = BarrierOption::new(option_type, 100.0, barrier, barrier_type);
            let vanilla =
                european_value(&EuropeanOption::new(option_type, 100.0), &p, Strategy::Loop)
                    .unwrap();
            let knocked = barrier_value(&option, &p, Strategy::Vectorized).unwrap();
            assert!(knocked <= vanilla + 1e-12, "{option_type} {barrier_type} {barrier}");
            assert!(knocked >= 0.0);
        }
    }

    #[test]
    fn breached_at_inception_is_worthless() {
        let up = BarrierOption::new(OptionType::Call, 90.0, 100.0, BarrierType::UpAndOut);
        let down = BarrierOption::new(OptionType::Put, 110.0, 100.0, BarrierType::DownAndOut);
        for strategy in Strategy::ALL {
            assert_eq!(barrier_value(&up, &params(0.05, 8), strategy).unwrap(), 0.0);
            assert_eq!(barrier_value(&down, &params(0.05, 8), strategy).unwrap(), 0.0);
        }
    }

    #[test]
    fn rejects_non_positive_barrier() {
        let option = BarrierOption::new(OptionType::Call, 100.0, 0.0, BarrierType::DownAndOut);
        let err = barrier_price(&option, &params(0.05, 3), Strategy::Loop).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn engine_uses_configured_strategy() {
        let option = BarrierOption::new(OptionType::Call, 100.0, 125.0, BarrierType::UpAndOut);
        let slow = BinomialBarrierEngine::new(Strategy::Loop)
            .calculate(&option, &params(0.06, 3))
            .unwrap();
        let fast = BinomialBarrierEngine::default()
            .calculate(&option, &params(0.06, 3))
            .unwrap();
        assert_eq!(slow.npv, 4.0);
        assert_abs_diff_eq!(slow.unrounded_npv, fast.unrounded_npv, epsilon = 1e-12);
        assert!(slow.result("discount").is_some());
    }
}
