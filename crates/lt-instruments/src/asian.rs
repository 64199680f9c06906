//! Asian (average-price / average-strike) option contract.
//!
//! The average is taken over every lattice date of a path, the initial
//! date included, so a path with `N` steps contributes `N + 1` observations
//! `S_0, S_1, ..., S_N`. Six averaging rules are available through
//! [`MeanType`]; each is computed incrementally with a single running
//! accumulator so path enumeration never has to store a whole path.

use crate::payoff::OptionType;
use lt_core::{ensure, Error, Price, Real, Result, Size};
use std::fmt;
use std::str::FromStr;

/// Whether the average replaces the strike or the terminal price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeType {
    /// Average-price option: `max(φ(A − K), 0)`.
    Fixed,
    /// Average-strike option: `max(φ(S_N − A), 0)`.
    Floating,
}

impl fmt::Display for StrikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrikeType::Fixed => write!(f, "Fixed"),
            StrikeType::Floating => write!(f, "Floating"),
        }
    }
}

impl FromStr for StrikeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fi" | "fixed" => Ok(StrikeType::Fixed),
            "fl" | "floating" => Ok(StrikeType::Floating),
            other => Err(Error::Unsupported(format!("strike type '{other}'"))),
        }
    }
}

/// Averaging rule applied to the prices observed along a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeanType {
    /// `Σ S / n`
    Arithmetic,
    /// `exp(Σ ln S / n)`
    Geometric,
    /// `n / Σ (1 / S)`
    Harmonic,
    /// `sqrt(Σ S² / n)`
    Quadratic,
    /// `max S`
    Max,
    /// `min S`
    Min,
}

impl MeanType {
    /// All mean types, ordered from the largest to the smallest average
    /// (for positive observations).
    pub const ALL: [MeanType; 6] = [
        MeanType::Max,
        MeanType::Quadratic,
        MeanType::Arithmetic,
        MeanType::Geometric,
        MeanType::Harmonic,
        MeanType::Min,
    ];

    /// Accumulator value before any observation.
    #[inline]
    pub fn initial(self) -> Real {
        match self {
            MeanType::Arithmetic
            | MeanType::Geometric
            | MeanType::Harmonic
            | MeanType::Quadratic => 0.0,
            MeanType::Max => Real::NEG_INFINITY,
            MeanType::Min => Real::INFINITY,
        }
    }

    /// Fold one observation into the accumulator.
    #[inline]
    pub fn accumulate(self, acc: Real, price: Price) -> Real {
        match self {
            MeanType::Arithmetic => acc + price,
            MeanType::Geometric => acc + price.ln(),
            MeanType::Harmonic => acc + price.recip(),
            MeanType::Quadratic => acc + price * price,
            MeanType::Max => acc.max(price),
            MeanType::Min => acc.min(price),
        }
    }

    /// Turn an accumulator over `count` observations into the mean.
    #[inline]
    pub fn finish(self, acc: Real, count: Size) -> Real {
        let n = count as Real;
        match self {
            MeanType::Arithmetic => acc / n,
            MeanType::Geometric => (acc / n).exp(),
            MeanType::Harmonic => n / acc,
            MeanType::Quadratic => (acc / n).sqrt(),
            MeanType::Max | MeanType::Min => acc,
        }
    }
}

impl fmt::Display for MeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeanType::Arithmetic => "Arithmetic",
            MeanType::Geometric => "Geometric",
            MeanType::Harmonic => "Harmonic",
            MeanType::Quadratic => "Quadratic",
            MeanType::Max => "Max",
            MeanType::Min => "Min",
        };
        f.write_str(name)
    }
}

impl FromStr for MeanType {
    type Err = Error;

    /// Accepts the short codes `AM`, `GM`, `HM`, `QM`, `MAX`, `MIN` and the
    /// full names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" | "arithmetic" => Ok(MeanType::Arithmetic),
            "gm" | "geometric" => Ok(MeanType::Geometric),
            "hm" | "harmonic" => Ok(MeanType::Harmonic),
            "qm" | "quadratic" => Ok(MeanType::Quadratic),
            "max" | "maximum" => Ok(MeanType::Max),
            "min" | "minimum" => Ok(MeanType::Min),
            other => Err(Error::Unsupported(format!("mean type '{other}'"))),
        }
    }
}

/// An Asian call or put on the running mean of the underlying.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsianOption {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price, `K`. Ignored for [`StrikeType::Floating`].
    pub strike: Price,
    /// Fixed or floating strike.
    pub strike_type: StrikeType,
    /// Averaging rule.
    pub mean_type: MeanType,
}

impl AsianOption {
    /// Create a new Asian option.
    pub fn new(
        option_type: OptionType,
        strike: Price,
        strike_type: StrikeType,
        mean_type: MeanType,
    ) -> Self {
        Self {
            option_type,
            strike,
            strike_type,
            mean_type,
        }
    }

    /// Convenience: a floating-strike option (the strike is irrelevant).
    pub fn floating(option_type: OptionType, mean_type: MeanType) -> Self {
        Self::new(option_type, 0.0, StrikeType::Floating, mean_type)
    }

    /// Payoff given the path average and the terminal price.
    #[inline]
    pub fn value_at(&self, average: Real, terminal: Price) -> Real {
        match self.strike_type {
            StrikeType::Fixed => self.option_type.intrinsic(average, self.strike),
            StrikeType::Floating => self.option_type.intrinsic(terminal, average),
        }
    }

    /// Payoff of a path given as its accumulator and terminal price.
    #[inline]
    pub fn value_from_accumulator(&self, acc: Real, count: Size, terminal: Price) -> Real {
        self.value_at(self.mean_type.finish(acc, count), terminal)
    }

    /// Check the contract terms.
    pub fn validate(&self) -> Result<()> {
        if self.strike_type == StrikeType::Fixed {
            ensure!(
                self.strike.is_finite() && self.strike > 0.0,
                "strike K must be positive for a fixed-strike Asian option, got {}",
                self.strike
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const PATH: [Price; 4] = [100.0, 110.0, 121.0, 110.0];

    fn mean_of(mean_type: MeanType, prices: &[Price]) -> Real {
        let acc = prices
            .iter()
            .fold(mean_type.initial(), |acc, &s| mean_type.accumulate(acc, s));
        mean_type.finish(acc, prices.len())
    }

    fn value_of_path(option: &AsianOption, path: &[Price]) -> Real {
        option.value_at(mean_of(option.mean_type, path), path[path.len() - 1])
    }

    #[test]
    fn means_of_a_path() {
        assert_abs_diff_eq!(mean_of(MeanType::Arithmetic, &PATH), 110.25, epsilon = 1e-12);
        let gm = (100.0_f64 * 110.0 * 121.0 * 110.0).powf(0.25);
        assert_abs_diff_eq!(mean_of(MeanType::Geometric, &PATH), gm, epsilon = 1e-10);
        let hm = 4.0 / (1.0 / 100.0 + 2.0 / 110.0 + 1.0 / 121.0);
        assert_abs_diff_eq!(mean_of(MeanType::Harmonic, &PATH), hm, epsilon = 1e-10);
        let squares = 100.0_f64.powi(2) + 2.0 * 110.0_f64.powi(2) + 121.0_f64.powi(2);
        let qm = (squares / 4.0).sqrt();
        assert_abs_diff_eq!(mean_of(MeanType::Quadratic, &PATH), qm, epsilon = 1e-10);
        assert_eq!(mean_of(MeanType::Max, &PATH), 121.0);
        assert_eq!(mean_of(MeanType::Min, &PATH), 100.0);
    }

    #[test]
    fn power_mean_ordering() {
        let means: Vec<Real> = MeanType::ALL.iter().map(|m| mean_of(*m, &PATH)).collect();
        for pair in means.windows(2) {
            assert!(pair[0] >= pair[1] - 1e-12, "{means:?}");
        }
    }

    proptest::proptest! {
        #[test]
        fn means_are_ordered_for_positive_paths(
            path in proptest::collection::vec(1.0..1000.0_f64, 1..30),
        ) {
            let means: Vec<Real> = MeanType::ALL.iter().map(|m| mean_of(*m, &path)).collect();
            for pair in means.windows(2) {
                proptest::prop_assert!(pair[0] >= pair[1] - 1e-9, "{:?}", means);
            }
        }
    }

    #[test]
    fn fixed_and_floating_payoffs() {
        let fixed =
            AsianOption::new(OptionType::Call, 105.0, StrikeType::Fixed, MeanType::Arithmetic);
        assert_abs_diff_eq!(value_of_path(&fixed, &PATH), 5.25, epsilon = 1e-12);
        assert_eq!(fixed.value_at(100.0, 200.0), 0.0);
        let floating = AsianOption::floating(OptionType::Put, MeanType::Arithmetic);
        assert_abs_diff_eq!(value_of_path(&floating, &PATH), 0.25, epsilon = 1e-12);
        let floating_call = AsianOption::floating(OptionType::Call, MeanType::Min);
        assert_abs_diff_eq!(value_of_path(&floating_call, &PATH), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn parse_codes() {
        assert_eq!("FI".parse::<StrikeType>().unwrap(), StrikeType::Fixed);
        assert_eq!("floating".parse::<StrikeType>().unwrap(), StrikeType::Floating);
        assert_eq!("AM".parse::<MeanType>().unwrap(), MeanType::Arithmetic);
        assert_eq!("gm".parse::<MeanType>().unwrap(), MeanType::Geometric);
        assert_eq!("Maximum".parse::<MeanType>().unwrap(), MeanType::Max);
        for m in MeanType::ALL {
            assert_eq!(m.to_string().parse::<MeanType>().unwrap(), m);
        }
        assert!(matches!("median".parse::<MeanType>(), Err(Error::Unsupported(_))));
        assert!(matches!("XX".parse::<StrikeType>(), Err(Error::Unsupported(_))));
    }

    #[test]
    fn floating_strike_ignores_strike_validation() {
        assert!(AsianOption::floating(OptionType::Call, MeanType::Geometric)
            .validate()
            .is_ok());
        let fixed =
            AsianOption::new(OptionType::Call, 0.0, StrikeType::Fixed, MeanType::Geometric);
        assert!(fixed.validate().is_err());
    }
}
