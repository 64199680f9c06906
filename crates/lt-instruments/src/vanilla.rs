//! European (path-independent) option contract.

use crate::payoff::OptionType;
use lt_core::{ensure, Price, Real, Result};

/// A European call or put, exercisable at maturity only.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanOption {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price, `K`.
    pub strike: Price,
}

impl EuropeanOption {
    /// Create a new European option.
    pub fn new(option_type: OptionType, strike: Price) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// Convenience: a European call.
    pub fn call(strike: Price) -> Self {
        Self::new(OptionType::Call, strike)
    }

    /// Convenience: a European put.
    pub fn put(strike: Price) -> Self {
        Self::new(OptionType::Put, strike)
    }

    /// Payoff for an underlying price at maturity.
    #[inline]
    pub fn value_at(&self, price: Price) -> Real {
        self.option_type.intrinsic(price, self.strike)
    }

    /// Check the contract terms.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike K must be positive, got {}",
            self.strike
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_maturity() {
        assert_eq!(EuropeanOption::call(100.0).value_at(121.0), 21.0);
        assert_eq!(EuropeanOption::put(100.0).value_at(121.0), 0.0);
        assert_eq!(EuropeanOption::put(100.0).value_at(81.0), 19.0);
    }

    #[test]
    fn strike_must_be_positive() {
        assert!(EuropeanOption::call(100.0).validate().is_ok());
        assert!(EuropeanOption::call(0.0).validate().is_err());
        assert!(EuropeanOption::put(-1.0).validate().is_err());
        assert!(EuropeanOption::put(f64::NAN).validate().is_err());
    }
}
