//! Single-barrier knock-out option contract.
//!
//! The barrier is monitored at every lattice date, maturity included. Once
//! the underlying breaches the barrier the contract is extinguished and is
//! worth zero from then on.

use crate::payoff::OptionType;
use lt_core::{ensure, Error, Price, Real, Result};
use std::fmt;
use std::str::FromStr;

/// Barrier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierType {
    /// Up-and-out: knocked out when the price reaches or exceeds the barrier.
    UpAndOut,
    /// Down-and-out: knocked out when the price reaches or falls below the
    /// barrier.
    DownAndOut,
}

impl BarrierType {
    /// Whether `price` breaches `barrier` (inclusive on the barrier itself).
    #[inline]
    pub fn is_knocked_out(self, price: Price, barrier: Price) -> bool {
        match self {
            BarrierType::UpAndOut => price >= barrier,
            BarrierType::DownAndOut => price <= barrier,
        }
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierType::UpAndOut => write!(f, "UpAndOut"),
            BarrierType::DownAndOut => write!(f, "DownAndOut"),
        }
    }
}

impl FromStr for BarrierType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "u" | "uo" | "up" | "upandout" | "upout" => Ok(BarrierType::UpAndOut),
            "d" | "do" | "down" | "downandout" | "downout" => Ok(BarrierType::DownAndOut),
            _ => Err(Error::Unsupported(format!("barrier type '{}'", s.trim()))),
        }
    }
}

/// A European call or put that is extinguished when the underlying breaches
/// a single barrier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierOption {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price, `K`.
    pub strike: Price,
    /// Barrier level, `H`.
    pub barrier: Price,
    /// Barrier type.
    pub barrier_type: BarrierType,
}

impl BarrierOption {
    /// Create a new barrier option.
    pub fn new(
        option_type: OptionType,
        strike: Price,
        barrier: Price,
        barrier_type: BarrierType,
    ) -> Self {
        Self {
            option_type,
            strike,
            barrier,
            barrier_type,
        }
    }

    /// Whether a node at `price` is knocked out.
    #[inline]
    pub fn is_knocked_out(&self, price: Price) -> bool {
        self.barrier_type.is_knocked_out(price, self.barrier)
    }

    /// Payoff at maturity: zero on a knocked-out node, intrinsic otherwise.
    #[inline]
    pub fn value_at(&self, price: Price) -> Real {
        if self.is_knocked_out(price) {
            0.0
        } else {
            self.option_type.intrinsic(price, self.strike)
        }
    }

    /// Check the contract terms.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike K must be positive, got {}",
            self.strike
        );
        ensure!(
            self.barrier.is_finite() && self.barrier > 0.0,
            "barrier H must be positive, got {}",
            self.barrier
        );
        Ok(())
    }
}
