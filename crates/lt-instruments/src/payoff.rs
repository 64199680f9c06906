//! Option type and terminal payoff.
//!
//! Payoffs describe the value of an option at exercise as a function of the
//! underlying price. They are pure functions of `(price, strike, type)`; the
//! knock-out and averaging rules of the exotic contracts are layered on top
//! in [`crate::barrier`] and [`crate::asian`].

use lt_core::{Error, Price, Real};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// Intrinsic value `max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for
    /// Put.
    #[inline]
    pub fn intrinsic(self, price: Price, strike: Price) -> Real {
        match self {
            OptionType::Call => (price - strike).max(0.0),
            OptionType::Put => (strike - price).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    /// Accepts `C` / `P` and `call` / `put`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            other => Err(Error::Unsupported(format!("option type '{other}'"))),
        }
    }
}
