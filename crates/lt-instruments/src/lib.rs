//! # lt-instruments
//!
//! Contract definitions for lattice pricing: option/barrier/strike/mean
//! enums, terminal payoffs, the European, barrier and Asian contracts, the
//! shared [`LatticeParameters`] with their validation, and the
//! [`PricingEngine`] trait.
//!
//! Enabling the `serde` feature derives `Serialize` / `Deserialize` for all
//! contract and parameter types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod asian;
pub mod barrier;
pub mod instrument;
pub mod parameters;
pub mod payoff;
pub mod vanilla;

pub use asian::{AsianOption, MeanType, StrikeType};
pub use barrier::{BarrierOption, BarrierType};
pub use instrument::{PricingEngine, PricingResults};
pub use parameters::{LatticeParameters, RiskNeutralMeasure};
pub use payoff::OptionType;
pub use vanilla::EuropeanOption;
