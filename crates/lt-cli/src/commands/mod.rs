//! CLI command implementations.

pub mod asian;
pub mod barrier;
pub mod european;
pub mod examples;

pub use asian::AsianArgs;
pub use barrier::BarrierArgs;
pub use european::EuropeanArgs;
pub use examples::ExamplesArgs;

use clap::Args;
use lt_instruments::{LatticeParameters, OptionType};
use lt_pricingengines::Strategy;

/// Lattice inputs shared by every pricing command.
#[derive(Args, Debug, Clone)]
pub struct LatticeArgs {
    /// Initial asset price S0
    #[arg(long)]
    pub spot: f64,

    /// Risk-free rate per unit of time (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: f64,

    /// Up-move factor u
    #[arg(long)]
    pub up: f64,

    /// Down-move factor d
    #[arg(long)]
    pub down: f64,

    /// Maturity horizon T
    #[arg(long)]
    pub maturity: f64,

    /// Number of time steps N
    #[arg(long)]
    pub steps: usize,
}

impl LatticeArgs {
    /// Model parameters described by the flags.
    pub fn params(&self) -> LatticeParameters {
        LatticeParameters::new(self.spot, self.rate, self.up, self.down, self.maturity, self.steps)
    }
}

/// Option side and evaluation strategy.
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Option type: call (c) or put (p)
    #[arg(long, default_value = "call")]
    pub option_type: OptionType,

    /// Evaluation strategy: loop (slow) or vectorized (fast)
    #[arg(long, default_value = "vectorized", env = "LATTICE_STRATEGY")]
    pub strategy: Strategy,
}
