//! European command implementation.

use anyhow::{Context, Result};
use clap::Args;

use lt_instruments::{EuropeanOption, PricingEngine};
use lt_pricingengines::BinomialEuropeanEngine;

use crate::cli::OutputFormat;
use crate::commands::{ContractArgs, LatticeArgs};
use crate::output::{print_report, PriceReport};

/// Arguments for the european command.
#[derive(Args, Debug)]
pub struct EuropeanArgs {
    /// Strike price K
    #[arg(long)]
    pub strike: f64,

    #[command(flatten)]
    pub lattice: LatticeArgs,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Execute the european command.
pub fn execute(args: EuropeanArgs, format: OutputFormat) -> Result<()> {
    let option = EuropeanOption::new(args.contract.option_type, args.strike);
    let params = args.lattice.params();
    let results = BinomialEuropeanEngine::new(args.contract.strategy)
        .calculate(&option, &params)
        .context("failed to price European option")?;
    let report = PriceReport::new("European", &option, args.contract.strategy, results)?;
    print_report(&report, format)
}
