//! Barrier command implementation.

use anyhow::{Context, Result};
use clap::Args;

use lt_instruments::{BarrierOption, BarrierType, PricingEngine};
use lt_pricingengines::BinomialBarrierEngine;

use crate::cli::OutputFormat;
use crate::commands::{ContractArgs, LatticeArgs};
use crate::output::{print_report, PriceReport};

/// Arguments for the barrier command.
#[derive(Args, Debug)]
pub struct BarrierArgs {
    /// Strike price K
    #[arg(long)]
    pub strike: f64,

    /// Barrier level H
    #[arg(long)]
    pub barrier: f64,

    /// Barrier type: up (u, up-and-out) or down (d, down-and-out)
    #[arg(long, default_value = "up")]
    pub barrier_type: BarrierType,

    #[command(flatten)]
    pub lattice: LatticeArgs,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Execute the barrier command.
pub fn execute(args: BarrierArgs, format: OutputFormat) -> Result<()> {
    let option = BarrierOption::new(
        args.contract.option_type,
        args.strike,
        args.barrier,
        args.barrier_type,
    );
    let params = args.lattice.params();
    let results = BinomialBarrierEngine::new(args.contract.strategy)
        .calculate(&option, &params)
        .with_context(|| format!("failed to price {} barrier option", args.barrier_type))?;
    let report = PriceReport::new("Barrier", &option, args.contract.strategy, results)?;
    print_report(&report, format)
}
