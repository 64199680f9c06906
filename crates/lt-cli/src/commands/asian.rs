//! Asian command implementation.
//!
//! Exact path enumeration by default; `--monte-carlo` switches to sampled
//! lattice paths for trees too deep to enumerate.

use anyhow::{Context, Result};
use clap::Args;

use lt_instruments::{AsianOption, MeanType, PricingEngine, StrikeType};
use lt_pricingengines::{BinomialAsianEngine, MonteCarloAsianEngine};

use crate::cli::OutputFormat;
use crate::commands::{ContractArgs, LatticeArgs};
use crate::output::{print_report, PriceReport};

/// Arguments for the asian command.
#[derive(Args, Debug)]
pub struct AsianArgs {
    /// Strike price K (required for fixed strike, ignored for floating)
    #[arg(long)]
    pub strike: Option<f64>,

    /// Strike type: fixed (fi) or floating (fl)
    #[arg(long, default_value = "fixed")]
    pub strike_type: StrikeType,

    /// Mean type: am, gm, hm, qm, max, min
    #[arg(long, default_value = "am")]
    pub mean_type: MeanType,

    /// Estimate by Monte Carlo instead of enumerating every path
    #[arg(long)]
    pub monte_carlo: bool,

    /// Number of Monte Carlo paths
    #[arg(long, default_value_t = MonteCarloAsianEngine::DEFAULT_PATHS)]
    pub paths: usize,

    /// Monte Carlo seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub lattice: LatticeArgs,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Execute the asian command.
pub fn execute(args: AsianArgs, format: OutputFormat) -> Result<()> {
    let option = AsianOption::new(
        args.contract.option_type,
        args.strike.unwrap_or(0.0),
        args.strike_type,
        args.mean_type,
    );
    let params = args.lattice.params();
    let (engine, results) = if args.monte_carlo {
        let engine = MonteCarloAsianEngine::new(args.paths, args.seed);
        ("Asian (Monte Carlo)", engine.calculate(&option, &params))
    } else {
        let engine = BinomialAsianEngine::new(args.contract.strategy);
        ("Asian", engine.calculate(&option, &params))
    };
    let results = results.with_context(|| {
        format!(
            "failed to price {} {} Asian option",
            args.strike_type, args.mean_type
        )
    })?;
    let report = PriceReport::new(engine, &option, args.contract.strategy, results)?;
    print_report(&report, format)
}
