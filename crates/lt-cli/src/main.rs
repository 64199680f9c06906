//! Lattice CLI - binomial option pricing from the command line.
//!
//! # Usage
//!
//! ```bash
//! # European call on a 20-step lattice
//! lattice european --spot 100 --strike 100 --rate 0.02 --up 1.1 --down 0.9 \
//!     --maturity 1 --steps 20 --option-type call
//!
//! # Up-and-out barrier call, whole-level kernel
//! lattice barrier --spot 100 --strike 100 --barrier 125 --rate 0.06 --up 1.1 \
//!     --down 0.9090909 --maturity 1 --steps 3 --barrier-type up --strategy fast
//!
//! # Floating-strike geometric Asian put, JSON output
//! lattice --format json asian --spot 100 --rate 0.05 --up 1.1 --down 0.9090909 \
//!     --maturity 1 --steps 10 --option-type put --strike-type floating --mean-type gm
//!
//! # Documented examples
//! lattice examples
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;
    tracing::debug!(?format, "lattice cli starting");

    match cli.command {
        Commands::European(args) => commands::european::execute(args, format)?,
        Commands::Barrier(args) => commands::barrier::execute(args, format)?,
        Commands::Asian(args) => commands::asian::execute(args, format)?,
        Commands::Examples(args) => commands::examples::execute(args, format)?,
    }

    Ok(())
}
