//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AsianArgs, BarrierArgs, EuropeanArgs, ExamplesArgs};

/// Lattice - Cox-Ross-Rubinstein binomial option pricing
#[derive(Parser)]
#[command(name = "lattice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", env = "LATTICE_FORMAT", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a European call or put
    European(EuropeanArgs),

    /// Price a single-barrier knock-out option
    Barrier(BarrierArgs),

    /// Price an Asian option on the running mean of the underlying
    Asian(AsianArgs),

    /// Price the documented reference examples with both strategies
    Examples(ExamplesArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value lines
    #[default]
    Text,
    /// JSON format
    Json,
}
