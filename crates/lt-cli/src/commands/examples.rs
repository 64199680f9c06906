//! Examples command implementation.
//!
//! Prices a fixed set of reference contracts with every strategy so the
//! two kernels can be compared side by side.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use lt_instruments::{
    AsianOption, BarrierOption, BarrierType, EuropeanOption, LatticeParameters, MeanType,
    OptionType, StrikeType,
};
use lt_pricingengines::{asian_price, barrier_price, european_price, Strategy};

use crate::cli::OutputFormat;

/// Arguments for the examples command.
#[derive(Args, Debug)]
pub struct ExamplesArgs {
    /// Only run one strategy
    #[arg(long)]
    pub strategy: Option<Strategy>,
}

/// One priced example.
#[derive(Debug, Serialize)]
pub struct ExampleRow {
    pub name: String,
    pub strategy: String,
    pub price: f64,
}

/// Reference contracts priced by the examples command.
pub fn rows(strategies: &[Strategy]) -> Result<Vec<ExampleRow>> {
    let european = LatticeParameters::new(100.0, 0.02, 1.1, 0.9, 1.0, 20);
    let barrier = LatticeParameters::new(100.0, 0.06, 1.1, 1.0 / 1.1, 1.0, 3);
    let asian = LatticeParameters::new(100.0, 0.05, 1.1, 1.0 / 1.1, 1.0, 4);

    let mut rows = Vec::new();
    for &strategy in strategies {
        let mut push = |name: String, price: f64| {
            rows.push(ExampleRow {
                name,
                strategy: strategy.to_string(),
                price,
            })
        };
        push(
            "European call K=100, N=20".into(),
            european_price(&EuropeanOption::call(100.0), &european, strategy)?,
        );
        push(
            "European put K=100, N=20".into(),
            european_price(&EuropeanOption::put(100.0), &european, strategy)?,
        );
        let up_and_out = BarrierOption::new(OptionType::Call, 100.0, 125.0, BarrierType::UpAndOut);
        push(
            "Up-and-out call K=100, H=125, N=3".into(),
            barrier_price(&up_and_out, &barrier, strategy)?,
        );
        for mean_type in MeanType::ALL {
            let option = AsianOption::new(OptionType::Call, 100.0, StrikeType::Fixed, mean_type);
            push(
                format!("Asian fixed {mean_type} call K=100, N=4"),
                asian_price(&option, &asian, strategy)
                    .with_context(|| format!("pricing {mean_type} Asian example"))?,
            );
        }
    }
    Ok(rows)
}

/// Execute the examples command.
pub fn execute(args: ExamplesArgs, format: OutputFormat) -> Result<()> {
    let strategies: Vec<Strategy> = match args.strategy {
        Some(s) => vec![s],
        None => Strategy::ALL.to_vec(),
    };
    let rows = rows(&strategies)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            for r in &rows {
                println!("{:<width$}  {:<10}  {:>10.2}", r.name, r.strategy, r.price);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_print_identical_prices() {
        let slow = rows(&[Strategy::Loop]).unwrap();
        let fast = rows(&[Strategy::Vectorized]).unwrap();
        assert_eq!(slow.len(), fast.len());
        for (a, b) in slow.iter().zip(&fast) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.price, b.price, "{}", a.name);
        }
        assert_eq!(slow[0].price, 18.77);
        assert_eq!(slow[2].price, 4.0);
    }
}
