//! Output formatting utilities.

use anyhow::Result;
use serde::Serialize;

use lt_instruments::PricingResults;
use lt_pricingengines::Strategy;

use crate::cli::OutputFormat;

/// A priced contract, ready to print.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub engine: String,
    pub strategy: String,
    pub contract: serde_json::Value,
    #[serde(flatten)]
    pub results: PricingResults,
}

impl PriceReport {
    /// Build a report for `contract` priced by `engine`.
    pub fn new<C: Serialize>(
        engine: &str,
        contract: &C,
        strategy: Strategy,
        results: PricingResults,
    ) -> Result<Self> {
        Ok(Self {
            engine: engine.to_string(),
            strategy: strategy.to_string(),
            contract: serde_json::to_value(contract)?,
            results,
        })
    }
}

/// Prints a report in the requested format.
pub fn print_report(report: &PriceReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            for (key, value) in text_lines(report) {
                println!("{key:<16} {value}");
            }
        }
    }
    Ok(())
}

fn text_lines(report: &PriceReport) -> Vec<(String, String)> {
    let mut lines = vec![
        ("Engine".to_string(), report.engine.clone()),
        ("Strategy".to_string(), report.strategy.clone()),
    ];
    if let serde_json::Value::Object(fields) = &report.contract {
        for (key, value) in fields {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            lines.push((key.clone(), value));
        }
    }
    lines.push(("Price".to_string(), format!("{:.2}", report.results.npv)));
    lines.push(("Unrounded".to_string(), format!("{:.10}", report.results.unrounded_npv)));
    if let Some(se) = report.results.error_estimate {
        lines.push(("Std. error".to_string(), format!("{se:.6}")));
    }
    for (key, value) in &report.results.additional_results {
        lines.push((key.clone(), format!("{value:.6}")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use lt_instruments::EuropeanOption;

    #[test]
    fn text_report_lists_contract_and_price() {
        let results = PricingResults::new(18.77, 18.768_669).with_result("q", 0.505);
        let option = EuropeanOption::call(100.0);
        let report = PriceReport::new("European", &option, Strategy::Loop, results).unwrap();
        let lines = text_lines(&report);
        assert!(lines.contains(&("option_type".to_string(), "Call".to_string())));
        assert!(lines.contains(&("Price".to_string(), "18.77".to_string())));
        assert!(lines.contains(&("q".to_string(), "0.505000".to_string())));
    }

    #[test]
    fn json_report_flattens_results() {
        let report = PriceReport::new(
            "European",
            &EuropeanOption::put(100.0),
            Strategy::Vectorized,
            PricingResults::new(16.79, 16.789_516),
        )
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["npv"], 16.79);
        assert_eq!(json["strategy"], "vectorized");
        assert_eq!(json["contract"]["strike"], 100.0);
    }
}
