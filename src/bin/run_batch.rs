//! Run projections for every plan in a CSV file
//!
//! Usage: run_batch <plans.csv> [output.csv]
//! Writes one summary row per plan (default output: batch_output.csv).

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use wealth_projection::plan::load_plans;
use wealth_projection::{ProjectionResult, ScenarioRunner};

/// Flat output row, one per plan
#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "Scheme")]
    scheme: String,
    #[serde(rename = "Periods")]
    periods: u32,
    #[serde(rename = "TotalInvested")]
    total_invested: f64,
    #[serde(rename = "FinalValue")]
    final_value: f64,
    #[serde(rename = "WealthGained")]
    wealth_gained: f64,
    #[serde(rename = "ReturnsPct")]
    returns_pct: f64,
    #[serde(rename = "PresentDayValue")]
    present_day_value: Option<f64>,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: Option<f64>,
    #[serde(rename = "RealReturn")]
    real_return: Option<f64>,
}

impl From<&ProjectionResult> for SummaryRow {
    fn from(result: &ProjectionResult) -> Self {
        let summary = result.summary();
        Self {
            plan_id: summary.plan_id,
            scheme: summary.scheme.to_string(),
            periods: summary.series.periods,
            total_invested: summary.series.total_invested,
            final_value: summary.series.final_value,
            wealth_gained: summary.series.wealth_gained,
            returns_pct: summary.series.returns_pct,
            present_day_value: summary.adjusted_final_value,
            monthly_contribution: summary.monthly_contribution,
            real_return: summary.real_return,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .context("Usage: run_batch <plans.csv> [output.csv]")?;
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("batch_output.csv"));

    let start = Instant::now();
    let plans = load_plans(&input)
        .with_context(|| format!("Failed to load plans from {}", input.display()))?;
    println!("Loaded {} plans in {:?}", plans.len(), start.elapsed());

    let proj_start = Instant::now();
    let results = ScenarioRunner::default().run_batch(&plans);
    println!("Projected {} plans in {:?}", results.len(), proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    for result in &results {
        writer.serialize(SummaryRow::from(result))?;
    }
    writer.flush()?;

    info!("Batch summary written to {}", output.display());
    println!("Results written to: {}", output.display());
    Ok(())
}
