//! Load investment plans from CSV
//!
//! Expected columns: `PlanID,Scheme,Amount,AnnualRate,Years,StepUp,Inflation`.
//! `StepUp` and `Inflation` may be left empty.

use super::{InvestmentParams, InvestmentPlan, Scheme};
use crate::error::Result;
use csv::Reader;
use log::{debug, info};
use std::io::Read;
use std::path::Path;

/// Raw CSV row matching the plan file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "Scheme")]
    scheme: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "StepUp", default)]
    step_up: Option<f64>,
    #[serde(rename = "Inflation", default)]
    inflation: Option<f64>,
}

impl CsvRow {
    fn into_plan(self) -> Result<InvestmentPlan> {
        let scheme: Scheme = self.scheme.parse()?;
        let plan = InvestmentPlan {
            plan_id: self.plan_id,
            scheme,
            params: InvestmentParams {
                amount: self.amount,
                annual_rate_pct: self.annual_rate,
                years: self.years,
                step_up_pct: self.step_up,
                inflation_pct: self.inflation,
            },
        };
        plan.validate()?;
        Ok(plan)
    }
}

/// Load plans from a CSV file
pub fn load_plans(path: &Path) -> Result<Vec<InvestmentPlan>> {
    info!("Loading plans from {}", path.display());
    let reader = Reader::from_path(path)?;
    collect_plans(reader)
}

/// Load plans from any reader (used for in-memory data and tests)
pub fn load_plans_from_reader<R: Read>(rdr: R) -> Result<Vec<InvestmentPlan>> {
    collect_plans(Reader::from_reader(rdr))
}

fn collect_plans<R: Read>(mut reader: Reader<R>) -> Result<Vec<InvestmentPlan>> {
    let mut plans = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let plan = row?.into_plan()?;
        debug!("Loaded plan {} ({})", plan.plan_id, plan.scheme);
        plans.push(plan);
    }
    info!("Loaded {} plans", plans.len());
    Ok(plans)
}
