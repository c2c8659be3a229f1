//! Goal back-solver: the monthly contribution needed to reach a target

use super::inflation::inflate_target;
use super::rates::{future_value_factor, future_value_factor_due, monthly_rate, MONTHS_PER_YEAR};
use super::series::GrowthSeries;
use super::sip::project_sip;
use serde::{Deserialize, Serialize};

/// When in each month the contribution is assumed to be paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionTiming {
    /// Paid after the month's growth (ordinary annuity, as in [`project_sip`])
    #[default]
    EndOfPeriod,
    /// Paid before the month's growth (annuity due)
    BeginningOfPeriod,
}

/// Constant monthly contribution that grows to `target` over `years`
///
/// With `m` the compound monthly rate and `n = 12 * years`:
/// - end of period: `target / (((1+m)^n - 1) / m)`
/// - beginning of period: the same divided by `(1 + m)`
///
/// At a zero rate the annuity factor is its limit `n`, giving `target / n`.
pub fn solve_monthly_contribution(
    target: f64,
    annual_rate_pct: f64,
    years: u32,
    timing: ContributionTiming,
) -> f64 {
    let m = monthly_rate(annual_rate_pct);
    let n = years * MONTHS_PER_YEAR;

    let factor = match timing {
        ContributionTiming::EndOfPeriod => future_value_factor(m, n),
        ContributionTiming::BeginningOfPeriod => future_value_factor_due(m, n),
    };

    target / factor
}

/// Result of planning for a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    /// Goal as entered, in present-day currency
    pub target: f64,
    /// Goal in future currency (equal to `target` without inflation)
    pub adjusted_target: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
    pub inflation_pct: Option<f64>,
    pub timing: ContributionTiming,
    /// Required monthly contribution
    pub monthly_contribution: f64,
    /// Contribution times the number of months
    pub total_invested: f64,
    /// Adjusted target minus total invested
    pub wealth_gained: f64,
}

impl GoalResult {
    /// Run the plain SIP simulator with the solved contribution
    pub fn verify(&self) -> GrowthSeries {
        project_sip(self.monthly_contribution, self.annual_rate_pct, self.years)
    }
}

/// Plan for a goal, optionally stated in present-day currency
///
/// With an inflation rate the target is first grown by `(1 + i/100)^years`
/// so the contribution reaches the same purchasing power.
pub fn plan_goal(
    target: f64,
    annual_rate_pct: f64,
    years: u32,
    inflation_pct: Option<f64>,
    timing: ContributionTiming,
) -> GoalResult {
    let adjusted_target = match inflation_pct {
        Some(inflation) => inflate_target(target, inflation, years),
        None => target,
    };

    let monthly_contribution =
        solve_monthly_contribution(adjusted_target, annual_rate_pct, years, timing);
    let total_invested = monthly_contribution * (years * MONTHS_PER_YEAR) as f64;

    GoalResult {
        target,
        adjusted_target,
        annual_rate_pct,
        years,
        inflation_pct,
        timing,
        monthly_contribution,
        total_invested,
        wealth_gained: adjusted_target - total_invested,
    }
}
