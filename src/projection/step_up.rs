//! Step-up (escalating) SIP simulator

use super::rates::{monthly_rate, MONTHS_PER_YEAR};
use super::series::GrowthSeries;
use super::sip::{accumulate_monthly, project_sip};
use serde::{Deserialize, Serialize};

/// Contribution active in a 1-based month under an annual step-up
///
/// Constant within each 12-month block: months 1-12 pay `initial`, months
/// 13-24 pay `initial * (1 + s/100)`, and so on.
pub fn stepped_contribution(initial: f64, step_up_pct: f64, month: u32) -> f64 {
    let year_index = month.saturating_sub(1) / MONTHS_PER_YEAR;
    initial * (1.0 + step_up_pct / 100.0).powi(year_index as i32)
}

/// Project a monthly contribution that steps up at the start of every year
///
/// Same ordinary-annuity recurrence as [`project_sip`], with each month's
/// active contribution recorded on its row. A 0% step-up reproduces the
/// plain SIP series exactly.
pub fn project_step_up(
    initial_contribution: f64,
    step_up_pct: f64,
    annual_rate_pct: f64,
    years: u32,
) -> GrowthSeries {
    accumulate_monthly(monthly_rate(annual_rate_pct), years, |month| {
        stepped_contribution(initial_contribution, step_up_pct, month)
    })
}

/// Year-end comparison of a step-up SIP against a flat SIP of the same start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepUpComparisonRow {
    pub year: u32,
    /// Monthly contribution paid during this year under the step-up plan
    pub monthly_amount: f64,
    pub step_up_invested: f64,
    pub step_up_value: f64,
    pub regular_invested: f64,
    pub regular_value: f64,
    /// Step-up value minus regular value
    pub value_difference: f64,
}

/// Compare a step-up SIP with a regular SIP at the same initial amount
pub fn compare_step_up(
    initial_contribution: f64,
    step_up_pct: f64,
    annual_rate_pct: f64,
    years: u32,
) -> Vec<StepUpComparisonRow> {
    let stepped = project_step_up(initial_contribution, step_up_pct, annual_rate_pct, years);
    let regular = project_sip(initial_contribution, annual_rate_pct, years);

    stepped
        .rows
        .iter()
        .zip(regular.rows.iter())
        .filter(|(s, _)| s.period % MONTHS_PER_YEAR == 0)
        .map(|(s, r)| StepUpComparisonRow {
            year: s.period / MONTHS_PER_YEAR,
            monthly_amount: s.contribution,
            step_up_invested: s.total_invested,
            step_up_value: s.value,
            regular_invested: r.total_invested,
            regular_value: r.value,
            value_difference: s.value - r.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_boundaries() {
        assert_eq!(stepped_contribution(1000.0, 10.0, 1), 1000.0);
        assert_eq!(stepped_contribution(1000.0, 10.0, 12), 1000.0);
        assert_relative_eq!(stepped_contribution(1000.0, 10.0, 13), 1100.0, max_relative = 1e-12);
        assert_relative_eq!(stepped_contribution(1000.0, 10.0, 24), 1100.0, max_relative = 1e-12);
        assert_relative_eq!(stepped_contribution(1000.0, 10.0, 25), 1210.0, max_relative = 1e-12);
    }

    #[test]
    fn test_step_up_records_active_contribution() {
        let series = project_step_up(1000.0, 10.0, 12.0, 3);
        assert_eq!(series.len(), 36);
        assert_eq!(series.rows[11].contribution, 1000.0);
        assert_relative_eq!(series.rows[12].contribution, 1100.0, max_relative = 1e-12);
        assert_relative_eq!(series.rows[35].contribution, 1210.0, max_relative = 1e-12);
        // 12 * (1000 + 1100 + 1210)
        assert_relative_eq!(series.total_invested(), 39_720.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_step_up_matches_sip() {
        let stepped = project_step_up(2500.0, 0.0, 11.0, 4);
        let regular = project_sip(2500.0, 11.0, 4);
        assert_eq!(stepped, regular);
    }

    #[test]
    fn test_comparison_rows() {
        let rows = compare_step_up(1000.0, 10.0, 12.0, 5);
        assert_eq!(rows.len(), 5);

        // Identical in year 1, step-up pulls ahead afterwards
        assert_eq!(rows[0].value_difference, 0.0);
        assert_eq!(rows[0].monthly_amount, 1000.0);
        for row in &rows[1..] {
            assert!(row.value_difference > 0.0);
            assert!(row.step_up_invested > row.regular_invested);
        }
        assert_relative_eq!(rows[4].regular_invested, 60_000.0, max_relative = 1e-12);
    }
}
