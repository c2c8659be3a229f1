//! Periodic (SIP) investment simulator

use super::rates::{monthly_rate, MONTHS_PER_YEAR};
use super::series::{Frequency, GrowthRow, GrowthSeries};

/// Project a fixed monthly contribution over `years` whole years
///
/// Monthly compounding of the annually quoted rate, contribution made at
/// the end of each month (ordinary annuity): the prior balance grows, then
/// the new contribution is added. Produces `12 * years` rows.
pub fn project_sip(contribution: f64, annual_rate_pct: f64, years: u32) -> GrowthSeries {
    accumulate_monthly(monthly_rate(annual_rate_pct), years, |_| contribution)
}

/// Run the one-step ordinary-annuity recurrence month by month
///
/// `contribution_for` returns the contribution active in a 1-based month.
/// Each row depends only on the previous row and that month's contribution.
pub(crate) fn accumulate_monthly<F>(
    periodic_rate: f64,
    years: u32,
    contribution_for: F,
) -> GrowthSeries
where
    F: Fn(u32) -> f64,
{
    let total_months = years * MONTHS_PER_YEAR;
    let mut series = GrowthSeries::with_capacity(Frequency::Monthly, total_months as usize);

    let mut total_invested = 0.0;
    let mut value = 0.0;

    for month in 1..=total_months {
        let contribution = contribution_for(month);
        total_invested += contribution;
        value = value * (1.0 + periodic_rate) + contribution;

        series.push(GrowthRow {
            period: month,
            contribution,
            total_invested,
            value,
        });
    }

    series
}
