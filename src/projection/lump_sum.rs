//! Lump-sum growth simulator

use super::rates::annual_growth_factor;
use super::series::{Frequency, GrowthRow, GrowthSeries};

/// Project a single upfront investment with annual compounding
///
/// Produces `years + 1` rows: year 0 holds the principal itself, year `k`
/// holds `principal * (1 + r/100)^k`. No monthly resolution since there are
/// no contribution events after the start.
pub fn project_lump_sum(principal: f64, annual_rate_pct: f64, years: u32) -> GrowthSeries {
    let growth = annual_growth_factor(annual_rate_pct);
    let mut series = GrowthSeries::with_capacity(Frequency::Annual, years as usize + 1);

    for year in 0..=years {
        series.push(GrowthRow {
            period: year,
            contribution: if year == 0 { principal } else { 0.0 },
            total_invested: principal,
            value: principal * growth.powi(year as i32),
        });
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lump_sum_five_years_at_ten_percent() {
        let series = project_lump_sum(100_000.0, 10.0, 5);
        assert_eq!(series.len(), 6);
        assert_eq!(series.frequency, Frequency::Annual);
        assert_eq!(series.rows[0].period, 0);
        assert_eq!(series.rows[0].value, 100_000.0);
        assert_relative_eq!(series.final_value(), 161_051.0, max_relative = 1e-9);
    }

    #[test]
    fn test_lump_sum_zero_rate_keeps_principal() {
        let series = project_lump_sum(25_000.0, 0.0, 10);
        assert!(series.rows.iter().all(|r| r.value == 25_000.0));
        assert!(series.rows.iter().all(|r| r.total_invested == 25_000.0));
    }

    #[test]
    fn test_lump_sum_contribution_only_at_start() {
        let series = project_lump_sum(1000.0, 7.0, 3);
        assert_eq!(series.rows[0].contribution, 1000.0);
        assert!(series.rows[1..].iter().all(|r| r.contribution == 0.0));
    }
}
