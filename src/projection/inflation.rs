//! Inflation and real-return adjustment
//!
//! Two related but distinct conventions are supported:
//! - **Real rate**: rerun a simulator with the inflation-net rate in place of
//!   the nominal one.
//! - **Point deflation**: divide each nominal value by the cumulative
//!   inflation up to that period.
//!
//! They agree for lump sums but not for monthly schemes, where the real-rate
//! run treats every contribution as fixed in present-day terms. The caller
//! picks one explicitly.

use super::rates::MONTHS_PER_YEAR;
use super::series::{Frequency, GrowthSeries};
use serde::{Deserialize, Serialize};

/// Which inflation convention an adjusted projection uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InflationAdjustment {
    /// Rerun the projection at the real rate of return
    RealRate,
    /// Deflate each nominal value to present-day currency
    #[default]
    PointDeflation,
}

/// Real annual return as a decimal: `(1 + r/100) / (1 + i/100) - 1`
pub fn real_annual_return(nominal_rate_pct: f64, inflation_pct: f64) -> f64 {
    (1.0 + nominal_rate_pct / 100.0) / (1.0 + inflation_pct / 100.0) - 1.0
}

/// Real annual return in percent, ready to substitute for a nominal rate
pub fn real_rate_pct(nominal_rate_pct: f64, inflation_pct: f64) -> f64 {
    real_annual_return(nominal_rate_pct, inflation_pct) * 100.0
}

/// Cumulative price level at a period of a series
///
/// `(1 + i/100)^(k/12)` for monthly periods, `(1 + i/100)^k` for annual ones.
pub fn deflation_factor(inflation_pct: f64, period: u32, frequency: Frequency) -> f64 {
    let base = 1.0 + inflation_pct / 100.0;
    match frequency {
        Frequency::Monthly => base.powf(period as f64 / MONTHS_PER_YEAR as f64),
        Frequency::Annual => base.powi(period as i32),
    }
}

/// Future-currency equivalent of a present-day amount after `years`
pub fn inflate_target(target: f64, inflation_pct: f64, years: u32) -> f64 {
    target * (1.0 + inflation_pct / 100.0).powi(years as i32)
}

/// A nominal value alongside its present-day equivalent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflatedRow {
    pub period: u32,
    pub nominal_value: f64,
    pub real_value: f64,
}

/// Express every value of a series in present-day currency
pub fn deflate_series(series: &GrowthSeries, inflation_pct: f64) -> Vec<DeflatedRow> {
    series
        .rows
        .iter()
        .map(|row| DeflatedRow {
            period: row.period,
            nominal_value: row.value,
            real_value: row.value / deflation_factor(inflation_pct, row.period, series.frequency),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project_lump_sum, project_sip};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_real_return() {
        assert_abs_diff_eq!(real_annual_return(12.0, 6.0), 0.0566, epsilon = 1e-4);
        assert_abs_diff_eq!(real_rate_pct(12.0, 6.0), 5.660377, epsilon = 1e-6);
        assert_relative_eq!(real_annual_return(8.0, 0.0), 0.08, max_relative = 1e-12);
    }

    #[test]
    fn test_real_return_can_be_negative() {
        assert!(real_annual_return(3.0, 6.0) < 0.0);
    }

    #[test]
    fn test_deflation_factor() {
        assert_eq!(deflation_factor(6.0, 0, Frequency::Annual), 1.0);
        assert_relative_eq!(deflation_factor(6.0, 12, Frequency::Monthly), 1.06, max_relative = 1e-12);
        assert_relative_eq!(deflation_factor(6.0, 2, Frequency::Annual), 1.1236, max_relative = 1e-12);
    }

    #[test]
    fn test_deflate_lump_sum_equals_real_rate_run() {
        // For annual compounding both conventions agree exactly
        let nominal = project_lump_sum(100_000.0, 10.0, 5);
        let deflated = deflate_series(&nominal, 4.0);
        let real = project_lump_sum(100_000.0, real_rate_pct(10.0, 4.0), 5);

        assert_eq!(deflated.len(), 6);
        for (d, r) in deflated.iter().zip(real.rows.iter()) {
            assert_relative_eq!(d.real_value, r.value, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_deflate_sip_differs_from_real_rate_run() {
        let nominal = project_sip(1000.0, 12.0, 10);
        let deflated = deflate_series(&nominal, 6.0);
        let real = project_sip(1000.0, real_rate_pct(12.0, 6.0), 10);

        let last = deflated.last().unwrap();
        assert_eq!(last.nominal_value, nominal.final_value());
        assert!(last.real_value < last.nominal_value);
        assert!((last.real_value - real.final_value()).abs() > 1.0);
    }

    #[test]
    fn test_inflate_target() {
        assert_relative_eq!(inflate_target(1_000_000.0, 6.0, 2), 1_123_600.0, max_relative = 1e-12);
        assert_eq!(inflate_target(500.0, 0.0, 20), 500.0);
    }
}
