//! Rate conversions and annuity factors
//!
//! Rates enter the engine as annual percentages. Monthly schemes convert them
//! with compound conversion, never by dividing by 12.

/// Number of contribution periods in a year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Rates closer to zero than this take the limiting-case branch
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Effective monthly rate equivalent to an annual rate given in percent
///
/// `(1 + r/100)^(1/12) - 1`. Zero maps to exactly zero.
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    (1.0 + annual_rate_pct / 100.0).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

/// One-year growth multiplier for an annual rate given in percent
pub fn annual_growth_factor(annual_rate_pct: f64) -> f64 {
    1.0 + annual_rate_pct / 100.0
}

/// Future value of `n` unit payments made at period end: `((1+m)^n - 1) / m`
///
/// At `m = 0` the expression is a 0/0 limit; it evaluates to `n`.
pub fn future_value_factor(periodic_rate: f64, n_periods: u32) -> f64 {
    if periodic_rate.abs() < ZERO_RATE_EPSILON {
        return n_periods as f64;
    }

    ((1.0 + periodic_rate).powi(n_periods as i32) - 1.0) / periodic_rate
}

/// Future value factor for payments made at period start (annuity due)
pub fn future_value_factor_due(periodic_rate: f64, n_periods: u32) -> f64 {
    future_value_factor(periodic_rate, n_periods) * (1.0 + periodic_rate)
}
