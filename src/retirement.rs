//! Retirement corpus estimate
//!
//! Inflates today's monthly expenses to the retirement date and sizes the
//! corpus with the 4% withdrawal rule.

use crate::error::{ProjectionError, Result};
use crate::projection::inflate_target;
use serde::{Deserialize, Serialize};

/// Sustainable annual withdrawal as a fraction of the corpus
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementNeeds {
    /// Monthly expenses in present-day currency
    pub monthly_expenses: f64,
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    /// Annual inflation in percent
    pub inflation_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementEstimate {
    pub years_to_retirement: u32,
    pub retirement_years: u32,
    pub monthly_expenses_at_retirement: f64,
    pub annual_expenses_at_retirement: f64,
    pub corpus: f64,
}

impl RetirementNeeds {
    pub fn validate(&self) -> Result<()> {
        if !self.monthly_expenses.is_finite() || self.monthly_expenses <= 0.0 {
            return Err(ProjectionError::InvalidAmount {
                field: "monthly expenses",
                value: self.monthly_expenses,
            });
        }
        if self.retirement_age < self.current_age {
            return Err(ProjectionError::InvalidAges(format!(
                "retirement age {} is before current age {}",
                self.retirement_age, self.current_age
            )));
        }
        if self.life_expectancy <= self.retirement_age {
            return Err(ProjectionError::InvalidAges(format!(
                "life expectancy {} must be after retirement age {}",
                self.life_expectancy, self.retirement_age
            )));
        }
        if !self.inflation_pct.is_finite() || self.inflation_pct < 0.0 {
            return Err(ProjectionError::InvalidRate {
                field: "inflation rate",
                value: self.inflation_pct,
            });
        }
        Ok(())
    }

    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    pub fn retirement_years(&self) -> u32 {
        self.life_expectancy.saturating_sub(self.retirement_age)
    }

    pub fn estimate(&self) -> RetirementEstimate {
        let years_to_retirement = self.years_to_retirement();
        let monthly = inflate_target(self.monthly_expenses, self.inflation_pct, years_to_retirement);
        let annual = monthly * 12.0;

        RetirementEstimate {
            years_to_retirement,
            retirement_years: self.retirement_years(),
            monthly_expenses_at_retirement: monthly,
            annual_expenses_at_retirement: annual,
            corpus: annual / SAFE_WITHDRAWAL_RATE,
        }
    }
}
