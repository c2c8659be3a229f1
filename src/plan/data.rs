//! Investment plan data structures

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Projection scheme a plan runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Fixed monthly contribution
    Sip,
    /// Single upfront investment
    LumpSum,
    /// Back-solve the monthly contribution for a target
    Goal,
    /// Monthly contribution escalating every year
    StepUp,
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::LumpSum => "lumpsum",
            Scheme::Goal => "goal",
            Scheme::StepUp => "stepup",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sip" => Ok(Scheme::Sip),
            "lumpsum" | "lump_sum" | "lump-sum" => Ok(Scheme::LumpSum),
            "goal" => Ok(Scheme::Goal),
            "stepup" | "step_up" | "step-up" => Ok(Scheme::StepUp),
            other => Err(ProjectionError::UnknownScheme(other.to_string())),
        }
    }
}

/// Scalar inputs for one projection
///
/// `amount` is the monthly contribution (SIP, step-up), the principal
/// (lump sum) or the target (goal). Rates are in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParams {
    pub amount: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
    pub step_up_pct: Option<f64>,
    pub inflation_pct: Option<f64>,
}

impl InvestmentParams {
    pub fn new(amount: f64, annual_rate_pct: f64, years: u32) -> Self {
        Self {
            amount,
            annual_rate_pct,
            years,
            step_up_pct: None,
            inflation_pct: None,
        }
    }

    pub fn with_step_up(mut self, step_up_pct: f64) -> Self {
        self.step_up_pct = Some(step_up_pct);
        self
    }

    pub fn with_inflation(mut self, inflation_pct: f64) -> Self {
        self.inflation_pct = Some(inflation_pct);
        self
    }

    /// Caller-side input validation.
    ///
    /// The simulators assume pre-validated inputs and never call this.
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ProjectionError::InvalidAmount {
                field: "amount",
                value: self.amount,
            });
        }
        if self.years < 1 {
            return Err(ProjectionError::InvalidDuration(self.years));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct <= -100.0 {
            return Err(ProjectionError::InvalidRate {
                field: "annual rate",
                value: self.annual_rate_pct,
            });
        }
        check_non_negative("step-up rate", self.step_up_pct)?;
        check_non_negative("inflation rate", self.inflation_pct)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, rate: Option<f64>) -> Result<()> {
    match rate {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(ProjectionError::InvalidRate { field, value })
        }
        _ => Ok(()),
    }
}

/// A plan is the unit of batch work: an identifier, a scheme and its inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    pub plan_id: u32,
    pub scheme: Scheme,
    pub params: InvestmentParams,
}

impl InvestmentPlan {
    pub fn new(plan_id: u32, scheme: Scheme, params: InvestmentParams) -> Self {
        Self {
            plan_id,
            scheme,
            params,
        }
    }

    /// Validate the parameters plus scheme-specific requirements
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        if self.scheme == Scheme::StepUp && self.params.step_up_pct.is_none() {
            return Err(ProjectionError::MissingStepUp(self.plan_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("SIP".parse::<Scheme>().unwrap(), Scheme::Sip);
        assert_eq!("lump_sum".parse::<Scheme>().unwrap(), Scheme::LumpSum);
        assert_eq!(" Step-Up ".parse::<Scheme>().unwrap(), Scheme::StepUp);
        assert!(matches!(
            "annuity".parse::<Scheme>(),
            Err(ProjectionError::UnknownScheme(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        assert!(InvestmentParams::new(1000.0, 12.0, 10).validate().is_ok());
        assert!(InvestmentParams::new(0.0, 12.0, 10).validate().is_err());
        assert!(InvestmentParams::new(-5.0, 12.0, 10).validate().is_err());
        assert!(InvestmentParams::new(1000.0, 12.0, 0).validate().is_err());
        assert!(InvestmentParams::new(f64::NAN, 12.0, 10).validate().is_err());
        assert!(InvestmentParams::new(1000.0, 12.0, 10)
            .with_inflation(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_rate_is_valid() {
        assert!(InvestmentParams::new(1000.0, 0.0, 1).validate().is_ok());
    }

    #[test]
    fn test_step_up_plan_requires_rate() {
        let plan = InvestmentPlan::new(7, Scheme::StepUp, InvestmentParams::new(500.0, 10.0, 5));
        assert!(matches!(plan.validate(), Err(ProjectionError::MissingStepUp(7))));

        let plan = InvestmentPlan::new(
            7,
            Scheme::StepUp,
            InvestmentParams::new(500.0, 10.0, 5).with_step_up(10.0),
        );
        assert!(plan.validate().is_ok());
    }
}
