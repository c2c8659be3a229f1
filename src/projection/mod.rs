//! Investment projection engine
//!
//! Four simulators share one growth-series shape:
//! - SIP: fixed monthly contribution, monthly compounding
//! - Lump sum: single principal, annual compounding
//! - Step-up: SIP whose contribution escalates every year
//! - Goal: back-solves the SIP contribution for a target
//!
//! Inflation is layered on top via real-rate substitution or point deflation.

pub mod rates;
mod series;
mod sip;
mod lump_sum;
mod goal;
mod step_up;
mod inflation;
mod engine;

pub use series::{Frequency, GrowthRow, GrowthSeries, SeriesSummary, YearlyRow};
pub use sip::project_sip;
pub use lump_sum::project_lump_sum;
pub use goal::{plan_goal, solve_monthly_contribution, ContributionTiming, GoalResult};
pub use step_up::{compare_step_up, project_step_up, stepped_contribution, StepUpComparisonRow};
pub use inflation::{
    deflate_series, deflation_factor, inflate_target, real_annual_return, real_rate_pct,
    DeflatedRow, InflationAdjustment,
};
pub use engine::{AdjustedView, ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};
