//! Wealth Projection - deterministic investment projection engine
//!
//! This library provides:
//! - SIP (monthly contribution) and lump-sum growth projections
//! - Goal back-solving for the required monthly contribution
//! - Step-up SIP projections with annual escalation
//! - Inflation adjustment via real rates or point deflation
//! - Retirement corpus estimates and batch scenario runs

pub mod error;
pub mod plan;
pub mod projection;
pub mod retirement;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use plan::{InvestmentParams, InvestmentPlan, Scheme};
pub use projection::{GrowthRow, GrowthSeries, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use retirement::{RetirementEstimate, RetirementNeeds};
pub use scenario::ScenarioRunner;
