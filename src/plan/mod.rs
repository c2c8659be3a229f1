//! Investment plan inputs and CSV plan loading

mod data;
pub mod loader;

pub use data::{InvestmentParams, InvestmentPlan, Scheme};
pub use loader::{load_plans, load_plans_from_reader};
