//! Error types for plan validation and loading
//!
//! The simulators themselves are infallible; these errors come from the
//! caller-side layers (validation, CSV loading, CLI input).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Invalid {field}: {value} (must be a finite amount greater than zero)")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("Invalid duration: {0} years (must be at least 1)")]
    InvalidDuration(u32),

    #[error("Invalid {field}: {value}%")]
    InvalidRate { field: &'static str, value: f64 },

    #[error("Invalid ages: {0}")]
    InvalidAges(String),

    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("Plan {0} uses the step-up scheme but has no step-up rate")]
    MissingStepUp(u32),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
