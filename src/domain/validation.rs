//! Validation errors for profile and intake input

/// Rejected user input. Invalid state is never persisted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Weight must be greater than zero (got {0})")]
    NonPositiveWeight(f64),

    #[error("Sleep duration must be between {min} and {max} hours (got {hours:.1})")]
    SleepDurationOutOfRange { hours: f64, min: f64, max: f64 },

    #[error("Intake amount must be greater than zero (got {0})")]
    NonPositiveAmount(f64),

    #[error("Invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Unknown unit '{0}', expected kg or lbs")]
    UnknownUnit(String),
}
