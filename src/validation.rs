//! Input validation for process sets.
//!
//! Checks the preconditions every algorithm relies on before any clock
//! moves. Detects:
//! - Non-positive burst times (would never finish)
//! - Negative arrival times
//! - Queue levels outside 1..=3
//!
//! Duplicate IDs are allowed: identifiers are opaque to the engine.

use crate::models::{Process, MAX_QUEUE_LEVEL, MIN_QUEUE_LEVEL};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is before tick 0.
    NegativeArrival,
    /// Queue level is not 1, 2 or 3.
    InvalidQueueLevel,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if !(MIN_QUEUE_LEVEL..=MAX_QUEUE_LEVEL).contains(&p.queue) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQueueLevel,
                format!("Process '{}' has invalid queue level {}", p.id, p.queue),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
