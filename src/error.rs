//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Ticks;
use crate::validation::ValidationError;

/// Errors surfaced by the engine, the collaborators and the driver.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// One or more process records violate the engine's preconditions.
    #[error("invalid process input: {}", summarize(.0))]
    InvalidProcess(Vec<ValidationError>),

    /// Round-Robin quantum must be strictly positive.
    #[error("quantum must be positive, got {0}")]
    InvalidQuantum(Ticks),

    /// A line of the process file could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The configuration could not be read or understood.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl SchedulerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, SchedulerError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
