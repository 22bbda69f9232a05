//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Errors surfaced by the planning pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The event definition failed validation. Holds every violated rule.
    #[error("event definition is invalid ({} problem(s)): {}", .0.len(), join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Error::Validation(errors) => Some(errors),
            Error::Config(_) => None,
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
