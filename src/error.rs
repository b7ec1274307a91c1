//! Run-level errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by a simulation run.
///
/// `Validation` means the request was rejected before any simulation step.
/// `Internal` means the engine broke one of its own invariants; it is a
/// defect, never a property of the input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid simulation request: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("internal simulation error: {0}")]
    Internal(String),
}

impl SimulationError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Internal(_) => None,
        }
    }

    /// Whether this error reports an engine defect.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
