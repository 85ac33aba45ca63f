//! Error types for pipeline operations.

use thiserror::Error;

use fw_core::CoreError;

/// Result type for pipeline operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors that can occur while configuring or pulling a pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlowError {
    /// Invalid argument provided when configuring a unit.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Non-finite number where a finite one is required.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Failure reported by a backing device or external collaborator.
    #[error("Backend failure: {message}")]
    Backend { message: String },
}

impl From<CoreError> for FlowError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArg { what } => Self::InvalidArg { what },
            CoreError::NonFinite { what, value } => Self::NonFinite { what, value },
        }
    }
}
