//! Error types for device operations.

use thiserror::Error;

use fw_flow::FlowError;

use crate::hal::PinId;

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors that can occur while configuring or driving a device.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeviceError {
    /// Invalid argument provided when configuring a device.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Failure reported by the pin backend.
    #[error("Hardware failure on pin {pin}: {message}")]
    Hardware { pin: PinId, message: String },
}

impl From<DeviceError> for FlowError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::InvalidArg { what } => Self::InvalidArg { what },
            other => Self::Backend {
                message: other.to_string(),
            },
        }
    }
}
