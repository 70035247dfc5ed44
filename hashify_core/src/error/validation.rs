//! Validation related error types

use thiserror::Error;

/// Validation and configuration errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Algorithm selector outside the supported set
    #[error("Unknown hash algorithm '{value}': expected one of md5, sha256, sha512")]
    UnknownAlgorithm { value: String },

    /// Salt position selector outside the supported set
    #[error("Unknown salt position '{value}': expected prefix or postfix")]
    UnknownSaltPosition { value: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Invalid input parameter
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    /// Create an unknown algorithm error
    pub fn unknown_algorithm(value: &str) -> Self {
        Self::UnknownAlgorithm {
            value: value.to_string(),
        }
    }

    /// Create an unknown salt position error
    pub fn unknown_salt_position(value: &str) -> Self {
        Self::UnknownSaltPosition {
            value: value.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}
