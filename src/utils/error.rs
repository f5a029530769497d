//! Error Handling Module
//!
//! Defines the error taxonomy for the inference service.
//! Uses thiserror for ergonomic error definitions.
//!
//! The variants fall into four groups:
//! - `Config`: startup-time artifact problems (model/catalog missing or
//!   corrupt). These put the service into degraded mode, never a crash.
//! - `UnsupportedMediaType` / `ImageDecode`: client input problems.
//! - `ModelUnavailable`: prediction attempted while degraded, so the caller
//!   can tell "your input is bad" apart from "the service is degraded".
//! - `Internal`: unexpected scoring/lookup failures.

use thiserror::Error;

/// Main error type for inference service operations
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Startup configuration error (missing/corrupt model or catalog)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upload did not advertise an image content type
    #[error("Unsupported content type '{0}': expected an image upload")]
    UnsupportedMediaType(String),

    /// Uploaded bytes could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    /// Classifier failed to load at startup; service is degraded
    #[error("Classifier model is not loaded; service is running degraded")]
    ModelUnavailable,

    /// Unexpected failure during scoring or lookup
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InferenceError {
    /// Whether this error is attributable to the client's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InferenceError::UnsupportedMediaType(_) | InferenceError::ImageDecode(_)
        )
    }
}

/// Convenience Result type for inference service operations
pub type Result<T> = std::result::Result<T, InferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InferenceError::Config("model not found".to_string());
        assert_eq!(format!("{}", err), "Configuration error: model not found");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(InferenceError::ImageDecode("bad magic".to_string()).is_client_error());
        assert!(InferenceError::UnsupportedMediaType("text/plain".to_string()).is_client_error());
        assert!(!InferenceError::ModelUnavailable.is_client_error());
        assert!(!InferenceError::Internal("oops".to_string()).is_client_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: InferenceError = io_err.into();
        assert!(format!("{}", err).contains("gone"));
    }
}
