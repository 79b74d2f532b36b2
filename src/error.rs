// src/error.rs
//! Error types for the Canvas client.
//!
//! The taxonomy is deliberately small. A Canvas 4xx response is *not* in
//! here: client errors are decoded and handed back as data, and callers
//! tell success from failure by the shape of the body (see
//! [`crate::CanvasClient`]). Only conditions that leave the caller without
//! a body to inspect become a `CanvasError`.

use crate::types::ValidationError;
use thiserror::Error;

/// Main error type for every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Pagination exceeded {limit} follow-up pages (last next link: {url})")]
    PaginationLimitExceeded { limit: usize, url: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CanvasError {
    /// Whether the failure happened below HTTP, before any status was seen.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for CanvasError {
    fn from(err: reqwest::Error) -> Self {
        CanvasError::Transport {
            url: err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".to_string()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CanvasError {
    fn from(err: serde_json::Error) -> Self {
        CanvasError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = CanvasError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_limit_message_names_the_limit() {
        let err = CanvasError::PaginationLimitExceeded {
            limit: 20,
            url: "https://canvas.test/api/v1/courses?page=22".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Pagination exceeded 20 follow-up pages (last next link: https://canvas.test/api/v1/courses?page=22)"
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn json_errors_become_malformed_responses() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CanvasError = json_err.into();
        assert!(matches!(err, CanvasError::MalformedResponse(_)));
    }

    #[test]
    fn validation_errors_are_transparent() {
        let err: CanvasError = ValidationError::EmptyField("api token").into();
        assert_eq!(err.to_string(), "Empty required field: api token");
    }
}
