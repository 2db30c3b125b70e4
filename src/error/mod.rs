//! Error types for Vellum.

use thiserror::Error;

/// Primary error type for all Vellum operations.
#[derive(Error, Debug)]
pub enum VellumError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl VellumError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error came from the network/backend boundary.
    ///
    /// Transport failures are recovered at the editor controller: they become
    /// a user-visible failure turn in the conversation log, never a crash.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Network(_) | Self::Authentication(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VellumError>;
