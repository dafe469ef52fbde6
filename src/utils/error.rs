//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! Resolution and remote-operation variants display their payload bare: the
//! import pipeline surfaces those messages to operators verbatim inside its
//! result object, so no prefix is layered on top.

use specport_gherkin::GherkinError;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Gherkin discovery and parse errors
    #[error("{0}")]
    Gherkin(#[from] GherkinError),

    /// Integration configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Import target could not be resolved from the provided options
    #[error("{0}")]
    TargetResolution(String),

    /// Remote service rejected a create operation
    #[error("{0}")]
    RemoteCreation(String),

    /// Remote service rejected a suite link operation
    #[error("{0}")]
    RemoteLink(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a target resolution error
    pub fn target_resolution(msg: impl Into<String>) -> Self {
        Self::TargetResolution(msg.into())
    }

    /// Create a remote creation error
    pub fn remote_creation(msg: impl Into<String>) -> Self {
        Self::RemoteCreation(msg.into())
    }

    /// Create a remote link error
    pub fn remote_link(msg: impl Into<String>) -> Self {
        Self::RemoteLink(msg.into())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

/// Convert AppError to a string for caller-facing messages
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
