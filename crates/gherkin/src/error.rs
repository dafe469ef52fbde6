//! Gherkin Error Types
//!
//! Errors raised while discovering and parsing `.feature` files. Both
//! variants carry a pre-formatted message: discovery failures describe the
//! scan root, parse failures the offending file. Callers that treat a parse
//! failure as non-fatal (the import pipeline skips the file) log the display
//! string as-is.

use thiserror::Error;

/// Error type for Gherkin discovery and parsing.
#[derive(Error, Debug)]
pub enum GherkinError {
    /// The scan root is missing, not a directory, or unreadable
    #[error("Failed to scan directory: {0}")]
    Discovery(String),

    /// A feature file could not be read for parsing
    #[error("Failed to parse file: {0}")]
    Parse(String),
}

/// Result type alias for Gherkin errors
pub type GherkinResult<T> = Result<T, GherkinError>;

impl GherkinError {
    /// Create a discovery error
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Convert GherkinError to a string
impl From<GherkinError> for String {
    fn from(err: GherkinError) -> String {
        err.to_string()
    }
}
