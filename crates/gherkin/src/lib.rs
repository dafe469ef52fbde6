//! Specport Gherkin
//!
//! Discovery and parsing of Gherkin `.feature` files. This crate is pure
//! local-filesystem logic with no network dependencies, so it can back both
//! the import pipeline and a directory-preview surface:
//!
//! - `scanner` - recursive `.feature` discovery with per-file summaries
//! - `parser` - line-oriented extraction of features, scenarios, and steps
//! - `models` - `GherkinSummary`, `FeatureDocument`, `Scenario`, `Step`
//! - `error` - `GherkinError`, `GherkinResult`
//!
//! The parser is intentionally a subset of the Gherkin grammar: scenario
//! outlines, backgrounds, doc strings, and data tables are not modeled.

pub mod error;
pub mod models;
pub mod parser;
pub mod scanner;

// Re-export error types
pub use error::{GherkinError, GherkinResult};

// Re-export models
pub use models::{FeatureDocument, GherkinSummary, Scenario, Step, StepKeyword};

// Re-export entry points
pub use parser::{parse_file, parse_source, UNKNOWN_FEATURE};
pub use scanner::scan_directory;
