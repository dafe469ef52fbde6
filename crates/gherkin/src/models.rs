//! Gherkin Models
//!
//! Data structures produced by the scanner and parser. Summaries are the
//! lightweight per-file rows a directory scan yields; documents are the full
//! parse of a single feature file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Keyword that introduces a Gherkin step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKeyword {
    Given,
    When,
    Then,
    And,
    But,
}

impl StepKeyword {
    /// Canonical keyword text as written in a feature file
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKeyword::Given => "Given",
            StepKeyword::When => "When",
            StepKeyword::Then => "Then",
            StepKeyword::And => "And",
            StepKeyword::But => "But",
        }
    }

    /// Parse a keyword token (exact match, case-sensitive like the grammar)
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "Given" => Some(StepKeyword::Given),
            "When" => Some(StepKeyword::When),
            "Then" => Some(StepKeyword::Then),
            "And" => Some(StepKeyword::And),
            "But" => Some(StepKeyword::But),
            _ => None,
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step within a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Leading keyword (Given/When/Then/And/But)
    pub keyword: StepKeyword,
    /// Step text with the keyword and surrounding whitespace removed
    pub text: String,
}

impl Step {
    /// Create a step from a keyword and trimmed text
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
        }
    }

    /// Render the step as the original action line, e.g. `Given I am logged in`
    pub fn action_text(&self) -> String {
        format!("{} {}", self.keyword, self.text)
    }
}

/// A scenario with its steps in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name from the heading line
    pub name: String,
    /// Tags attached to the scenario (`@`-prefixed, best-effort)
    pub tags: Vec<String>,
    /// Steps in the order they appear in the file
    pub steps: Vec<Step>,
}

/// Full parse of one feature file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDocument {
    /// Feature name, or `Unknown Feature` when no `Feature:` line exists
    pub name: String,
    /// Free text between the feature line and the first tag or scenario
    pub description: String,
    /// Tags attached to the feature (`@`-prefixed, best-effort)
    pub tags: Vec<String>,
    /// Scenarios in the order they appear in the file
    pub scenarios: Vec<Scenario>,
}

/// A discovered feature file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GherkinSummary {
    /// Full path to the file
    pub path: String,
    /// Relative path from the scanned root
    pub relative_path: String,
    /// File name including the extension
    pub file_name: String,
    /// Feature name from the first `Feature:` line, or `Unknown Feature`
    pub feature_name: String,
    /// Count of `Scenario:` plus `Scenario Outline:` occurrences
    pub scenario_count: usize,
    /// File size in bytes
    pub size: u64,
    /// Last modification timestamp (ISO 8601)
    pub modified_at: Option<String>,
}
