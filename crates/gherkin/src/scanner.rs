//! Gherkin Scanner
//!
//! Recursively discovers `.feature` files under a root directory and builds
//! per-file summaries without running the full parser. The scenario count is
//! a cheap substring count (headings plus outlines); the parser is the
//! authority on what actually imports.

use std::fs;
use std::path::Path;

use crate::error::{GherkinError, GherkinResult};
use crate::models::GherkinSummary;
use crate::parser::extract_feature_name;

/// Glob pattern appended to the scan root
const FEATURE_PATTERN: &str = "**/*.feature";

/// Scan a directory tree recursively for all `.feature` files.
///
/// Fails when the root is missing or not a directory. Individual files that
/// cannot be read are skipped with a warning so one bad entry never sinks the
/// scan. An empty result is valid; policy on "no files" belongs to callers.
pub fn scan_directory(root: &Path) -> GherkinResult<Vec<GherkinSummary>> {
    if !root.exists() {
        return Err(GherkinError::discovery(format!(
            "Directory not found: {}",
            root.display()
        )));
    }

    if !root.is_dir() {
        return Err(GherkinError::discovery(format!(
            "Path is not a directory: {}",
            root.display()
        )));
    }

    let pattern = root.join(FEATURE_PATTERN);
    let entries = glob::glob(&pattern.to_string_lossy())
        .map_err(|e| GherkinError::discovery(format!("Invalid scan pattern: {}", e)))?;

    let mut summaries = Vec::new();
    for path in entries.filter_map(Result::ok) {
        if !path.is_file() {
            continue;
        }
        match summarize_file(&path, root) {
            Some(summary) => summaries.push(summary),
            None => {
                tracing::warn!(path = %path.display(), "Skipping unreadable feature file");
            }
        }
    }

    Ok(summaries)
}

/// Build a summary for one feature file, or None when it cannot be read
fn summarize_file(path: &Path, root: &Path) -> Option<GherkinSummary> {
    let metadata = fs::metadata(path).ok()?;
    let content = fs::read_to_string(path).ok()?;

    let modified_at = metadata
        .modified()
        .ok()
        .map(|time| chrono::DateTime::<chrono::Utc>::from(time).to_rfc3339());

    let relative_path = path
        .strip_prefix(root)
        .ok()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Some(GherkinSummary {
        path: path.to_string_lossy().to_string(),
        relative_path,
        file_name,
        feature_name: extract_feature_name(&content),
        scenario_count: count_scenarios(&content),
        size: metadata.len(),
        modified_at,
    })
}

/// Count scenario headings, outlines included, via substring matches
fn count_scenarios(content: &str) -> usize {
    content.matches("Scenario:").count() + content.matches("Scenario Outline:").count()
}
