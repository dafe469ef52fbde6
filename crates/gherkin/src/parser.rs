//! Gherkin Parser
//!
//! Line-oriented extraction of feature documents. This is deliberately not a
//! full Gherkin grammar: it recognizes the feature line, tag lines, scenario
//! headings, and step lines, and treats everything else as inert text.
//! Scenario blocks run from one `Scenario:` heading to the next heading or
//! the end of input; steps keep their source order.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{GherkinError, GherkinResult};
use crate::models::{FeatureDocument, Scenario, Step, StepKeyword};

/// Placeholder name for files without a `Feature:` line
pub const UNKNOWN_FEATURE: &str = "Unknown Feature";

/// Read and parse a feature file.
///
/// Only the read can fail; any content parses into a document (possibly with
/// zero scenarios).
pub fn parse_file(path: &Path) -> GherkinResult<FeatureDocument> {
    let content = fs::read_to_string(path)
        .map_err(|e| GherkinError::parse(format!("{}: {}", path.display(), e)))?;
    Ok(parse_source(&content))
}

/// Parse feature file content into a document
pub fn parse_source(content: &str) -> FeatureDocument {
    let feature_re = Regex::new(r"(?m)Feature:(.+)$").unwrap();
    let scenario_re = Regex::new(r"(?m)Scenario:(.+)$").unwrap();
    let step_re = Regex::new(r"(?m)^\s*(Given|When|Then|And|But)(.+)$").unwrap();

    let feature = feature_re.captures(content);

    let name = feature
        .as_ref()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNKNOWN_FEATURE.to_string());

    let tags = feature
        .as_ref()
        .and_then(|caps| caps.get(0))
        .map(|m| leading_tag_tokens(&content[..m.start()]))
        .unwrap_or_default();

    let description = feature
        .as_ref()
        .and_then(|caps| caps.get(0))
        .map(|m| extract_description(&content[m.end()..]))
        .unwrap_or_default();

    // Heading offsets bound the scenario blocks. "Scenario Outline:" never
    // matches the heading pattern, so outlines do not start blocks.
    let mut headings: Vec<(usize, String)> = Vec::new();
    for caps in scenario_re.captures_iter(content) {
        let (Some(whole), Some(heading)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        headings.push((whole.start(), heading.as_str().trim().to_string()));
    }

    let mut scenarios = Vec::new();
    for (index, (start, scenario_name)) in headings.iter().enumerate() {
        let end = headings
            .get(index + 1)
            .map(|(next_start, _)| *next_start)
            .unwrap_or(content.len());
        let block = &content[*start..end];

        let preceding_start = if index == 0 { 0 } else { headings[index - 1].0 };
        let scenario_tags = trailing_tag_tokens(&content[preceding_start..*start]);

        scenarios.push(Scenario {
            name: scenario_name.clone(),
            tags: scenario_tags,
            steps: extract_steps(block, &step_re),
        });
    }

    FeatureDocument {
        name,
        description,
        tags,
        scenarios,
    }
}

/// Feature name from the first `Feature:` line, shared with the scanner
pub(crate) fn extract_feature_name(content: &str) -> String {
    let feature_re = Regex::new(r"(?m)Feature:(.+)$").unwrap();
    feature_re
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNKNOWN_FEATURE.to_string())
}

/// Step lines within one scenario block, in order
fn extract_steps(block: &str, step_re: &Regex) -> Vec<Step> {
    let mut steps = Vec::new();
    for caps in step_re.captures_iter(block) {
        let (Some(keyword), Some(text)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(keyword) = StepKeyword::from_keyword(keyword.as_str()) else {
            continue;
        };
        steps.push(Step::new(keyword, text.as_str().trim()));
    }
    steps
}

/// Free text after the feature line, up to the first tag line or scenario
/// heading. Best-effort; a `Background:` section would fold in here.
fn extract_description(after_feature: &str) -> String {
    let mut lines = Vec::new();
    for line in after_feature.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('@')
            || trimmed.contains("Scenario:")
            || trimmed.contains("Scenario Outline:")
        {
            break;
        }
        lines.push(trimmed);
    }
    lines.join("\n").trim().to_string()
}

/// All `@`-tokens on tag lines in the text above the feature line
fn leading_tag_tokens(before_feature: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for line in before_feature.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('@') {
            tags.extend(tag_tokens(trimmed));
        }
    }
    tags
}

/// `@`-tokens from the last non-empty line before a scenario heading
fn trailing_tag_tokens(before_heading: &str) -> Vec<String> {
    before_heading
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| line.starts_with('@'))
        .map(tag_tokens)
        .unwrap_or_default()
}

/// Whitespace-separated `@`-prefixed tokens on one line
fn tag_tokens(line: &str) -> Vec<String> {
    line.split_whitespace()
        .filter(|token| token.starts_with('@'))
        .map(|token| token.to_string())
        .collect()
}
