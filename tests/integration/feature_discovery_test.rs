//! Feature Discovery Integration Tests
//!
//! Exercises the scanner and parser together the way the import pipeline
//! does: scan a directory tree, then parse each discovered file.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use specport_gherkin::{parse_file, scan_directory, StepKeyword};

// ============================================================================
// Helper Functions
// ============================================================================

const CHECKOUT_FEATURE: &str = "\
@checkout @smoke
Feature: Checkout
  As a shopper I want to pay for my cart

  @happy
  Scenario: Pay with card
    Given a cart with two items
    When I pay with a valid card
    Then I receive an order confirmation

  Scenario: Pay with empty cart
    Given an empty cart
    When I open the checkout page
    Then the pay button is disabled
";

fn write_file(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// ============================================================================
// Scan + Parse Flow
// ============================================================================

#[test]
fn test_scan_then_parse_nested_tree() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "shop/checkout.feature", CHECKOUT_FEATURE);
    write_file(
        &dir,
        "auth/login.feature",
        "Feature: Login\nScenario: Ok\n  Given a user\n",
    );
    write_file(&dir, "notes/readme.md", "not a feature");

    let files = scan_directory(dir.path()).unwrap();
    assert_eq!(files.len(), 2);

    // Scan order is alphabetical by full path
    assert_eq!(
        files[0].relative_path,
        Path::new("auth").join("login.feature").to_string_lossy()
    );
    assert_eq!(
        files[1].relative_path,
        Path::new("shop").join("checkout.feature").to_string_lossy()
    );

    // Summaries carry feature names and scenario counts without parsing
    assert_eq!(files[1].feature_name, "Checkout");
    assert_eq!(files[1].scenario_count, 2);

    // Every discovered file parses into a full document
    for file in &files {
        let document = parse_file(Path::new(&file.path)).unwrap();
        assert!(!document.name.is_empty());
        assert_eq!(document.scenarios.len(), file.scenario_count);
    }
}

#[test]
fn test_parsed_document_preserves_structure() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "checkout.feature", CHECKOUT_FEATURE);

    let files = scan_directory(dir.path()).unwrap();
    let document = parse_file(Path::new(&files[0].path)).unwrap();

    assert_eq!(document.name, "Checkout");
    assert_eq!(document.tags, vec!["@checkout", "@smoke"]);
    assert_eq!(document.description, "As a shopper I want to pay for my cart");

    let first = &document.scenarios[0];
    assert_eq!(first.name, "Pay with card");
    assert_eq!(first.tags, vec!["@happy"]);
    assert_eq!(first.steps.len(), 3);
    assert_eq!(first.steps[0].keyword, StepKeyword::Given);
    assert_eq!(first.steps[0].text, "a cart with two items");
    assert_eq!(
        first.steps[2].action_text(),
        "Then I receive an order confirmation"
    );

    let second = &document.scenarios[1];
    assert_eq!(second.name, "Pay with empty cart");
    assert!(second.tags.is_empty());
    assert_eq!(second.steps.len(), 3);
}

#[test]
fn test_scan_missing_directory_reports_discovery_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let err = scan_directory(&missing).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to scan directory:"), "{message}");
    assert!(message.contains("Directory not found"));
}
