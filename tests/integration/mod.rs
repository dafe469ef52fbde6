//! Integration Tests Module
//!
//! End-to-end tests for the Gherkin import pipeline. Tests cover feature
//! file discovery and parsing, and the full import flow from a directory of
//! feature files down to the recorded test management calls.

// Feature file discovery and parsing tests
mod feature_discovery_test;

// Full import pipeline tests
mod import_pipeline_test;
