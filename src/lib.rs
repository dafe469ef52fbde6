//! Specport - Gherkin Test Plan Importer
//!
//! This library turns directories of Gherkin feature files into test cases
//! inside a test management backend. It includes:
//! - A feature file scanner and scenario parser (via the `specport-gherkin` crate)
//! - The sequential import pipeline with run-scoped progress reporting
//! - An Azure DevOps Test Plans client behind the `TestManagementClient` trait
//! - An integration registry so new backends can be added behind one trait

pub mod integrations;
pub mod models;
pub mod services;
pub mod utils;

// Re-export the surface a typical embedder needs
pub use integrations::{IntegrationProvider, IntegrationRegistry};
pub use models::import::{ImportOptions, ImportResult, ImportedTestCase, ResolvedTarget};
pub use models::integration::{AzureDevOpsConfig, IntegrationConfig};
pub use services::import::{ImportEvent, ImportService, ProgressListener, ProgressReporter};
pub use services::test_management::TestManagementClient;
pub use utils::error::{AppError, AppResult};
