//! Test Management Client Trait
//!
//! Defines the common interface for test-management backends. The import
//! pipeline depends only on this trait, so a backend can be swapped (or
//! faked in tests) without touching the orchestration logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::utils::error::AppResult;

/// A created test plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTestPlan {
    pub id: u64,
}

/// A created test suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTestSuite {
    pub id: u64,
}

/// A created test case work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTestCase {
    pub id: u64,
    /// Browser URL of the work item, when the service returned one
    pub url: Option<String>,
}

/// Trait that all test-management backends must implement.
///
/// Provides the four operations the import pipeline needs:
/// - test plan creation (`create_test_plan`)
/// - test suite creation under a plan (`create_test_suite`)
/// - test case creation with formatted steps (`create_test_case`)
/// - linking a case into a suite (`add_test_case_to_suite`)
///
/// Creation failures surface as `AppError::RemoteCreation`, link failures as
/// `AppError::RemoteLink`; both abort the run at the orchestrator level.
#[async_trait]
pub trait TestManagementClient: Send + Sync {
    /// Create a test plan with the given name.
    async fn create_test_plan(&self, name: &str) -> AppResult<CreatedTestPlan>;

    /// Create a static test suite under an existing plan.
    async fn create_test_suite(&self, plan_id: u64, name: &str) -> AppResult<CreatedTestSuite>;

    /// Create a test case work item carrying the formatted steps markup.
    async fn create_test_case(&self, title: &str, steps_markup: &str)
        -> AppResult<CreatedTestCase>;

    /// Link an existing test case into a suite.
    async fn add_test_case_to_suite(
        &self,
        plan_id: u64,
        suite_id: u64,
        test_case_id: u64,
    ) -> AppResult<()>;
}
