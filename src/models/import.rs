//! Import Models
//!
//! Data structures for the Gherkin import pipeline: the caller-supplied
//! target selection, the resolved target ids, and the result object every
//! import run returns. The result is infallible by design — failures are
//! `success: false` with a message, never a thrown error.

use serde::{Deserialize, Serialize};

/// Caller-supplied test plan and suite selection.
///
/// For each of plan and suite, an explicit id wins over a name; a name means
/// "create one". Policy for the neither-given case lives in the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    /// Existing test plan id, used as-is without an existence check
    pub plan_id: Option<u64>,
    /// Name for a new test plan, used when no id is given
    pub plan_name: Option<String>,
    /// Existing test suite id, used as-is without an existence check
    pub suite_id: Option<u64>,
    /// Name for a new test suite, used when no id is given
    pub suite_name: Option<String>,
}

/// Plan and suite ids every created test case is linked under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTarget {
    pub plan_id: u64,
    pub suite_id: u64,
}

/// One successfully imported test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedTestCase {
    /// Work item id assigned by the remote service
    pub id: u64,
    /// Scenario name
    pub name: String,
    /// Browser URL of the created work item, when the service returned one
    pub url: Option<String>,
    /// Feature the scenario belongs to
    pub feature: String,
    /// Relative path of the source feature file
    pub file: String,
}

/// Outcome of one import run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// Whether the full run completed
    pub success: bool,
    /// Human-readable outcome summary
    pub message: String,
    /// Resolved plan id, when resolution got that far
    #[serde(default)]
    pub plan_id: Option<u64>,
    /// Resolved suite id, when resolution got that far
    #[serde(default)]
    pub suite_id: Option<u64>,
    /// Fully imported cases (created and linked), in processing order
    #[serde(default)]
    pub test_cases: Vec<ImportedTestCase>,
    /// Always equals `test_cases.len()`
    #[serde(default)]
    pub test_cases_created: usize,
    /// Full progress transcript of the run
    #[serde(default)]
    pub logs: Vec<String>,
    /// Debug rendering of the underlying error for unexpected failures
    #[serde(default)]
    pub trace: Option<String>,
}

impl ImportResult {
    /// Create a successful result for a completed run
    pub fn success(
        message: impl Into<String>,
        target: ResolvedTarget,
        test_cases: Vec<ImportedTestCase>,
        logs: Vec<String>,
    ) -> Self {
        let test_cases_created = test_cases.len();
        Self {
            success: true,
            message: message.into(),
            plan_id: Some(target.plan_id),
            suite_id: Some(target.suite_id),
            test_cases,
            test_cases_created,
            logs,
            trace: None,
        }
    }

    /// Create a failure result with just a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            plan_id: None,
            suite_id: None,
            test_cases: Vec::new(),
            test_cases_created: 0,
            logs: Vec::new(),
            trace: None,
        }
    }

    /// Attach the accumulated progress transcript
    pub fn with_logs(mut self, logs: Vec<String>) -> Self {
        self.logs = logs;
        self
    }

    /// Attach the resolved target ids
    pub fn with_target(mut self, target: ResolvedTarget) -> Self {
        self.plan_id = Some(target.plan_id);
        self.suite_id = Some(target.suite_id);
        self
    }

    /// Attach the cases imported before the run stopped
    pub fn with_test_cases(mut self, test_cases: Vec<ImportedTestCase>) -> Self {
        self.test_cases_created = test_cases.len();
        self.test_cases = test_cases;
        self
    }

    /// Attach a debug trace for an unexpected failure
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}
