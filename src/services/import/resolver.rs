//! Target Resolver
//!
//! Resolves the caller's plan/suite selection into concrete ids. An explicit
//! id is trusted as-is with no existence check; a name creates the object
//! exactly once; when neither is given for a half, resolution fails with the
//! canonical message. Plan resolution completes (including a create-by-name)
//! before the suite half is checked, so a missing suite selection can leave
//! a freshly created plan behind — the run's failure result reports it.

use crate::models::import::{ImportOptions, ResolvedTarget};
use crate::services::import::progress::{ImportEvent, ProgressReporter};
use crate::services::test_management::TestManagementClient;
use crate::utils::error::{AppError, AppResult};

/// Error when neither a plan id nor a plan name was provided
const MISSING_PLAN_MESSAGE: &str =
    "You must provide either a test plan ID or a name for a new plan";

/// Error when neither a suite id nor a suite name was provided
const MISSING_SUITE_MESSAGE: &str =
    "You must provide either a test suite ID or a name for a new suite";

/// Resolves import options against a test-management backend
pub struct TargetResolver<'a> {
    client: &'a dyn TestManagementClient,
}

impl<'a> TargetResolver<'a> {
    /// Create a resolver borrowing the backend client
    pub fn new(client: &'a dyn TestManagementClient) -> Self {
        Self { client }
    }

    /// Resolve the plan, then the suite scoped to that plan.
    ///
    /// Empty names count as absent. No network call happens unless a
    /// create-by-name is actually needed.
    pub async fn resolve(
        &self,
        options: &ImportOptions,
        progress: &mut ProgressReporter,
    ) -> AppResult<ResolvedTarget> {
        let plan_name = options.plan_name.as_deref().filter(|name| !name.is_empty());
        let plan_id = match (options.plan_id, plan_name) {
            (Some(id), _) => id,
            (None, Some(name)) => {
                progress.emit(ImportEvent::PlanCreating {
                    name: name.to_string(),
                });
                let plan = self.client.create_test_plan(name).await?;
                progress.emit(ImportEvent::PlanCreated { id: plan.id });
                plan.id
            }
            (None, None) => {
                return Err(AppError::target_resolution(MISSING_PLAN_MESSAGE));
            }
        };

        let suite_name = options
            .suite_name
            .as_deref()
            .filter(|name| !name.is_empty());
        let suite_id = match (options.suite_id, suite_name) {
            (Some(id), _) => id,
            (None, Some(name)) => {
                progress.emit(ImportEvent::SuiteCreating {
                    name: name.to_string(),
                });
                let suite = self.client.create_test_suite(plan_id, name).await?;
                progress.emit(ImportEvent::SuiteCreated { id: suite.id });
                suite.id
            }
            (None, None) => {
                return Err(AppError::target_resolution(MISSING_SUITE_MESSAGE));
            }
        };

        Ok(ResolvedTarget { plan_id, suite_id })
    }
}
