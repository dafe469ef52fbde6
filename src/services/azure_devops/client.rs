//! Azure DevOps Client
//!
//! reqwest implementation of the test-management client against the Azure
//! DevOps REST API. The client is scoped to one organization project; every
//! request carries PAT basic auth and the configured api-version query.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;

use crate::models::integration::AzureDevOpsConfig;
use crate::services::test_management::{
    CreatedTestCase, CreatedTestPlan, CreatedTestSuite, TestManagementClient,
};
use crate::utils::error::{AppError, AppResult};

/// Work item type created for every scenario
const TEST_CASE_WORK_ITEM_TYPE: &str = "Test Case";

/// Azure DevOps REST client for one organization project
#[derive(Debug, Clone)]
pub struct AzureDevOpsClient {
    config: AzureDevOpsConfig,
    client: reqwest::Client,
    base_url: String,
}

impl AzureDevOpsClient {
    /// Create a client for the project in the given configuration
    pub fn new(config: AzureDevOpsConfig) -> Self {
        let base_url = format!(
            "https://dev.azure.com/{}/{}",
            config.org_name, config.project_name
        );
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Basic auth header value derived from the personal access token
    fn auth_header(&self) -> String {
        let credentials = STANDARD.encode(format!(":{}", self.config.personal_access_token));
        format!("Basic {}", credentials)
    }

    /// Full request URL for an `_apis` path, api-version query appended
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/_apis/{}?api-version={}",
            self.base_url,
            path,
            self.config.api_version()
        )
    }

    /// JSON Patch document for a test case work item
    fn steps_patch_document(title: &str, steps_markup: &str) -> serde_json::Value {
        json!([
            {
                "op": "add",
                "path": "/fields/System.Title",
                "value": title,
            },
            {
                "op": "add",
                "path": "/fields/Microsoft.VSTS.TCM.Steps",
                "value": steps_markup,
            },
        ])
    }
}

/// Minimal test plan creation response
#[derive(Debug, Deserialize)]
struct PlanResponse {
    id: u64,
}

/// Minimal test suite creation response
#[derive(Debug, Deserialize)]
struct SuiteResponse {
    id: u64,
}

/// Minimal work item creation response
#[derive(Debug, Deserialize)]
struct WorkItemResponse {
    id: u64,
    #[serde(rename = "_links", default)]
    links: Option<WorkItemLinks>,
}

#[derive(Debug, Deserialize, Default)]
struct WorkItemLinks {
    #[serde(default)]
    html: Option<LinkReference>,
}

#[derive(Debug, Deserialize)]
struct LinkReference {
    href: String,
}

#[async_trait]
impl TestManagementClient for AzureDevOpsClient {
    async fn create_test_plan(&self, name: &str) -> AppResult<CreatedTestPlan> {
        let url = self.api_url("testplan/plans");
        let body = json!({
            "name": name,
            "areaPath": self.config.project_name,
            "iteration": self.config.project_name,
        });

        tracing::debug!(url = %url, name = %name, "Creating test plan");
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AppError::remote_creation(format!(
                "Failed to create test plan: {} - {}",
                status, text
            )));
        }

        let plan: PlanResponse = serde_json::from_str(&text)?;
        Ok(CreatedTestPlan { id: plan.id })
    }

    async fn create_test_suite(&self, plan_id: u64, name: &str) -> AppResult<CreatedTestSuite> {
        let url = self.api_url(&format!("testplan/plans/{}/suites", plan_id));
        let body = json!({
            "name": name,
            "suiteType": "StaticTestSuite",
        });

        tracing::debug!(url = %url, name = %name, "Creating test suite");
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AppError::remote_creation(format!(
                "Failed to create test suite: {} - {}",
                status, text
            )));
        }

        let suite: SuiteResponse = serde_json::from_str(&text)?;
        Ok(CreatedTestSuite { id: suite.id })
    }

    async fn create_test_case(
        &self,
        title: &str,
        steps_markup: &str,
    ) -> AppResult<CreatedTestCase> {
        let encoded_type = urlencoding::encode(TEST_CASE_WORK_ITEM_TYPE);
        let url = self.api_url(&format!("wit/workitems/${}", encoded_type));
        let body = Self::steps_patch_document(title, steps_markup);

        tracing::debug!(url = %url, title = %title, "Creating test case work item");
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            // Work item mutations use the JSON Patch media type
            .header("Content-Type", "application/json-patch+json")
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AppError::remote_creation(format!(
                "Failed to create test case work item: {} - {}",
                status, text
            )));
        }

        let work_item: WorkItemResponse = serde_json::from_str(&text)?;
        let case_url = work_item
            .links
            .and_then(|links| links.html)
            .map(|link| link.href);
        Ok(CreatedTestCase {
            id: work_item.id,
            url: case_url,
        })
    }

    async fn add_test_case_to_suite(
        &self,
        plan_id: u64,
        suite_id: u64,
        test_case_id: u64,
    ) -> AppResult<()> {
        let url = self.api_url(&format!(
            "testplan/plans/{}/suites/{}/testcases",
            plan_id, suite_id
        ));
        let body = json!([{ "id": test_case_id }]);

        tracing::debug!(url = %url, test_case_id, "Adding test case to suite");
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(AppError::remote_link(format!(
                "Failed to add test case {} to suite {}: {} - {}",
                test_case_id, suite_id, status, text
            )));
        }

        Ok(())
    }
}
