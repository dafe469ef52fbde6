//! Import Pipeline Integration Tests
//!
//! Drives the full import flow through the public crate surface: feature
//! files on disk in, recorded test management calls out. A recording client
//! stands in for Azure DevOps so every remote interaction is observable.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use specport::services::test_management::{CreatedTestCase, CreatedTestPlan, CreatedTestSuite};
use specport::{
    AppError, AppResult, AzureDevOpsConfig, ImportOptions, ImportService, IntegrationConfig,
    IntegrationRegistry, ProgressReporter, TestManagementClient,
};

// ============================================================================
// Recording Test Management Client
// ============================================================================

struct RecordingClient {
    plan_calls: Mutex<Vec<String>>,
    suite_calls: Mutex<Vec<(u64, String)>>,
    case_calls: Mutex<Vec<(String, String)>>,
    link_calls: Mutex<Vec<(u64, u64, u64)>>,
    fail_link_at: Option<usize>,
}

impl RecordingClient {
    fn new() -> Self {
        Self {
            plan_calls: Mutex::new(Vec::new()),
            suite_calls: Mutex::new(Vec::new()),
            case_calls: Mutex::new(Vec::new()),
            link_calls: Mutex::new(Vec::new()),
            fail_link_at: None,
        }
    }

    fn failing_link_at(index: usize) -> Self {
        Self {
            fail_link_at: Some(index),
            ..Self::new()
        }
    }

    fn captured_markup(&self) -> Vec<String> {
        self.case_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, markup)| markup.clone())
            .collect()
    }
}

#[async_trait]
impl TestManagementClient for RecordingClient {
    async fn create_test_plan(&self, name: &str) -> AppResult<CreatedTestPlan> {
        self.plan_calls.lock().unwrap().push(name.to_string());
        Ok(CreatedTestPlan { id: 100 })
    }

    async fn create_test_suite(&self, plan_id: u64, name: &str) -> AppResult<CreatedTestSuite> {
        self.suite_calls
            .lock()
            .unwrap()
            .push((plan_id, name.to_string()));
        Ok(CreatedTestSuite { id: 200 })
    }

    async fn create_test_case(&self, title: &str, steps_markup: &str) -> AppResult<CreatedTestCase> {
        let mut calls = self.case_calls.lock().unwrap();
        let id = 300 + calls.len() as u64;
        calls.push((title.to_string(), steps_markup.to_string()));
        Ok(CreatedTestCase { id, url: None })
    }

    async fn add_test_case_to_suite(
        &self,
        plan_id: u64,
        suite_id: u64,
        test_case_id: u64,
    ) -> AppResult<()> {
        let mut calls = self.link_calls.lock().unwrap();
        let index = calls.len();
        calls.push((plan_id, suite_id, test_case_id));
        if self.fail_link_at == Some(index) {
            return Err(AppError::remote_link(format!(
                "Failed to add test case {} to suite {}: 404 Not Found - missing",
                test_case_id, suite_id
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

const LOGIN_FEATURE: &str = "\
Feature: Login
  Scenario: Successful login
    Given I am on the login page
    When I enter valid credentials
    Then I see the dashboard
  Scenario: Failed login
    Given I am on the login page
    When I enter a wrong password
";

fn write_feature(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

fn name_options() -> ImportOptions {
    ImportOptions {
        plan_name: Some("Release 1.2".to_string()),
        suite_name: Some("Imported from Gherkin".to_string()),
        ..Default::default()
    }
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[tokio::test]
async fn test_pipeline_imports_every_scenario_with_progress() {
    let dir = TempDir::new().unwrap();
    write_feature(&dir, "login.feature", LOGIN_FEATURE);

    let client = Arc::new(RecordingClient::new());
    let service = ImportService::new(client.clone());

    let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let reporter = ProgressReporter::with_listener(Box::new(move |event| {
        sink.lock().unwrap().push(event.to_string());
    }));

    let result = service
        .import_with_progress(dir.path(), &name_options(), reporter)
        .await;

    assert!(result.success, "unexpected failure: {}", result.message);
    assert_eq!(result.message, "Imported 1 Gherkin files with success");
    assert_eq!(result.plan_id, Some(100));
    assert_eq!(result.suite_id, Some(200));
    assert_eq!(result.test_cases_created, 2);

    // Remote transcript: one plan, one suite, two cases, two links
    assert_eq!(
        client.plan_calls.lock().unwrap().as_slice(),
        &["Release 1.2".to_string()]
    );
    assert_eq!(
        client.suite_calls.lock().unwrap().as_slice(),
        &[(100, "Imported from Gherkin".to_string())]
    );
    let titles: Vec<String> = client
        .case_calls
        .lock()
        .unwrap()
        .iter()
        .map(|(title, _)| title.clone())
        .collect();
    assert_eq!(titles, vec!["Login - Successful login", "Login - Failed login"]);
    assert_eq!(
        client.link_calls.lock().unwrap().as_slice(),
        &[(100, 200, 300), (100, 200, 301)]
    );

    // The listener saw the same transcript the result carries
    let events = events.lock().unwrap();
    assert_eq!(*events, result.logs);

    // Spot-check the canonical progress lines, in order
    assert_eq!(
        events[0],
        format!("Starting Gherkin import from: {}", dir.path().display())
    );
    assert_eq!(events[1], "Found 1 Gherkin files");
    assert_eq!(events[2], "Creating new test plan with name: Release 1.2");
    assert_eq!(events[3], "Created test plan with ID: 100");
    assert_eq!(events[4], "Creating new test suite with name: Imported from Gherkin");
    assert_eq!(events[5], "Created test suite with ID: 200");
    assert_eq!(events[6], "Processing file: login.feature");
    assert_eq!(events[7], "Creating test case for scenario: Successful login");
    assert_eq!(events[10], "Created work item with ID: 300");
    assert_eq!(events[12], "Added test case 300 to suite");
    assert_eq!(events[13], "Adding test case to results: 300");
    assert_eq!(
        events.last().map(String::as_str),
        Some("Imported 1 Gherkin files with success")
    );
    assert_eq!(events.len(), 22);
}

#[tokio::test]
async fn test_pipeline_produces_exact_deterministic_markup() {
    let dir = TempDir::new().unwrap();
    write_feature(
        &dir,
        "auth.feature",
        "Feature: Auth\nScenario: Login\n  Given I am on login\n",
    );

    let expected = "<steps id=\"0\">\
<step id=\"1\" type=\"ActionStep\">\
<parameterizedString isformatted=\"true\">Given I am on login</parameterizedString>\
<parameterizedString isformatted=\"true\"></parameterizedString>\
</step>\
</steps>";

    let first_client = Arc::new(RecordingClient::new());
    ImportService::new(first_client.clone())
        .import_from_directory(dir.path(), &name_options())
        .await;

    let second_client = Arc::new(RecordingClient::new());
    ImportService::new(second_client.clone())
        .import_from_directory(dir.path(), &name_options())
        .await;

    assert_eq!(first_client.captured_markup(), vec![expected.to_string()]);
    assert_eq!(first_client.captured_markup(), second_client.captured_markup());
}

#[tokio::test]
async fn test_pipeline_preserves_step_order_in_markup() {
    let dir = TempDir::new().unwrap();
    write_feature(
        &dir,
        "order.feature",
        "Feature: Ordering\n\
         Scenario: Four steps\n\
         \x20 Given step one\n\
         \x20 When step two\n\
         \x20 And step three\n\
         \x20 Then step four\n",
    );

    let client = Arc::new(RecordingClient::new());
    ImportService::new(client.clone())
        .import_from_directory(dir.path(), &name_options())
        .await;

    let markup = client.captured_markup().remove(0);
    let one = markup.find("Given step one").unwrap();
    let two = markup.find("When step two").unwrap();
    let three = markup.find("And step three").unwrap();
    let four = markup.find("Then step four").unwrap();
    assert!(one < two && two < three && three < four);
    assert!(markup.contains("<step id=\"4\""));
    assert!(!markup.contains("<step id=\"5\""));
}

#[tokio::test]
async fn test_pipeline_reuses_existing_plan_and_suite() {
    let dir = TempDir::new().unwrap();
    write_feature(&dir, "login.feature", LOGIN_FEATURE);

    let client = Arc::new(RecordingClient::new());
    let options = ImportOptions {
        plan_id: Some(7),
        suite_id: Some(8),
        ..Default::default()
    };

    let result = ImportService::new(client.clone())
        .import_from_directory(dir.path(), &options)
        .await;

    assert!(result.success);
    assert!(client.plan_calls.lock().unwrap().is_empty());
    assert!(client.suite_calls.lock().unwrap().is_empty());
    assert_eq!(
        client.link_calls.lock().unwrap().as_slice(),
        &[(7, 8, 300), (7, 8, 301)]
    );
}

#[tokio::test]
async fn test_pipeline_stops_at_first_remote_failure() {
    let dir = TempDir::new().unwrap();
    write_feature(&dir, "login.feature", LOGIN_FEATURE);

    let client = Arc::new(RecordingClient::failing_link_at(0));
    let result = ImportService::new(client.clone())
        .import_from_directory(dir.path(), &name_options())
        .await;

    assert!(!result.success);
    assert!(result.message.starts_with("Failed to import to Azure DevOps:"));
    assert!(result.trace.is_some());

    // First link failed, so nothing was fully imported and the second
    // scenario was never attempted
    assert!(result.test_cases.is_empty());
    assert_eq!(client.case_calls.lock().unwrap().len(), 1);
    assert_eq!(client.link_calls.lock().unwrap().len(), 1);
    assert!(result
        .logs
        .contains(&"Failed to create test case for scenario: Successful login".to_string()));
    assert!(result
        .logs
        .last()
        .unwrap()
        .starts_with("Import failed: Failed to import to Azure DevOps:"));
}

// ============================================================================
// Registry Routing
// ============================================================================

#[tokio::test]
async fn test_registry_routes_to_azure_devops_provider() {
    let registry = IntegrationRegistry::with_defaults();
    let provider = registry.get("azure-devops").unwrap();

    // Invalid config fails before touching the directory or the network
    let config = IntegrationConfig::AzureDevOps(AzureDevOpsConfig {
        org_name: "contoso".to_string(),
        project_name: "webshop".to_string(),
        personal_access_token: String::new(),
        api_version: None,
    });
    let result = provider
        .import_gherkin(&config, Path::new("/nonexistent"), &ImportOptions::default())
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message,
        "Configuration error: personal access token is required"
    );
}
