//! Azure DevOps Integration
//!
//! Bridges the import pipeline to Azure DevOps Test Plans. Configuration
//! problems are reported as failed import results before any network traffic
//! happens.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::import::{ImportOptions, ImportResult};
use crate::models::integration::IntegrationConfig;
use crate::services::azure_devops::AzureDevOpsClient;
use crate::services::import::ImportService;

use super::IntegrationProvider;

/// Built-in integration importing into Azure DevOps Test Plans.
pub struct AzureDevOpsIntegration;

impl AzureDevOpsIntegration {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AzureDevOpsIntegration {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntegrationProvider for AzureDevOpsIntegration {
    fn id(&self) -> &str {
        "azure-devops"
    }

    fn display_name(&self) -> &str {
        "Azure DevOps Test Plans"
    }

    fn description(&self) -> &str {
        "Imports Gherkin feature files as test cases in an Azure DevOps test plan and suite"
    }

    async fn import_gherkin(
        &self,
        config: &IntegrationConfig,
        directory: &Path,
        options: &ImportOptions,
    ) -> ImportResult {
        let IntegrationConfig::AzureDevOps(azure) = config;

        if let Err(e) = azure.validate() {
            return ImportResult::failure(e.to_string());
        }

        let client = Arc::new(AzureDevOpsClient::new(azure.clone()));
        ImportService::new(client)
            .import_from_directory(directory, options)
            .await
    }
}
