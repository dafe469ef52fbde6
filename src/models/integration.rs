//! Integration Models
//!
//! Configuration types for test-management integrations. Configurations
//! travel as one tagged value so a provider can check the variant once at
//! its boundary instead of probing individual fields at every call site.

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Default Azure DevOps REST API version
pub const DEFAULT_API_VERSION: &str = "6.0";

/// Connection settings for one Azure DevOps project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureDevOpsConfig {
    /// Organization name as it appears in dev.azure.com URLs
    pub org_name: String,
    /// Project name within the organization
    pub project_name: String,
    /// Personal access token. Excluded from serialization to prevent
    /// accidental exposure in logs or UI responses.
    #[serde(skip_serializing, default)]
    pub personal_access_token: String,
    /// REST API version override; `DEFAULT_API_VERSION` when unset
    #[serde(default)]
    pub api_version: Option<String>,
}

impl AzureDevOpsConfig {
    /// Effective API version sent with every request
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    /// Check that every required connection field is present
    pub fn validate(&self) -> AppResult<()> {
        if self.org_name.trim().is_empty() {
            return Err(AppError::config("organization name is required"));
        }
        if self.project_name.trim().is_empty() {
            return Err(AppError::config("project name is required"));
        }
        if self.personal_access_token.trim().is_empty() {
            return Err(AppError::config("personal access token is required"));
        }
        Ok(())
    }
}

/// Provider configuration, tagged by integration kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IntegrationConfig {
    // Tag value must match the provider registry id
    #[serde(rename = "azure-devops")]
    AzureDevOps(AzureDevOpsConfig),
}

impl IntegrationConfig {
    /// Tag value identifying the integration kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AzureDevOps(_) => "azure-devops",
        }
    }

    /// Validate the contained configuration
    pub fn validate(&self) -> AppResult<()> {
        match self {
            Self::AzureDevOps(config) => config.validate(),
        }
    }
}
