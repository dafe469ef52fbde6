//! Integration Provider Trait and Registry
//!
//! Defines the async trait that all test management integrations satisfy,
//! plus a registry keyed by integration id.

pub mod azure_devops;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::import::{ImportOptions, ImportResult};
use crate::models::integration::IntegrationConfig;

pub use azure_devops::AzureDevOpsIntegration;

/// Async trait for test management integrations.
///
/// Each integration validates its own configuration and runs the full
/// import pipeline against its backend. Integrations never return errors;
/// every failure is folded into an [`ImportResult`] with `success: false`.
#[async_trait]
pub trait IntegrationProvider: Send + Sync {
    /// Stable identifier used for registry lookups.
    fn id(&self) -> &str;

    /// Human-readable name shown in listings.
    fn display_name(&self) -> &str;

    /// One-line description of what the integration does.
    fn description(&self) -> &str;

    /// Import every Gherkin feature file under `directory` into the backend.
    async fn import_gherkin(
        &self,
        config: &IntegrationConfig,
        directory: &Path,
        options: &ImportOptions,
    ) -> ImportResult;
}

/// Registry of available integrations keyed by id.
pub struct IntegrationRegistry {
    providers: HashMap<String, Arc<dyn IntegrationProvider>>,
}

impl IntegrationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Create a registry with all built-in integrations registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AzureDevOpsIntegration::new()));
        registry
    }

    /// Register a provider. A provider already registered under the same id
    /// is replaced.
    pub fn register(&mut self, provider: Arc<dyn IntegrationProvider>) {
        let id = provider.id().to_string();
        if self.providers.insert(id.clone(), provider).is_some() {
            tracing::warn!(id = %id, "Replacing previously registered integration");
        }
    }

    /// Look up a provider by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn IntegrationProvider>> {
        self.providers.get(id).cloned()
    }

    /// All registered providers, sorted by id for stable listings.
    pub fn all(&self) -> Vec<Arc<dyn IntegrationProvider>> {
        let mut providers: Vec<_> = self.providers.values().cloned().collect();
        providers.sort_by(|a, b| a.id().cmp(b.id()));
        providers
    }
}

impl Default for IntegrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
