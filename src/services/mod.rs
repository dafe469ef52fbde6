//! Services
//!
//! Business logic for the import pipeline. Services are called by the
//! integration providers and never talk to the CLI layer directly.

pub mod azure_devops;
pub mod import;
pub mod test_management;

pub use azure_devops::AzureDevOpsClient;
pub use import::{ImportService, ProgressReporter};
pub use test_management::TestManagementClient;
