//! Azure DevOps Service
//!
//! REST client and step-markup rendering for the Azure DevOps test plan API.

pub mod client;
pub mod markup;

pub use client::AzureDevOpsClient;
pub use markup::format_steps;
