//! Specport CLI entry point
//!
//! Imports a directory of Gherkin feature files into an Azure DevOps test
//! plan. Pipeline output goes to stdout; logs and failure messages go to
//! stderr so the summary stays pipeable.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use specport::{AzureDevOpsConfig, ImportOptions, ImportResult, IntegrationConfig, IntegrationRegistry};

#[derive(Parser)]
#[command(name = "specport")]
#[command(about = "Import Gherkin feature files into Azure DevOps Test Plans", version)]
#[command(group(ArgGroup::new("plan").required(true).args(["plan_id", "plan_name"])))]
struct Cli {
    /// Directory scanned recursively for .feature files
    #[arg(long)]
    gherkin_dir: PathBuf,

    /// Azure DevOps organization name
    #[arg(long)]
    org_name: String,

    /// Azure DevOps project name
    #[arg(long)]
    project_name: String,

    /// Personal access token with work item write scope
    #[arg(long)]
    token: String,

    /// Use an existing test plan by id
    #[arg(long)]
    plan_id: Option<u64>,

    /// Create a new test plan with this name
    #[arg(long)]
    plan_name: Option<String>,

    /// Use an existing test suite by id (wins over --suite-name)
    #[arg(long)]
    suite_id: Option<u64>,

    /// Create a new test suite with this name
    #[arg(long, default_value = "Imported from Gherkin")]
    suite_name: String,

    /// Azure DevOps REST API version
    #[arg(long, default_value = "6.0")]
    api_version: String,

    /// Log filter directive, e.g. "debug" or "specport=debug"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = IntegrationConfig::AzureDevOps(AzureDevOpsConfig {
        org_name: cli.org_name,
        project_name: cli.project_name,
        personal_access_token: cli.token,
        api_version: Some(cli.api_version),
    });
    let options = ImportOptions {
        plan_id: cli.plan_id,
        plan_name: cli.plan_name,
        suite_id: cli.suite_id,
        suite_name: Some(cli.suite_name),
    };

    let registry = IntegrationRegistry::with_defaults();
    let provider = registry
        .get("azure-devops")
        .context("azure-devops integration is not registered")?;

    let result = provider
        .import_gherkin(&config, &cli.gherkin_dir, &options)
        .await;

    if !result.success {
        eprintln!("{}", result.message);
        if let Some(trace) = &result.trace {
            tracing::debug!(trace = %trace, "import failure detail");
        }
        std::process::exit(1);
    }

    print_results(&result);
    Ok(())
}

fn print_results(result: &ImportResult) {
    println!("Import Results:");
    println!("===============");
    if let Some(plan_id) = result.plan_id {
        println!("Test Plan ID: {}", plan_id);
    }
    if let Some(suite_id) = result.suite_id {
        println!("Test Suite ID: {}", suite_id);
    }
    println!("Imported Test Cases: {}", result.test_cases_created);
    for case in &result.test_cases {
        println!("- {} (ID: {})", case.name, case.id);
        if let Some(url) = &case.url {
            println!("  URL: {}", url);
        }
    }
    println!();
    println!("Import completed successfully!");
}
