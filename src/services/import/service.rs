//! Import Service
//!
//! Sequential orchestrator for the Gherkin import pipeline: scan the
//! directory, resolve the target plan and suite, then walk files in scan
//! order creating and linking one test case per scenario. One remote call is
//! in flight at a time. A file that fails to parse is skipped; any remote
//! failure stops the run and keeps what was already imported. Every failure
//! mode folds into a `success: false` result — this service never returns an
//! error and never panics on bad input.

use std::path::Path;
use std::sync::Arc;

use specport_gherkin::{parser, scanner, GherkinSummary};

use crate::models::import::{ImportOptions, ImportResult, ImportedTestCase, ResolvedTarget};
use crate::services::azure_devops::markup;
use crate::services::import::progress::{ImportEvent, ProgressReporter};
use crate::services::import::resolver::TargetResolver;
use crate::services::test_management::TestManagementClient;
use crate::utils::error::AppError;

/// Failure message when the scan finds nothing to import
const NO_FILES_MESSAGE: &str = "No Gherkin files found in the specified directory";

/// Orchestrates one-directory-at-a-time Gherkin imports
pub struct ImportService {
    client: Arc<dyn TestManagementClient>,
}

impl ImportService {
    /// Create a service importing through the given backend
    pub fn new(client: Arc<dyn TestManagementClient>) -> Self {
        Self { client }
    }

    /// Run an import with a fresh, listener-less progress reporter
    pub async fn import_from_directory(
        &self,
        directory: &Path,
        options: &ImportOptions,
    ) -> ImportResult {
        self.import_with_progress(directory, options, ProgressReporter::new())
            .await
    }

    /// Run an import with a caller-constructed reporter (listener attached)
    pub async fn import_with_progress(
        &self,
        directory: &Path,
        options: &ImportOptions,
        mut progress: ProgressReporter,
    ) -> ImportResult {
        tracing::info!(
            run_id = %progress.run_id(),
            directory = %directory.display(),
            "Starting Gherkin import"
        );

        let result = self.run(directory, options, &mut progress).await;

        if result.success {
            tracing::info!(
                run_id = %progress.run_id(),
                created = result.test_cases_created,
                "Import completed"
            );
        } else {
            tracing::error!(
                run_id = %progress.run_id(),
                message = %result.message,
                "Import failed"
            );
        }
        result
    }

    // ========================================================================
    // Pipeline stages
    // ========================================================================

    async fn run(
        &self,
        directory: &Path,
        options: &ImportOptions,
        progress: &mut ProgressReporter,
    ) -> ImportResult {
        progress.emit(ImportEvent::RunStarted {
            directory: directory.display().to_string(),
        });

        // Stage 1: discover feature files
        let files = match scanner::scan_directory(directory) {
            Ok(files) => files,
            Err(e) => {
                let error: AppError = e.into();
                let message = format!("Failed to import to Azure DevOps: {}", error);
                progress.emit(ImportEvent::RunFailed {
                    message: message.clone(),
                });
                return ImportResult::failure(message)
                    .with_trace(format!("{:?}", error))
                    .with_logs(progress.take_logs());
            }
        };

        if files.is_empty() {
            progress.emit(ImportEvent::RunFailed {
                message: NO_FILES_MESSAGE.to_string(),
            });
            return ImportResult::failure(NO_FILES_MESSAGE).with_logs(progress.take_logs());
        }
        progress.emit(ImportEvent::FilesDiscovered { count: files.len() });

        // Stage 2: resolve the target plan and suite
        let resolver = TargetResolver::new(self.client.as_ref());
        let target = match resolver.resolve(options, progress).await {
            Ok(target) => target,
            Err(e) => {
                // Missing-input failures carry their message bare; remote
                // failures during a create-by-name get the catch-all framing.
                let (message, trace) = match &e {
                    AppError::TargetResolution(_) => (e.to_string(), None),
                    _ => (
                        format!("Failed to import to Azure DevOps: {}", e),
                        Some(format!("{:?}", e)),
                    ),
                };
                progress.emit(ImportEvent::RunFailed {
                    message: message.clone(),
                });
                let mut result = ImportResult::failure(message).with_logs(progress.take_logs());
                if let Some(trace) = trace {
                    result = result.with_trace(trace);
                }
                return result;
            }
        };

        // Stage 3: create and link one test case per scenario
        self.import_files(&files, target, progress).await
    }

    async fn import_files(
        &self,
        files: &[GherkinSummary],
        target: ResolvedTarget,
        progress: &mut ProgressReporter,
    ) -> ImportResult {
        let mut imported: Vec<ImportedTestCase> = Vec::new();

        for file in files {
            progress.emit(ImportEvent::FileStarted {
                relative_path: file.relative_path.clone(),
            });

            let document = match parser::parse_file(Path::new(&file.path)) {
                Ok(document) => document,
                Err(e) => {
                    // Non-fatal: one bad file never stops the run
                    progress.emit(ImportEvent::FileSkipped {
                        relative_path: file.relative_path.clone(),
                        reason: e.to_string(),
                    });
                    tracing::warn!(file = %file.path, error = %e, "Skipping unparseable feature file");
                    continue;
                }
            };

            for scenario in &document.scenarios {
                progress.emit(ImportEvent::ScenarioStarted {
                    name: scenario.name.clone(),
                });

                let steps_markup = markup::format_steps(&scenario.steps);
                progress.emit(ImportEvent::StepsFormatted {
                    markup: steps_markup.clone(),
                });

                let title = format!("{} - {}", document.name, scenario.name);
                progress.emit(ImportEvent::WorkItemCreating {
                    name: scenario.name.clone(),
                });

                let work_item = match self.client.create_test_case(&title, &steps_markup).await {
                    Ok(work_item) => work_item,
                    Err(e) => return abort_run(&scenario.name, &e, target, imported, progress),
                };
                progress.emit(ImportEvent::WorkItemCreated { id: work_item.id });

                progress.emit(ImportEvent::SuiteLinking {
                    suite_id: target.suite_id,
                });
                if let Err(e) = self
                    .client
                    .add_test_case_to_suite(target.plan_id, target.suite_id, work_item.id)
                    .await
                {
                    return abort_run(&scenario.name, &e, target, imported, progress);
                }
                progress.emit(ImportEvent::SuiteLinked {
                    test_case_id: work_item.id,
                });

                // A case counts as imported only after create AND link
                progress.emit(ImportEvent::TestCaseImported { id: work_item.id });
                imported.push(ImportedTestCase {
                    id: work_item.id,
                    name: scenario.name.clone(),
                    url: work_item.url.clone(),
                    feature: document.name.clone(),
                    file: file.relative_path.clone(),
                });
            }
        }

        progress.emit(ImportEvent::RunCompleted {
            file_count: files.len(),
        });
        ImportResult::success(
            format!("Imported {} Gherkin files with success", files.len()),
            target,
            imported,
            progress.take_logs(),
        )
    }
}

/// Fold a fatal remote error into a failure result keeping partial progress.
/// Remote objects created before the abort are not rolled back; the result
/// reports the resolved ids and every fully imported case.
fn abort_run(
    scenario_name: &str,
    error: &AppError,
    target: ResolvedTarget,
    imported: Vec<ImportedTestCase>,
    progress: &mut ProgressReporter,
) -> ImportResult {
    progress.emit(ImportEvent::ScenarioFailed {
        name: scenario_name.to_string(),
    });
    let message = format!("Failed to import to Azure DevOps: {}", error);
    progress.emit(ImportEvent::RunFailed {
        message: message.clone(),
    });
    ImportResult::failure(message)
        .with_target(target)
        .with_test_cases(imported)
        .with_trace(format!("{:?}", error))
        .with_logs(progress.take_logs())
}
