//! Import Progress
//!
//! Run-scoped progress reporting. Each import run owns its reporter, so
//! concurrent runs can never observe each other's events; there is no shared
//! registry keyed by run id. Every emitted event is rendered to a canonical
//! log line, appended to the run transcript, mirrored to `tracing`, and
//! forwarded to an optional listener (an embedding UI streams these live).

use std::fmt;

use uuid::Uuid;

/// Milestones emitted while an import run executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEvent {
    /// Scan of the feature directory is starting
    RunStarted { directory: String },
    /// Scan finished with this many feature files
    FilesDiscovered { count: usize },
    /// A test plan is being created by name
    PlanCreating { name: String },
    /// Plan creation succeeded
    PlanCreated { id: u64 },
    /// A test suite is being created by name
    SuiteCreating { name: String },
    /// Suite creation succeeded
    SuiteCreated { id: u64 },
    /// A feature file is being processed
    FileStarted { relative_path: String },
    /// A feature file failed to parse and was skipped
    FileSkipped { relative_path: String, reason: String },
    /// A scenario is being turned into a test case
    ScenarioStarted { name: String },
    /// Steps markup rendered for the current scenario
    StepsFormatted { markup: String },
    /// Work item creation request is being sent
    WorkItemCreating { name: String },
    /// Work item creation succeeded
    WorkItemCreated { id: u64 },
    /// The created case is being linked into the suite
    SuiteLinking { suite_id: u64 },
    /// Suite link succeeded
    SuiteLinked { test_case_id: u64 },
    /// The case was recorded in the run results
    TestCaseImported { id: u64 },
    /// A scenario could not be imported; the run stops here
    ScenarioFailed { name: String },
    /// Every file was processed
    RunCompleted { file_count: usize },
    /// The run stopped before completing
    RunFailed { message: String },
}

impl fmt::Display for ImportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunStarted { directory } => {
                write!(f, "Starting Gherkin import from: {}", directory)
            }
            Self::FilesDiscovered { count } => write!(f, "Found {} Gherkin files", count),
            Self::PlanCreating { name } => {
                write!(f, "Creating new test plan with name: {}", name)
            }
            Self::PlanCreated { id } => write!(f, "Created test plan with ID: {}", id),
            Self::SuiteCreating { name } => {
                write!(f, "Creating new test suite with name: {}", name)
            }
            Self::SuiteCreated { id } => write!(f, "Created test suite with ID: {}", id),
            Self::FileStarted { relative_path } => {
                write!(f, "Processing file: {}", relative_path)
            }
            Self::FileSkipped {
                relative_path,
                reason,
            } => write!(f, "Skipping file {}: {}", relative_path, reason),
            Self::ScenarioStarted { name } => {
                write!(f, "Creating test case for scenario: {}", name)
            }
            Self::StepsFormatted { markup } => write!(f, "Formatted steps markup: {}", markup),
            Self::WorkItemCreating { name } => {
                write!(f, "Creating work item for test case: {}", name)
            }
            Self::WorkItemCreated { id } => write!(f, "Created work item with ID: {}", id),
            Self::SuiteLinking { suite_id } => {
                write!(f, "Adding test case to suite with ID: {}", suite_id)
            }
            Self::SuiteLinked { test_case_id } => {
                write!(f, "Added test case {} to suite", test_case_id)
            }
            Self::TestCaseImported { id } => write!(f, "Adding test case to results: {}", id),
            Self::ScenarioFailed { name } => {
                write!(f, "Failed to create test case for scenario: {}", name)
            }
            Self::RunCompleted { file_count } => {
                write!(f, "Imported {} Gherkin files with success", file_count)
            }
            Self::RunFailed { message } => write!(f, "Import failed: {}", message),
        }
    }
}

/// Callback invoked for every event of one run
pub type ProgressListener = Box<dyn Fn(&ImportEvent) + Send>;

/// Collects the progress of a single import run
pub struct ProgressReporter {
    run_id: String,
    logs: Vec<String>,
    listener: Option<ProgressListener>,
}

impl ProgressReporter {
    /// Create a reporter with a fresh run id and no listener
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            logs: Vec::new(),
            listener: None,
        }
    }

    /// Create a reporter that forwards every event to the listener
    pub fn with_listener(listener: ProgressListener) -> Self {
        Self {
            listener: Some(listener),
            ..Self::new()
        }
    }

    /// Unique id of this run
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Record an event: render, append to the transcript, mirror, forward
    pub fn emit(&mut self, event: ImportEvent) {
        let line = event.to_string();
        tracing::debug!(run_id = %self.run_id, "{}", line);
        self.logs.push(line);
        if let Some(listener) = &self.listener {
            listener(&event);
        }
    }

    /// Transcript accumulated so far
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Drain the transcript for embedding into a result
    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("run_id", &self.run_id)
            .field("logs", &self.logs.len())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
