//! Import pipeline
//!
//! Run-scoped progress reporting, plan/suite resolution, and the sequential
//! orchestrator that turns parsed scenarios into linked test cases.

pub mod progress;
pub mod resolver;
pub mod service;

pub use progress::{ImportEvent, ProgressListener, ProgressReporter};
pub use resolver::TargetResolver;
pub use service::ImportService;
