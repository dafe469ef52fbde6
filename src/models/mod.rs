//! Data Models
//!
//! Contains all data structures used throughout the application.

pub mod import;
pub mod integration;

pub use import::*;
pub use integration::*;
