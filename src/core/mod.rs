//! Core domain types and error handling
//!
//! This module contains the fundamental types, constants and error
//! definitions shared across the application.

pub mod constants;
pub mod error;
pub mod report;

// Re-export commonly used items
pub use error::{Result, VerbProbeError};
pub use report::{Classification, MethodStatuses, Report};
