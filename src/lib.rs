//! verbprobe - classify strings as URLs and probe which HTTP methods each
//! endpoint accepts.
//!
//! The pipeline is a single pass: deduplicate the input strings, record a
//! diagnostic for everything that is not a well-formed http(s) URL, probe
//! the fixed method list against every candidate URL concurrently, and
//! print the merged report as pretty JSON.

pub mod config;
pub mod core;
pub mod probe;
pub mod reporting;
pub mod ui;

// Re-export the public surface
pub use crate::core::{Classification, MethodStatuses, Report, Result, VerbProbeError};
pub use crate::probe::{ClassifyInputs, Dispatcher, MethodProber, ProbeMethods};
