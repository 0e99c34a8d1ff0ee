//! Logging and run reporting

pub mod logging;
