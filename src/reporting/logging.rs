use crate::config::Config;
use log::{debug, error, info};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, actual_concurrency: usize) {
    let timeout = config.timeout.unwrap_or(30);

    info!("Configuration: concurrency={actual_concurrency}, timeout={timeout}s");
}

/// Log the classification split before probing starts
pub fn log_classification_start(candidate_count: usize, non_url_count: usize) {
    info!("Classified inputs: {candidate_count} candidate URL(s), {non_url_count} non-URL(s)");
}

/// Log individual probe responses for debugging
pub fn log_probe_result(url: &str, method: &str, status: Option<u16>, description: Option<&str>) {
    match (status, description) {
        (Some(status), _) => debug!("{method} {url} -> {status}"),
        (None, Some(desc)) => debug!("{method} {url} -> {desc}"),
        (None, None) => debug!("{method} {url} -> unknown"),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
