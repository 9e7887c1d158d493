//! Log subscriber setup.
//!
//! Stdout carries rendered frames, so logs go to stderr or to the file named by
//! `TASKS_TUI_LOG_FILE`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;
use crate::error::LoggingError;

const DEFAULT_DIRECTIVE: &str = "warn";
const DEBUG_DIRECTIVE: &str = "tasks_tui=debug,warn";

/// Filter directive derived from the environment configuration.
pub fn filter_directive(config: &EnvConfig) -> String {
    match (&config.log_filter, config.debug) {
        (Some(directive), _) => directive.clone(),
        (None, true) => DEBUG_DIRECTIVE.to_string(),
        (None, false) => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Installs the global `tracing` subscriber.
///
/// Returns [`LoggingError::AlreadyInstalled`] when another subscriber won the race; callers that
/// only want "logging if possible" can ignore that variant.
pub fn init(config: &EnvConfig) -> Result<(), LoggingError> {
    let directive = filter_directive(config);
    let filter =
        EnvFilter::try_new(&directive).map_err(|err| LoggingError::InvalidFilter {
            directive: directive.clone(),
            message: err.to_string(),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true);

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenLogFile {
                    path: path.clone(),
                    source,
                })?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|_| LoggingError::AlreadyInstalled)
}
