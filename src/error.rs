//! Error types.

use std::io;

use thiserror::Error;

use crate::task::TaskId;

/// Failures of task collection operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("no task with id {0}")]
    UnknownTask(TaskId),
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("a task titled {0:?} already exists")]
    DuplicateTitle(String),
}

/// Failures installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid log filter {directive:?}: {message}")]
    InvalidFilter { directive: String, message: String },
    #[error("a global log subscriber is already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::TaskError;
    use crate::task::TaskId;

    #[test]
    fn task_errors_render_readable_messages() {
        assert_eq!(TaskError::UnknownTask(TaskId::new(7)).to_string(), "no task with id #7");
        assert_eq!(
            TaskError::DuplicateTitle("milk".to_string()).to_string(),
            "a task titled \"milk\" already exists"
        );
    }
}
