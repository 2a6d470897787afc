//! Error types for the scheduler
//!
//! Load-time conditions (`NotFound`, `CorruptState`) are recovered by the
//! store into an empty task list. Everything else is returned to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the store, the scheduler and task construction
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// No persisted task file exists yet
    #[error("task file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The persisted task file could not be read or parsed
    #[error("task file {} is unreadable: {reason}", .path.display())]
    CorruptState {
        /// File that failed to load
        path: PathBuf,
        /// What went wrong while reading it
        reason: String,
    },

    /// Writing the task file failed
    #[error("failed to write tasks to {}: {source}", .path.display())]
    Io {
        /// File that could not be written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A display index outside the current view was requested
    #[error("task number {index} is out of range (valid: 1-{len})")]
    OutOfRange {
        /// Requested 1-based index
        index: usize,
        /// Number of entries in the view
        len: usize,
    },

    /// The view was computed before the store last changed
    #[error("task list changed since it was displayed (view {view}, current {current})")]
    StaleView {
        /// Generation the view was computed at
        view: u64,
        /// Current store generation
        current: u64,
    },

    /// Priority text outside LOW, MEDIUM, HIGH, CRITICAL
    #[error("invalid priority: {0}. Use: LOW, MEDIUM, HIGH, CRITICAL")]
    InvalidPriority(String),

    /// Due date text that is not a real `YYYY-MM-DD` date
    #[error("invalid due date: {0}. Use: YYYY-MM-DD")]
    InvalidDate(String),

    /// Date order text outside descending/ascending
    #[error("invalid date order: {0}. Use: descending, ascending")]
    InvalidDateOrder(String),

    /// Tasks need a title
    #[error("task title must not be empty")]
    EmptyTitle,
}

impl SchedulerError {
    /// Level to log a load failure at, or `None` if the store cannot recover from it
    ///
    /// A missing file is expected on first run; a corrupt one loses data.
    #[must_use]
    pub const fn load_log_level(&self) -> Option<log::Level> {
        match self {
            Self::NotFound(_) => Some(log::Level::Info),
            Self::CorruptState { .. } => Some(log::Level::Warn),
            _ => None,
        }
    }
}

/// Result alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
