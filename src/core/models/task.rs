//! Task model
//!
//! A task is a titled piece of work with a priority and a due date.
//! Tasks have no ID: the store addresses them by slot.

use chrono::NaiveDate;
use serde::Serialize;

use super::{Priority, TaskStatus};
use crate::error::{Result, SchedulerError};

/// Date format accepted for due dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A task to be scheduled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// What needs to be done
    pub title: String,

    /// Free-form details, may be empty
    pub description: String,

    /// Calendar due date (past dates allowed)
    pub due_date: NaiveDate,

    /// Priority level
    pub priority: Priority,

    /// Current status
    pub status: TaskStatus,
}

impl Task {
    /// Create a pending task
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SchedulerError::EmptyTitle);
        }

        Ok(Self {
            title,
            description: description.into(),
            due_date,
            priority,
            status: TaskStatus::Pending,
        })
    }

    /// Create a pending task from raw text fields
    ///
    /// Rejects a priority outside the four names with `InvalidPriority`,
    /// even though prompts are expected to validate first.
    pub fn from_input(title: &str, description: &str, due_date: &str, priority: &str) -> Result<Self> {
        let priority: Priority = priority.parse()?;
        let due_date = parse_due_date(due_date)?;
        Self::new(title, description, due_date, priority)
    }

    /// Whether the task still shows up in the priority view
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    /// Mark the task complete
    ///
    /// Returns `false` if it was already complete (nothing changes).
    pub fn mark_complete(&mut self) -> bool {
        if self.status == TaskStatus::Complete {
            return false;
        }
        self.status = TaskStatus::Complete;
        true
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible dates like `2023-02-30`
pub fn parse_due_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    // chrono accepts unpadded fields and signed years; the format is strictly digits
    if !is_iso_date_shape(trimmed.as_bytes()) {
        return Err(SchedulerError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| SchedulerError::InvalidDate(s.to_string()))
}

/// `DDDD-DD-DD` with ASCII digits only
fn is_iso_date_shape(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
