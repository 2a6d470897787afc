//! On-disk task record
//!
//! Kept separate from [`Task`] so the file format can stay stable while the
//! model evolves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::models::{Priority, Task, TaskStatus};

/// Task entry in the JSON file (serialization format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task title
    pub title: String,
    /// Task description
    #[serde(default)]
    pub description: String,
    /// Due date, `YYYY-MM-DD`
    #[serde(rename = "dueDate", alias = "due_date")]
    pub due_date: NaiveDate,
    /// Status: Pending, Complete
    #[serde(default = "default_status")]
    pub status: String,
    /// Priority: LOW, MEDIUM, HIGH, CRITICAL
    pub priority: String,
}

fn default_status() -> String {
    TaskStatus::Pending.to_string()
}

impl TaskRecord {
    /// Convert to the domain model, rejecting invalid fields
    pub fn to_task(&self) -> Result<Task, String> {
        let priority: Priority = self.priority.parse().map_err(|e| format!("{e}"))?;
        let status: TaskStatus = self.status.parse()?;
        let mut task = Task::new(self.title.clone(), self.description.clone(), self.due_date, priority)
            .map_err(|e| e.to_string())?;
        task.status = status;
        Ok(task)
    }

    /// Create from the domain model
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            status: task.status.to_string(),
            priority: task.priority.to_string(),
        }
    }
}
