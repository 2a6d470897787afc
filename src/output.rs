//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Priority, Task};
use crate::core::services::{Completion, PriorityView};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A task as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    /// Display number (1-based), absent outside a view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<usize>,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Due date, `YYYY-MM-DD`
    pub due_date: String,
    /// Priority name
    pub priority: String,
    /// Status name
    pub status: String,
}

impl TaskInfo {
    /// Build from a task, with an optional display number
    #[must_use]
    pub fn from_task(task: &Task, number: Option<usize>) -> Self {
        Self {
            number,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.to_string(),
            priority: task.priority.to_string(),
            status: task.status.to_string(),
        }
    }
}

/// Result of a priority view listing
#[derive(Debug, Serialize)]
pub struct ViewResult {
    /// Number of pending tasks shown
    pub total: usize,
    /// Tasks in display order
    pub tasks: Vec<TaskInfo>,
}

impl From<&PriorityView> for ViewResult {
    fn from(view: &PriorityView) -> Self {
        Self {
            total: view.len(),
            tasks: view
                .entries()
                .iter()
                .map(|e| TaskInfo::from_task(&e.task, Some(e.display_index)))
                .collect(),
        }
    }
}

/// Result of adding a task
#[derive(Debug, Serialize)]
pub struct AddResult {
    /// Whether the task was saved
    pub success: bool,
    /// The task as saved
    pub task: TaskInfo,
}

/// Result of completing a task
#[derive(Debug, Serialize)]
pub struct CompleteResult {
    /// Whether the task was completed
    pub success: bool,
    /// Display number that was picked
    pub number: usize,
    /// Title of the completed task
    pub title: String,
}

impl From<&Completion> for CompleteResult {
    fn from(c: &Completion) -> Self {
        Self {
            success: true,
            number: c.display_index,
            title: c.title.clone(),
        }
    }
}

/// Priority label, highlighted for urgent tiers
fn priority_label(priority: Priority) -> String {
    match priority {
        Priority::Critical => format!("!! {}", priority.as_str().red().bold()),
        Priority::High => format!("! {}", priority.as_str().yellow()),
        Priority::Medium | Priority::Low => priority.as_str().to_string(),
    }
}

impl ViewResult {
    /// Render the result to stdout based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        let mut out = io::stdout().lock();
        match mode {
            OutputMode::Human => self.write_human(&mut out),
            OutputMode::Json => self.write_json(&mut out),
        }
    }

    /// Write the human-readable listing
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.tasks.is_empty() {
            return writeln!(out, "No pending tasks.");
        }

        writeln!(out, "\n--- Pending Tasks (by priority) ---")?;
        for t in &self.tasks {
            let number = t.number.map_or_else(String::new, |n| format!("{n}. "));
            let priority = t.priority.parse().map_or_else(|_| t.priority.clone(), priority_label);
            writeln!(out, "{number}Title: {}", t.title)?;
            writeln!(out, "  > Priority: {priority} | Status: {} | Due: {}", t.status, t.due_date)?;
            if !t.description.is_empty() {
                writeln!(out, "  > Description: {}", t.description)?;
            }
        }
        Ok(())
    }

    /// Write the listing as pretty-printed JSON
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

impl AddResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Task added: {}", self.task.title);
                println!("  Priority: {}", self.task.priority);
                println!("  Due:      {}", self.task.due_date);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl CompleteResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("Task '{}' marked as complete!", self.title),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
