//! JSON file task repository
//!
//! Implements the `TaskRepository` port with a single pretty-printed JSON
//! array, rewritten in full on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::record::TaskRecord;
use crate::core::models::Task;
use crate::core::ports::TaskRepository;
use crate::error::{Result, SchedulerError};

/// Task repository backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonTaskRepository {
    path: PathBuf,
}

impl JsonTaskRepository {
    /// Create a repository for the given file (which need not exist yet)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl std::fmt::Display) -> SchedulerError {
        SchedulerError::CorruptState {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn io(&self, source: std::io::Error) -> SchedulerError {
        SchedulerError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TaskRepository for JsonTaskRepository {
    fn read_all(&self) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SchedulerError::NotFound(self.path.clone()));
            },
            Err(e) => return Err(self.corrupt(e)),
        };

        let records: Vec<TaskRecord> = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;

        records
            .iter()
            .enumerate()
            .map(|(i, r)| r.to_task().map_err(|e| self.corrupt(format!("entry {}: {e}", i + 1))))
            .collect()
    }

    fn write_all(&self, tasks: &[Task]) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io(e))?;
            }
        }

        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from_task).collect();
        let content = serde_json::to_string_pretty(&records).map_err(|e| self.io(e.into()))?;
        fs::write(&self.path, content).map_err(|e| self.io(e))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
