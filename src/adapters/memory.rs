//! In-memory task repository
//!
//! Keeps the last written snapshot in a `RefCell`. Useful for tests and
//! for running the scheduler without touching disk.

use std::cell::RefCell;

use crate::core::models::Task;
use crate::core::ports::TaskRepository;
use crate::error::{Result, SchedulerError};

/// Repository holding its snapshot in memory
#[derive(Debug, Default)]
pub struct MemoryTaskRepository {
    snapshot: RefCell<Option<Vec<Task>>>,
    writes: RefCell<usize>,
}

impl MemoryTaskRepository {
    /// Repository with nothing persisted yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `tasks`
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            snapshot: RefCell::new(Some(tasks)),
            writes: RefCell::new(0),
        }
    }

    /// Last persisted snapshot, if any
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<Task>> {
        self.snapshot.borrow().clone()
    }

    /// Number of successful writes
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn read_all(&self) -> Result<Vec<Task>> {
        self.snapshot
            .borrow()
            .clone()
            .ok_or_else(|| SchedulerError::NotFound("<memory>".into()))
    }

    fn write_all(&self, tasks: &[Task]) -> Result<()> {
        *self.snapshot.borrow_mut() = Some(tasks.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
