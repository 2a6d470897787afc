//! Task repository port
//!
//! Defines the interface for durable task storage.

use crate::core::models::Task;
use crate::error::Result;

/// Durable storage for the full task sequence
///
/// Implementations read and write the whole list at once; there is no
/// incremental format. Order on disk is store insertion order.
pub trait TaskRepository {
    /// Read every persisted task in insertion order
    ///
    /// Returns `NotFound` when nothing was persisted yet and `CorruptState`
    /// when persisted data cannot be read or parsed.
    fn read_all(&self) -> Result<Vec<Task>>;

    /// Replace the persisted snapshot with `tasks`
    ///
    /// Returns `Io` on write failure.
    fn write_all(&self, tasks: &[Task]) -> Result<()>;

    /// Human-readable location for log messages
    fn describe(&self) -> String;
}

impl<R: TaskRepository + ?Sized> TaskRepository for &R {
    fn read_all(&self) -> Result<Vec<Task>> {
        (**self).read_all()
    }

    fn write_all(&self, tasks: &[Task]) -> Result<()> {
        (**self).write_all(tasks)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
