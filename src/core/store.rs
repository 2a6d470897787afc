//! Task store
//!
//! Owns the canonical, insertion-ordered task sequence. It knows nothing
//! about priority; ordering lives in the scheduler.

use crate::core::models::Task;
use crate::core::ports::TaskRepository;
use crate::error::{Result, SchedulerError};

/// Stable handle to a task in the store (its index in insertion order)
///
/// Tasks are never removed, so a slot stays valid for the life of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskSlot(usize);

impl TaskSlot {
    /// Position in the canonical sequence
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Canonical task collection backed by a repository
#[derive(Debug)]
pub struct TaskStore<R> {
    repo: R,
    tasks: Vec<Task>,
    generation: u64,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Create an empty store without reading the repository
    #[must_use]
    pub const fn empty(repo: R) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
            generation: 0,
        }
    }

    /// Load persisted tasks, starting empty if there are none or they are unreadable
    ///
    /// Never fails. A missing file and a corrupt file are logged differently.
    pub fn load(repo: R) -> Self {
        let tasks = match repo.read_all() {
            Ok(tasks) => {
                log::debug!("Loaded {} task(s) from {}", tasks.len(), repo.describe());
                tasks
            },
            Err(err) => {
                let level = err.load_log_level().unwrap_or(log::Level::Error);
                if matches!(err, SchedulerError::NotFound(_)) {
                    log::log!(level, "Task file not found at {}. Starting with an empty scheduler.", repo.describe());
                } else {
                    log::log!(level, "Error loading task file: {err}. Starting with an empty scheduler.");
                }
                Vec::new()
            },
        };

        Self {
            repo,
            tasks,
            generation: 0,
        }
    }

    /// Insert a task at the end of the sequence
    pub fn append(&mut self, task: Task) -> TaskSlot {
        self.tasks.push(task);
        TaskSlot(self.tasks.len() - 1)
    }

    /// Write the full sequence, in insertion order, to the repository
    pub fn persist(&self) -> Result<()> {
        self.repo.write_all(&self.tasks)?;
        log::debug!("Saved {} task(s) to {}", self.tasks.len(), self.repo.describe());
        Ok(())
    }

    /// All tasks in insertion order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task at a slot
    #[must_use]
    pub fn get(&self, slot: TaskSlot) -> Option<&Task> {
        self.tasks.get(slot.0)
    }

    /// Iterate tasks with their slots
    pub fn iter(&self) -> impl Iterator<Item = (TaskSlot, &Task)> {
        self.tasks.iter().enumerate().map(|(i, t)| (TaskSlot(i), t))
    }

    /// Number of tasks, complete or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of pending tasks
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_pending()).count()
    }

    /// Counter bumped on every committed add or completion
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Storage location, for messages
    #[must_use]
    pub fn location(&self) -> String {
        self.repo.describe()
    }

    pub(crate) fn get_mut(&mut self, slot: TaskSlot) -> Option<&mut Task> {
        self.tasks.get_mut(slot.0)
    }

    /// Drop the most recent append after a failed flush
    pub(crate) fn undo_append(&mut self, slot: TaskSlot) {
        if slot.0 + 1 == self.tasks.len() {
            self.tasks.pop();
        }
    }

    pub(crate) const fn bump_generation(&mut self) {
        self.generation += 1;
    }
}
