//! Priority scheduler
//!
//! Derives the display order of pending tasks from the store and resolves
//! "the Nth task I was just shown" back to the exact store record.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use priotask::adapters::memory::MemoryTaskRepository;
//! use priotask::core::models::{Priority, Task};
//! use priotask::core::services::Scheduler;
//!
//! let mut scheduler = Scheduler::open(MemoryTaskRepository::new());
//! let due = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! scheduler.add_task(Task::new("Ship", "", due, Priority::High).unwrap()).unwrap();
//! scheduler.add_task(Task::new("Fix", "", due, Priority::Critical).unwrap()).unwrap();
//!
//! let view = scheduler.priority_view();
//! assert_eq!(view.entries()[0].task.title, "Fix");
//!
//! let done = scheduler.complete_by_display_index(&view, 1).unwrap();
//! assert_eq!(done.title, "Fix");
//! assert_eq!(scheduler.priority_view().len(), 1);
//! ```

use serde::Serialize;

use super::ordering::{DateOrder, sort_for_view};
use crate::core::models::{Task, TaskStatus};
use crate::core::ports::TaskRepository;
use crate::core::store::{TaskSlot, TaskStore};
use crate::error::{Result, SchedulerError};

/// One row of a priority view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEntry {
    /// 1-based position in this view
    pub display_index: usize,
    /// Store slot of the task
    #[serde(skip)]
    pub slot: TaskSlot,
    /// Snapshot of the task at the time the view was computed
    pub task: Task,
}

/// Pending tasks in display order, tied to one store generation
///
/// Display indices are single-use: any add or completion after the view is
/// computed invalidates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityView {
    generation: u64,
    entries: Vec<ViewEntry>,
}

impl PriorityView {
    /// Rows in display order
    #[must_use]
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// Store generation this view was computed at
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no pending tasks to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row for a 1-based display index
    #[must_use]
    pub fn get(&self, display_index: usize) -> Option<&ViewEntry> {
        display_index.checked_sub(1).and_then(|i| self.entries.get(i))
    }
}

/// Outcome of a successful completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Display index the caller picked
    pub display_index: usize,
    /// Store slot that was completed
    pub slot: TaskSlot,
    /// Title of the completed task, for confirmation
    pub title: String,
}

/// Scheduler over an exclusively owned task store
#[derive(Debug)]
pub struct Scheduler<R> {
    store: TaskStore<R>,
    date_order: DateOrder,
}

impl<R: TaskRepository> Scheduler<R> {
    /// Take ownership of a store
    #[must_use]
    pub fn new(store: TaskStore<R>) -> Self {
        Self {
            store,
            date_order: DateOrder::default(),
        }
    }

    /// Load the store from a repository and wrap it
    pub fn open(repo: R) -> Self {
        Self::new(TaskStore::load(repo))
    }

    /// Set the direction of the due-date component
    #[must_use]
    pub fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    /// Current due-date direction
    #[must_use]
    pub const fn date_order(&self) -> DateOrder {
        self.date_order
    }

    /// Read-only access to the store
    #[must_use]
    pub const fn store(&self) -> &TaskStore<R> {
        &self.store
    }

    /// All tasks in insertion order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Append a task and flush the store
    ///
    /// If the flush fails the task is removed again and the error returned.
    pub fn add_task(&mut self, task: Task) -> Result<TaskSlot> {
        let slot = self.store.append(task);
        if let Err(err) = self.store.persist() {
            self.store.undo_append(slot);
            return Err(err);
        }
        self.store.bump_generation();
        log::debug!("Added task at slot {}", slot.index());
        Ok(slot)
    }

    /// Pending tasks, highest priority first, stable on ties
    #[must_use]
    pub fn priority_view(&self) -> PriorityView {
        let mut pending: Vec<(TaskSlot, &Task)> =
            self.store.iter().filter(|(_, t)| t.is_pending()).collect();
        sort_for_view(&mut pending, self.date_order, |entry| entry.1);

        let entries = pending
            .into_iter()
            .enumerate()
            .map(|(i, (slot, task))| ViewEntry {
                display_index: i + 1,
                slot,
                task: task.clone(),
            })
            .collect();

        PriorityView {
            generation: self.store.generation(),
            entries,
        }
    }

    /// Complete the task shown at 1-based `display_index` in `view`
    ///
    /// Resolution goes through the entry's store slot, so identical tasks
    /// are never confused. Nothing is mutated unless the flush succeeds.
    pub fn complete_by_display_index(
        &mut self,
        view: &PriorityView,
        display_index: usize,
    ) -> Result<Completion> {
        let entry = view.get(display_index).ok_or(SchedulerError::OutOfRange {
            index: display_index,
            len: view.len(),
        })?;

        if view.generation != self.store.generation() {
            return Err(SchedulerError::StaleView {
                view: view.generation,
                current: self.store.generation(),
            });
        }

        let slot = entry.slot;
        let current = self.store.generation();
        let (title, changed) = {
            let task = self.store.get_mut(slot).ok_or(SchedulerError::StaleView {
                view: view.generation,
                current,
            })?;
            (task.title.clone(), task.mark_complete())
        };

        if let Err(err) = self.store.persist() {
            if changed {
                if let Some(task) = self.store.get_mut(slot) {
                    task.status = TaskStatus::Pending;
                }
            }
            return Err(err);
        }

        self.store.bump_generation();
        log::debug!("Completed task '{title}' at slot {}", slot.index());

        Ok(Completion {
            display_index,
            slot,
            title,
        })
    }
}
