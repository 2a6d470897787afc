//! Priority ordering
//!
//! Pending tasks are ordered by `(priority, due_date)`. Priority always sorts
//! highest first. The due date sorts latest first by default, matching the
//! long-standing behavior of the scheduler; [`DateOrder::Ascending`] puts
//! the nearest deadline first instead.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::models::Task;
use crate::error::SchedulerError;

/// Direction of the due-date component within a priority tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Later due dates first
    #[default]
    Descending,
    /// Earlier due dates first
    Ascending,
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Descending => write!(f, "descending"),
            Self::Ascending => write!(f, "ascending"),
        }
    }
}

impl std::str::FromStr for DateOrder {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "descending" | "desc" | "latest-first" => Ok(Self::Descending),
            "ascending" | "asc" | "earliest-first" => Ok(Self::Ascending),
            _ => Err(SchedulerError::InvalidDateOrder(s.to_string())),
        }
    }
}

/// Compare two tasks for display: `Less` means `a` is shown first
#[must_use]
pub fn compare_for_view(a: &Task, b: &Task, date_order: DateOrder) -> Ordering {
    let by_priority = b.priority.rank().cmp(&a.priority.rank());
    by_priority.then_with(|| match date_order {
        DateOrder::Descending => b.due_date.cmp(&a.due_date),
        DateOrder::Ascending => a.due_date.cmp(&b.due_date),
    })
}

/// Sort items in view order, keeping input order for equal keys
pub fn sort_for_view<T>(items: &mut [T], date_order: DateOrder, task: impl Fn(&T) -> &Task) {
    // slice::sort_by is stable
    items.sort_by(|a, b| compare_for_view(task(a), task(b), date_order));
}
