//! Business logic services
//!
//! - [`ordering`] - the composite `(priority, due_date)` view order
//! - [`scheduler`] - priority views and completion by display index

pub mod ordering;
pub mod scheduler;

pub use ordering::{DateOrder, compare_for_view, sort_for_view};
pub use scheduler::{Completion, PriorityView, Scheduler, ViewEntry};
