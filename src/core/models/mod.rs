//! Domain models for the scheduler
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - a titled piece of work with a due date
//! - [`Priority`] - LOW, MEDIUM, HIGH, CRITICAL with an explicit rank
//! - [`TaskStatus`] - Pending or Complete

mod priority;
mod status;
mod task;

pub use priority::Priority;
pub use status::TaskStatus;
pub use task::{DATE_FORMAT, Task, parse_due_date};
