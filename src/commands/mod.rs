//! Command implementations

mod menu;
mod status;
mod task;

pub use menu::menu;
pub use status::status;
pub use task::{add, complete, list};

use priotask::adapters::JsonTaskRepository;
use priotask::config::Settings;
use priotask::core::services::Scheduler;

/// Load the scheduler for the configured task file
fn open_scheduler(settings: &Settings) -> Scheduler<JsonTaskRepository> {
    Scheduler::open(JsonTaskRepository::new(&settings.tasks_file)).with_date_order(settings.date_order)
}
