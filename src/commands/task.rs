//! Task commands - add, list and complete

use priotask::config::Settings;
use priotask::core::models::Task;
use priotask::output::{AddResult, CompleteResult, OutputMode, TaskInfo, ViewResult};

use super::open_scheduler;

/// Add a task and save the task file
pub fn add(
    settings: &Settings,
    title: &str,
    description: &str,
    due: &str,
    priority: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let task = Task::from_input(title, description, due, priority)?;
    let info = TaskInfo::from_task(&task, None);

    let mut scheduler = open_scheduler(settings);
    scheduler.add_task(task)?;

    AddResult {
        success: true,
        task: info,
    }
    .render(mode);
    Ok(())
}

/// Show pending tasks by priority
pub fn list(settings: &Settings, mode: OutputMode) -> anyhow::Result<()> {
    let scheduler = open_scheduler(settings);
    ViewResult::from(&scheduler.priority_view()).render(mode)?;
    Ok(())
}

/// Complete the task at `number` in a freshly computed priority view
pub fn complete(settings: &Settings, number: usize, mode: OutputMode) -> anyhow::Result<()> {
    let mut scheduler = open_scheduler(settings);
    let view = scheduler.priority_view();
    let done = scheduler.complete_by_display_index(&view, number)?;

    CompleteResult::from(&done).render(mode);
    Ok(())
}
