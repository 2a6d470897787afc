//! Status command - show overview of the task file

use priotask::config::Settings;
use priotask::output::OutputMode;

use super::open_scheduler;

/// Show task counts and where they are stored
pub fn status(settings: &Settings, output_mode: OutputMode) -> anyhow::Result<()> {
    let scheduler = open_scheduler(settings);
    let store = scheduler.store();
    let total = store.len();
    let pending = store.pending_count();
    let complete = total - pending;

    if output_mode == OutputMode::Json {
        let json = serde_json::json!({
            "file": store.location(),
            "date_order": scheduler.date_order().to_string(),
            "tasks": {
                "total": total,
                "pending": pending,
                "complete": complete
            }
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("File: {}", store.location());
        println!("Date order: {}", scheduler.date_order());
        println!();
        println!("Tasks: {total} total");
        println!("  {pending} pending");
        println!("  {complete} complete");
    }

    Ok(())
}
