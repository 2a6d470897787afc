//! Tests for the JSON task repository

use std::fs;

use priotask::SchedulerError;
use priotask::adapters::JsonTaskRepository;
use priotask::core::models::{Priority, TaskStatus};
use priotask::core::ports::TaskRepository;
use priotask::core::services::Scheduler;
use tempfile::TempDir;

use crate::common::fixtures::{TaskBuilder, date, task};

#[test]
fn test_read_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let repo = JsonTaskRepository::new(temp.path().join("tasks.json"));

    assert!(matches!(repo.read_all(), Err(SchedulerError::NotFound(_))));
}

#[test]
fn test_read_garbage_is_corrupt() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonTaskRepository::new(&path).read_all().unwrap_err();
    assert!(matches!(err, SchedulerError::CorruptState { .. }));
}

#[test]
fn test_read_invalid_priority_is_corrupt() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    fs::write(
        &path,
        r#"[{"title": "x", "description": "", "dueDate": "2024-01-01", "status": "Pending", "priority": "URGENT"}]"#,
    )
    .unwrap();

    let err = JsonTaskRepository::new(&path).read_all().unwrap_err();
    assert!(err.to_string().contains("entry 1"));
}

#[test]
fn test_read_invalid_date_is_corrupt() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    fs::write(
        &path,
        r#"[{"title": "x", "description": "", "dueDate": "2024-02-30", "status": "Pending", "priority": "LOW"}]"#,
    )
    .unwrap();

    assert!(matches!(
        JsonTaskRepository::new(&path).read_all(),
        Err(SchedulerError::CorruptState { .. })
    ));
}

#[test]
fn test_write_uses_documented_field_names() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    let repo = JsonTaskRepository::new(&path);

    repo.write_all(&[TaskBuilder::new("Plan")
        .description("roadmap")
        .priority(Priority::Critical)
        .due("2024-05-01")
        .complete()
        .build()])
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &json[0];
    assert_eq!(entry["title"], "Plan");
    assert_eq!(entry["description"], "roadmap");
    assert_eq!(entry["dueDate"], "2024-05-01");
    assert_eq!(entry["status"], "Complete");
    assert_eq!(entry["priority"], "CRITICAL");
}

#[test]
fn test_read_accepts_snake_case_due_date_and_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    fs::write(&path, r#"[{"title": "old", "due_date": "2023-12-24", "priority": "high"}]"#).unwrap();

    let tasks = JsonTaskRepository::new(&path).read_all().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].due_date, date("2023-12-24"));
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[0].status, TaskStatus::Pending);
    assert!(tasks[0].description.is_empty());
}

#[test]
fn test_round_trip_preserves_fields_and_order() {
    let temp = TempDir::new().unwrap();
    let repo = JsonTaskRepository::new(temp.path().join("tasks.json"));
    let tasks = vec![
        task("A", Priority::High, "2024-06-01"),
        TaskBuilder::new("B").priority(Priority::Critical).due("2024-05-01").complete().build(),
        TaskBuilder::new("C").description("with \"quotes\"").priority(Priority::Low).build(),
    ];

    repo.write_all(&tasks).unwrap();
    assert_eq!(repo.read_all().unwrap(), tasks);
}

#[test]
fn test_write_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a/b/tasks.json");
    let repo = JsonTaskRepository::new(&path);

    repo.write_all(&[]).unwrap();
    assert!(path.exists());
    assert!(repo.read_all().unwrap().is_empty());
}

#[test]
fn test_write_failure_is_io() {
    let temp = TempDir::new().unwrap();
    // A directory where the file should be makes the write fail
    let path = temp.path().join("tasks.json");
    fs::create_dir(&path).unwrap();

    let err = JsonTaskRepository::new(&path).write_all(&[]).unwrap_err();
    assert!(matches!(err, SchedulerError::Io { .. }));
}

#[test]
fn test_scheduler_survives_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");

    {
        let mut scheduler = Scheduler::open(JsonTaskRepository::new(&path));
        scheduler.add_task(task("A", Priority::High, "2024-06-01")).unwrap();
        scheduler.add_task(task("B", Priority::Critical, "2024-05-01")).unwrap();
        scheduler.add_task(task("C", Priority::High, "2024-06-01")).unwrap();
        let view = scheduler.priority_view();
        scheduler.complete_by_display_index(&view, 1).unwrap();
    }

    let scheduler = Scheduler::open(JsonTaskRepository::new(&path));
    assert_eq!(scheduler.tasks().len(), 3);
    assert_eq!(scheduler.tasks()[1].status, TaskStatus::Complete);

    let titles: Vec<String> = scheduler.priority_view().entries().iter().map(|e| e.task.title.clone()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn test_scheduler_starts_empty_on_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let scheduler = Scheduler::open(JsonTaskRepository::new(&path));
    assert!(scheduler.tasks().is_empty());
}
