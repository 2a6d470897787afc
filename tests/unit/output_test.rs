//! Tests for output formatting

use priotask::adapters::MemoryTaskRepository;
use priotask::core::models::Priority;
use priotask::core::services::Scheduler;
use priotask::output::{CompleteResult, TaskInfo, ViewResult};

use crate::common::fixtures::{TaskBuilder, task};

fn human(result: &ViewResult) -> String {
    let mut out = Vec::new();
    result.write_human(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_view_result_from_view() {
    let scheduler = Scheduler::open(MemoryTaskRepository::with_tasks(vec![
        task("low", Priority::Low, "2024-01-01"),
        task("top", Priority::Critical, "2024-02-01"),
    ]));
    let result = ViewResult::from(&scheduler.priority_view());

    assert_eq!(result.total, 2);
    assert_eq!(result.tasks[0].number, Some(1));
    assert_eq!(result.tasks[0].title, "top");
    assert_eq!(result.tasks[0].priority, "CRITICAL");
    assert_eq!(result.tasks[1].due_date, "2024-01-01");
}

#[test]
fn test_view_result_human_lists_tasks() {
    let scheduler = Scheduler::open(MemoryTaskRepository::with_tasks(vec![
        TaskBuilder::new("Plan trip")
            .description("book flights")
            .priority(Priority::High)
            .due("2024-08-01")
            .build(),
    ]));
    let out = human(&ViewResult::from(&scheduler.priority_view()));

    assert!(out.contains("1. Title: Plan trip"));
    assert!(out.contains("HIGH"));
    assert!(out.contains("Status: Pending"));
    assert!(out.contains("Due: 2024-08-01"));
    assert!(out.contains("Description: book flights"));
}

#[test]
fn test_view_result_human_empty() {
    let result = ViewResult {
        total: 0,
        tasks: Vec::new(),
    };
    assert_eq!(human(&result), "No pending tasks.\n");
}

#[test]
fn test_view_result_json_shape() {
    let info = TaskInfo::from_task(&task("x", Priority::Medium, "2024-04-04"), Some(3));
    let result = ViewResult {
        total: 1,
        tasks: vec![info],
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["tasks"][0]["number"], 3);
    assert_eq!(json["tasks"][0]["priority"], "MEDIUM");
    assert_eq!(json["tasks"][0]["status"], "Pending");
}

#[test]
fn test_task_info_without_number_omits_field() {
    let info = TaskInfo::from_task(&task("x", Priority::Low, "2024-04-04"), None);
    let json = serde_json::to_value(&info).unwrap();
    assert!(json.get("number").is_none());
}

#[test]
fn test_complete_result_json() {
    let result = CompleteResult {
        success: true,
        number: 2,
        title: "Pay rent".to_string(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["title"], "Pay rent");
}

#[test]
fn test_view_result_write_json() {
    let scheduler = Scheduler::open(MemoryTaskRepository::with_tasks(vec![task("x", Priority::High, "2024-04-04")]));
    let mut out = Vec::new();
    ViewResult::from(&scheduler.priority_view()).write_json(&mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["tasks"][0]["number"], 1);
    assert!(out.ends_with(b"\n"));
}

#[test]
fn test_view_result_write_error_is_returned() {
    struct Closed;
    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let scheduler = Scheduler::open(MemoryTaskRepository::with_tasks(vec![task("x", Priority::Low, "2024-04-04")]));
    let result = ViewResult::from(&scheduler.priority_view());
    assert!(result.write_human(&mut Closed).is_err());
    assert!(result.write_json(&mut Closed).is_err());
}
