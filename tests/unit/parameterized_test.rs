//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use priotask::core::models::{Priority, parse_due_date};
use priotask::core::services::DateOrder;
use priotask::interactive::MenuChoice;
use test_case::test_case;

// =============================================================================
// Priority Parsing Tests
// =============================================================================

#[test_case("LOW", Priority::Low ; "upper low")]
#[test_case("medium", Priority::Medium ; "lower medium")]
#[test_case("High", Priority::High ; "mixed high")]
#[test_case("  critical ", Priority::Critical ; "padded critical")]
fn test_priority_parse(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[test_case(Priority::Low, "LOW")]
#[test_case(Priority::Medium, "MEDIUM")]
#[test_case(Priority::High, "HIGH")]
#[test_case(Priority::Critical, "CRITICAL")]
fn test_priority_display(priority: Priority, expected: &str) {
    assert_eq!(priority.to_string(), expected);
}

// =============================================================================
// Due Date Tests
// =============================================================================

#[test_case("2024-06-01", true ; "plain date")]
#[test_case("2024-02-29", true ; "leap day")]
#[test_case("2023-02-29", false ; "not a leap year")]
#[test_case("2024-13-01", false ; "month out of range")]
#[test_case("2024-6-1", false ; "unpadded fields")]
#[test_case("06/01/2024", false ; "wrong format")]
#[test_case("", false ; "empty")]
#[test_case("+202-01-01", false ; "plus signed year")]
#[test_case("-002-01-01", false ; "minus signed year")]
#[test_case("2024-01-0x", false ; "letter in day")]
#[test_case(" 2024-06-01 ", true ; "surrounding whitespace")]
fn test_due_date_validation(input: &str, valid: bool) {
    assert_eq!(parse_due_date(input).is_ok(), valid);
}

// =============================================================================
// Date Order / Menu Parsing Tests
// =============================================================================

#[test_case("descending", DateOrder::Descending)]
#[test_case("DESC", DateOrder::Descending)]
#[test_case("ascending", DateOrder::Ascending)]
#[test_case("asc", DateOrder::Ascending)]
fn test_date_order_parse(input: &str, expected: DateOrder) {
    assert_eq!(input.parse::<DateOrder>().unwrap(), expected);
}

#[test_case("1", MenuChoice::Add)]
#[test_case("2", MenuChoice::View)]
#[test_case(" 3 ", MenuChoice::Complete)]
#[test_case("4", MenuChoice::Exit)]
fn test_menu_choice_parse(input: &str, expected: MenuChoice) {
    assert_eq!(input.parse::<MenuChoice>().unwrap(), expected);
}

#[test_case("0" ; "zero")]
#[test_case("5" ; "five")]
#[test_case("add" ; "word")]
fn test_menu_choice_invalid(input: &str) {
    assert!(input.parse::<MenuChoice>().is_err());
}
