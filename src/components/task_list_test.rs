use super::*;

#[test]
fn priority_class_maps_each_level() {
    assert_eq!(priority_class(TaskPriority::Low), "task-row__priority--low");
    assert_eq!(priority_class(TaskPriority::Medium), "task-row__priority--medium");
    assert_eq!(priority_class(TaskPriority::High), "task-row__priority--high");
}

#[test]
fn priority_label_is_lowercase() {
    assert_eq!(priority_label(TaskPriority::Low), "low");
    assert_eq!(priority_label(TaskPriority::Medium), "medium");
    assert_eq!(priority_label(TaskPriority::High), "high");
}

#[test]
fn due_label_formats_present_date() {
    assert_eq!(due_label(Some("2026-08-30")), "Due 2026-08-30");
}

#[test]
fn due_label_placeholder_for_missing_date() {
    assert_eq!(due_label(None), "No due date");
    assert_eq!(due_label(Some("")), "No due date");
    assert_eq!(due_label(Some("   ")), "No due date");
}
