use super::*;
use crate::net::types::TaskPriority;

fn task(id: &str, status: TaskStatus) -> CareTask {
    CareTask {
        id: id.to_owned(),
        title: format!("Task {id}"),
        task_type: "watering".to_owned(),
        priority: TaskPriority::Medium,
        due_date: None,
        status,
        description: None,
    }
}

// =============================================================
// TaskFilter
// =============================================================

#[test]
fn filter_default_is_all() {
    assert_eq!(TaskFilter::default(), TaskFilter::All);
}

#[test]
fn filter_all_allows_everything() {
    assert!(TaskFilter::All.allows(&task("t-1", TaskStatus::Pending)));
    assert!(TaskFilter::All.allows(&task("t-2", TaskStatus::Completed)));
}

#[test]
fn filter_partitions_by_status() {
    let pending = task("t-1", TaskStatus::Pending);
    let completed = task("t-2", TaskStatus::Completed);
    assert!(TaskFilter::Pending.allows(&pending));
    assert!(!TaskFilter::Pending.allows(&completed));
    assert!(TaskFilter::Completed.allows(&completed));
    assert!(!TaskFilter::Completed.allows(&pending));
}

#[test]
fn filter_labels_are_stable() {
    assert_eq!(TaskFilter::All.label(), "All");
    assert_eq!(TaskFilter::Pending.label(), "Pending");
    assert_eq!(TaskFilter::Completed.label(), "Completed");
}

// =============================================================
// TasksState
// =============================================================

#[test]
fn visible_respects_active_filter() {
    let state = TasksState {
        items: vec![
            task("t-1", TaskStatus::Pending),
            task("t-2", TaskStatus::Completed),
            task("t-3", TaskStatus::Pending),
        ],
        filter: TaskFilter::Pending,
        ..TasksState::default()
    };
    let visible = state.visible();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|t| t.status == TaskStatus::Pending));
}

#[test]
fn pending_count_ignores_filter() {
    let state = TasksState {
        items: vec![
            task("t-1", TaskStatus::Pending),
            task("t-2", TaskStatus::Completed),
        ],
        filter: TaskFilter::Completed,
        ..TasksState::default()
    };
    assert_eq!(state.pending_count(), 1);
}

#[test]
fn apply_completion_replaces_matching_task() {
    let mut state = TasksState {
        items: vec![
            task("t-1", TaskStatus::Pending),
            task("t-2", TaskStatus::Pending),
        ],
        completing: Some("t-1".to_owned()),
        ..TasksState::default()
    };
    state.apply_completion(task("t-1", TaskStatus::Completed));
    assert_eq!(state.items[0].status, TaskStatus::Completed);
    assert_eq!(state.items[1].status, TaskStatus::Pending);
    assert_eq!(state.completing, None);
}

#[test]
fn apply_completion_with_unknown_id_only_clears_in_flight_marker() {
    let mut state = TasksState {
        items: vec![task("t-1", TaskStatus::Pending)],
        completing: Some("t-404".to_owned()),
        ..TasksState::default()
    };
    state.apply_completion(task("t-404", TaskStatus::Completed));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].status, TaskStatus::Pending);
    assert_eq!(state.completing, None);
}
