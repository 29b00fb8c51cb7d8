use super::*;

#[test]
fn garden_endpoint_formats_expected_path() {
    assert_eq!(garden_endpoint("g-42"), "/api/gardens/g-42");
}

#[test]
fn optimization_endpoint_formats_expected_path() {
    assert_eq!(
        optimization_endpoint("g-42"),
        "/api/gardens/g-42/nutrient-optimization"
    );
}

#[test]
fn care_tasks_endpoint_formats_expected_path() {
    assert_eq!(care_tasks_endpoint("g-42"), "/api/gardens/g-42/care-tasks");
}

#[test]
fn complete_task_endpoint_formats_expected_path() {
    assert_eq!(complete_task_endpoint("t-7"), "/api/care-tasks/t-7/complete");
}

#[test]
fn request_failed_message_formats_action_and_status() {
    assert_eq!(request_failed_message("create garden", 422), "create garden failed: 422");
    assert_eq!(request_failed_message("task list", 500), "task list failed: 500");
}
