//! Care task list with status filtering and completion.

#[cfg(test)]
#[path = "task_list_test.rs"]
mod task_list_test;

use leptos::prelude::*;

use crate::net::types::{CareTask, TaskPriority, TaskStatus};
use crate::state::tasks::{TaskFilter, TasksState};

/// CSS modifier class for a task's priority.
fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "task-row__priority--low",
        TaskPriority::Medium => "task-row__priority--medium",
        TaskPriority::High => "task-row__priority--high",
    }
}

/// Display label for a task's priority.
fn priority_label(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "low",
        TaskPriority::Medium => "medium",
        TaskPriority::High => "high",
    }
}

/// Display label for an optional due date.
fn due_label(due_date: Option<&str>) -> String {
    match due_date {
        Some(date) if !date.trim().is_empty() => format!("Due {date}"),
        _ => "No due date".to_owned(),
    }
}

/// Fetch-on-mount task list for one garden.
#[component]
pub fn TaskList(garden_id: String) -> impl IntoView {
    let tasks = RwSignal::new(TasksState {
        loading: true,
        ..TasksState::default()
    });

    #[cfg(feature = "hydrate")]
    {
        let garden_id = garden_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_care_tasks(&garden_id).await {
                Ok(items) => tasks.update(|t| {
                    t.items = items;
                    t.loading = false;
                }),
                Err(e) => {
                    log::error!("care task fetch failed: {e}");
                    tasks.update(|t| {
                        t.loading = false;
                        t.error = Some(e);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = garden_id;
    }

    let on_complete = Callback::new(move |task_id: String| {
        if tasks.get().completing.is_some() {
            return;
        }
        tasks.update(|t| t.completing = Some(task_id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::complete_task(&task_id).await {
                Ok(updated) => tasks.update(|t| t.apply_completion(updated)),
                Err(e) => {
                    log::error!("complete task failed: {e}");
                    tasks.update(|t| {
                        t.completing = None;
                        t.error = Some(e);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task_id;
        }
    });

    view! {
        <section class="task-list">
            <header class="task-list__header">
                <h2 class="task-list__title">"Care Tasks"</h2>
                <span class="task-list__pending-count">
                    {move || format!("{} pending", tasks.get().pending_count())}
                </span>
            </header>

            <div class="task-list__filters">
                {[TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed]
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class="btn task-list__filter"
                                class:task-list__filter--active=move || tasks.get().filter == filter
                                on:click=move |_| tasks.update(|t| t.filter = filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || tasks.get().error.is_some()>
                <p class="task-list__error">{move || tasks.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !tasks.get().loading
                fallback=move || view! { <p>"Loading tasks..."</p> }
            >
                {move || {
                    let visible = tasks.get().visible();
                    if visible.is_empty() {
                        view! { <p class="task-list__empty">"No tasks here."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="task-list__rows">
                                {visible
                                    .into_iter()
                                    .map(|task| task_row(task, tasks, on_complete))
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </section>
    }
}

fn task_row(task: CareTask, tasks: RwSignal<TasksState>, on_complete: Callback<String>) -> impl IntoView {
    let is_pending = task.status == TaskStatus::Pending;
    let completed = !is_pending;
    let completing = Signal::derive({
        let id = task.id.clone();
        move || tasks.get().completing.as_deref() == Some(id.as_str())
    });
    let complete_id = task.id.clone();
    let description = task.description.clone().unwrap_or_default();
    let has_description = !description.is_empty();

    view! {
        <li class="task-row" class:task-row--completed=completed>
            <div class="task-row__main">
                <span class="task-row__title">{task.title.clone()}</span>
                <span class="task-row__type">{task.task_type.clone()}</span>
                <span class=format!("task-row__priority {}", priority_class(task.priority))>
                    {priority_label(task.priority)}
                </span>
            </div>
            <div class="task-row__meta">
                <span class="task-row__due">{due_label(task.due_date.as_deref())}</span>
                <Show when=move || has_description>
                    <span class="task-row__description">{description.clone()}</span>
                </Show>
            </div>
            <Show when=move || is_pending>
                {
                    let complete_id = complete_id.clone();
                    view! {
                        <button
                            class="btn btn--primary task-row__complete"
                            disabled=move || completing.get()
                            on:click=move |_| on_complete.run(complete_id.clone())
                        >
                            {move || if completing.get() { "Completing..." } else { "Complete" }}
                        </button>
                    }
                }
            </Show>
        </li>
    }
}
