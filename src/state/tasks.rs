//! Care task list state for a single garden.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{CareTask, TaskStatus};

/// Client-side status filter for the task list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    /// Whether a task passes this filter.
    #[must_use]
    pub fn allows(self, task: &CareTask) -> bool {
        match self {
            Self::All => true,
            Self::Pending => task.status == TaskStatus::Pending,
            Self::Completed => task.status == TaskStatus::Completed,
        }
    }

    /// Button label for the filter bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// Task list state: fetched items, fetch progress, and the active filter.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<CareTask>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: TaskFilter,
    /// Task id with a completion call in flight, if any.
    pub completing: Option<String>,
}

impl TasksState {
    /// Tasks that pass the active filter, in fetch order.
    #[must_use]
    pub fn visible(&self) -> Vec<CareTask> {
        self.items
            .iter()
            .filter(|t| self.filter.allows(t))
            .cloned()
            .collect()
    }

    /// Count of tasks still pending, regardless of filter.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count()
    }

    /// Replace the matching task with the record the backend returned from a
    /// successful completion call.
    pub fn apply_completion(&mut self, updated: CareTask) {
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == updated.id) {
            *existing = updated;
        }
        self.completing = None;
    }
}
