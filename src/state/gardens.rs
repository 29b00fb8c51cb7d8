//! Garden list state for the dashboard.

#[cfg(test)]
#[path = "gardens_test.rs"]
mod gardens_test;

use crate::net::types::Garden;

/// Garden list state: fetched items plus fetch/delete progress.
#[derive(Clone, Debug, Default)]
pub struct GardensState {
    pub items: Vec<Garden>,
    pub loading: bool,
    pub error: Option<String>,
    /// Garden id awaiting delete confirmation, if any.
    pub pending_delete: Option<String>,
}

impl GardensState {
    /// Replace the list with a fresh fetch result.
    pub fn set_items(&mut self, items: Vec<Garden>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. Keeps the previous items so a transient error
    /// does not blank the page.
    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Remove a garden from the view list after a confirmed delete succeeds.
    pub fn remove(&mut self, garden_id: &str) {
        self.items.retain(|g| g.id != garden_id);
        self.pending_delete = None;
    }
}
