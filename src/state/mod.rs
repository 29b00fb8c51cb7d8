//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`gardens`, `tasks`, form models, etc.) so
//! individual components can depend on small focused models. Everything here
//! is plain data plus pure functions; Leptos signals wrap these types at the
//! component layer, which keeps the logic testable off-browser.

pub mod garden_form;
pub mod gardens;
pub mod optimization;
pub mod seed_batch_form;
pub mod tasks;
pub mod ui;
