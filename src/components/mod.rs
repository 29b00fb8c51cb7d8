//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one concern each and communicate upward through
//! callbacks; pages own the composition and the route-scoped state.

pub mod create_garden;
pub mod create_seed_batch;
pub mod garden_card;
pub mod nutrient_panel;
pub mod task_list;
