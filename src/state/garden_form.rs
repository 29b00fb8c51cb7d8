//! Form model for the create-garden dialog.
//!
//! DESIGN
//! ======
//! The dialog holds one `GardenForm` in a signal and binds inputs to its
//! fields. Visibility rules and payload validation live here as pure
//! functions so the submit path is testable without a DOM.

#[cfg(test)]
#[path = "garden_form_test.rs"]
mod garden_form_test;

use crate::net::types::{GardenType, NewGarden};

/// Controlled input state for the create-garden form.
#[derive(Clone, Debug)]
pub struct GardenForm {
    pub name: String,
    pub garden_type: GardenType,
    pub is_hydroponic: bool,
    pub location: String,
    pub light_source: String,
    pub hydro_system_type: String,
    pub description: String,
    /// A submit is in flight; inputs and the submit button are disabled.
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for GardenForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            garden_type: GardenType::Outdoor,
            is_hydroponic: false,
            location: String::new(),
            light_source: String::new(),
            hydro_system_type: String::new(),
            description: String::new(),
            submitting: false,
            error: None,
        }
    }
}

impl GardenForm {
    /// Indoor gardens get location and light-source fields.
    #[must_use]
    pub fn shows_indoor_fields(&self) -> bool {
        self.garden_type == GardenType::Indoor
    }

    /// Hydroponic gardens get the system-type field.
    #[must_use]
    pub fn shows_hydro_fields(&self) -> bool {
        self.is_hydroponic
    }

    /// Validate the form and build the create payload.
    ///
    /// Fields behind a hidden section are dropped even if the user typed into
    /// them before toggling the section away, so the payload always matches
    /// what the form currently shows.
    ///
    /// # Errors
    ///
    /// Returns a display string when a required field is missing.
    pub fn validate(&self) -> Result<NewGarden, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Garden name is required.".to_owned());
        }

        let (location, light_source) = if self.shows_indoor_fields() {
            (non_blank(&self.location), non_blank(&self.light_source))
        } else {
            (None, None)
        };
        let hydro_system_type = if self.shows_hydro_fields() {
            non_blank(&self.hydro_system_type)
        } else {
            None
        };

        Ok(NewGarden {
            name: name.to_owned(),
            garden_type: self.garden_type,
            is_hydroponic: self.is_hydroponic,
            location,
            light_source,
            hydro_system_type,
            description: non_blank(&self.description),
        })
    }
}

/// Trim a free-text input, mapping blank to `None`.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
