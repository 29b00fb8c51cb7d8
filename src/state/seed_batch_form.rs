//! Form model for the add-seed-batch dialog.

#[cfg(test)]
#[path = "seed_batch_form_test.rs"]
mod seed_batch_form_test;

use crate::net::types::NewSeedBatch;

/// Controlled input state for the seed batch form. Numeric fields are kept
/// as raw text so the inputs stay controlled; parsing happens at validation.
#[derive(Clone, Debug, Default)]
pub struct SeedBatchForm {
    /// Selected variety id; empty string means nothing selected yet.
    pub plant_variety_id: String,
    pub source: String,
    pub harvest_year: String,
    pub quantity: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl SeedBatchForm {
    /// Validate the form and build the create payload.
    ///
    /// # Errors
    ///
    /// Returns a display string when the variety is missing or a numeric
    /// field does not parse.
    pub fn validate(&self) -> Result<NewSeedBatch, String> {
        let variety = self.plant_variety_id.trim();
        if variety.is_empty() {
            return Err("Select a plant variety.".to_owned());
        }

        let harvest_year = match self.harvest_year.trim() {
            "" => None,
            raw => Some(
                raw.parse::<i32>()
                    .map_err(|_| "Harvest year must be a whole number.".to_owned())?,
            ),
        };

        let quantity = match self.quantity.trim() {
            "" => None,
            raw => {
                let count = raw
                    .parse::<u32>()
                    .map_err(|_| "Quantity must be a positive whole number.".to_owned())?;
                if count == 0 {
                    return Err("Quantity must be at least 1.".to_owned());
                }
                Some(count)
            }
        };

        let source = self.source.trim();
        Ok(NewSeedBatch {
            plant_variety_id: variety.to_owned(),
            source: if source.is_empty() {
                None
            } else {
                Some(source.to_owned())
            },
            harvest_year,
            quantity,
        })
    }
}
