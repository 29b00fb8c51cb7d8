//! JSON DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field-for-field so serde can do
//! all the mapping. Optional backend fields stay `Option` here; every
//! consumer null-coalesces at render time rather than inventing defaults
//! during deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Placement category for a garden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GardenType {
    #[default]
    Outdoor,
    Indoor,
}

/// A garden as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    /// Unique garden identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Outdoor or indoor placement.
    pub garden_type: GardenType,
    /// Whether this garden runs on a hydroponic system.
    pub is_hydroponic: bool,
    /// Free-text location (indoor gardens: room/shelf, outdoor: plot).
    pub location: Option<String>,
    /// Light source description for indoor gardens.
    pub light_source: Option<String>,
    /// Hydroponic system type (e.g. `"dwc"`, `"nft"`, `"ebb_flow"`).
    pub hydro_system_type: Option<String>,
    /// Free-text notes.
    pub description: Option<String>,
}

/// Create payload for a new garden.
///
/// Fields hidden by the form's conditional visibility are `None` and omitted
/// from the serialized body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewGarden {
    pub name: String,
    pub garden_type: GardenType,
    pub is_hydroponic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydro_system_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A plant variety available for seed batches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantVariety {
    /// Unique variety identifier (UUID string).
    pub id: String,
    /// Display name (e.g. `"San Marzano tomato"`).
    pub name: String,
}

/// Create payload for a seed batch. The backend owns the resulting record;
/// the client never reads batches back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSeedBatch {
    pub plant_variety_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvest_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Recommended electrical-conductivity range for the nutrient solution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EcRecommendation {
    /// Lower bound in millisiemens per centimeter.
    pub min_ms_cm: f64,
    /// Upper bound in millisiemens per centimeter.
    pub max_ms_cm: f64,
    /// Backend-provided explanation, if any.
    pub rationale: Option<String>,
}

/// Recommended pH range for the nutrient solution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhRecommendation {
    pub min_ph: f64,
    pub max_ph: f64,
    pub rationale: Option<String>,
}

/// Recommended reservoir maintenance cadence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplacementSchedule {
    /// Days between water top-offs.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub topoff_interval_days: i64,
    /// Days between full reservoir replacements.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub full_replacement_days: i64,
    pub rationale: Option<String>,
}

/// A planting currently contributing to the optimization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePlanting {
    pub variety_name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub quantity: i64,
}

/// Pre-computed nutrient recommendation for one garden.
///
/// The backend computes this; the client only renders it. Each recommendation
/// block is optional because the backend omits blocks it could not compute
/// (e.g. no active plantings yet).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutrientOptimization {
    pub ec_recommendation: Option<EcRecommendation>,
    pub ph_recommendation: Option<PhRecommendation>,
    pub replacement_schedule: Option<ReplacementSchedule>,
    #[serde(default)]
    pub active_plantings: Vec<ActivePlanting>,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// ISO 8601 timestamp of when the backend generated this result.
    pub generated_at: Option<String>,
}

/// Completion state of a care task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// Urgency of a care task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A scheduled care task for a garden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareTask {
    /// Unique task identifier (UUID string).
    pub id: String,
    /// Short display title.
    pub title: String,
    /// Task category (e.g. `"watering"`, `"pruning"`, `"fertilizing"`).
    pub task_type: String,
    #[serde(default)]
    pub priority: TaskPriority,
    /// ISO 8601 due date, if scheduled.
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    pub description: Option<String>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    // Some backends emit whole-number day counts as floats.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    match number.as_f64() {
        Some(float)
            if float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64 =>
        {
            Ok(float as i64)
        }
        _ => Err(D::Error::custom("expected integer-compatible number")),
    }
}
