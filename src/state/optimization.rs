//! View-model helpers for the nutrient optimization panel.
//!
//! DESIGN
//! ======
//! The panel draws each recommended range as a highlighted segment on a
//! fixed horizontal axis. All the numeric work happens here as pure
//! functions; the component only formats the results into CSS percentages.

#[cfg(test)]
#[path = "optimization_test.rs"]
mod optimization_test;

use crate::net::types::{NutrientOptimization, ReplacementSchedule};

/// Display axis for EC bars, in mS/cm. Household hydroponics rarely exceeds
/// 4.0, so a 0–5 axis keeps typical ranges visually centered.
pub const EC_AXIS_MAX: f64 = 5.0;

/// Display axis for pH bars spans the full scale.
pub const PH_AXIS_MIN: f64 = 0.0;
pub const PH_AXIS_MAX: f64 = 14.0;

/// A range segment positioned on a bar, as percentages of the bar width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSegment {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Project a recommended `[min, max]` range onto a `[axis_min, axis_max]`
/// display axis, clamped to the axis. Inverted input ranges are normalized;
/// non-finite input collapses to an empty segment at the origin.
#[must_use]
pub fn bar_segment(min: f64, max: f64, axis_min: f64, axis_max: f64) -> BarSegment {
    if !min.is_finite() || !max.is_finite() || axis_max <= axis_min {
        return BarSegment {
            left_pct: 0.0,
            width_pct: 0.0,
        };
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = axis_max - axis_min;
    let lo_frac = ((lo - axis_min) / span).clamp(0.0, 1.0);
    let hi_frac = ((hi - axis_min) / span).clamp(0.0, 1.0);
    BarSegment {
        left_pct: lo_frac * 100.0,
        width_pct: (hi_frac - lo_frac) * 100.0,
    }
}

/// Segment for an EC recommendation on the 0–[`EC_AXIS_MAX`] axis.
#[must_use]
pub fn ec_segment(min_ms_cm: f64, max_ms_cm: f64) -> BarSegment {
    bar_segment(min_ms_cm, max_ms_cm, 0.0, EC_AXIS_MAX)
}

/// Segment for a pH recommendation on the 0–14 axis.
#[must_use]
pub fn ph_segment(min_ph: f64, max_ph: f64) -> BarSegment {
    bar_segment(min_ph, max_ph, PH_AXIS_MIN, PH_AXIS_MAX)
}

/// An optimization is renderable only when all three recommendation blocks
/// arrived. A partial payload renders the incomplete-data notice instead.
#[must_use]
pub fn is_complete(optimization: &NutrientOptimization) -> bool {
    optimization.ec_recommendation.is_some()
        && optimization.ph_recommendation.is_some()
        && optimization.replacement_schedule.is_some()
}

/// One-line summary of the reservoir maintenance cadence.
#[must_use]
pub fn schedule_summary(schedule: &ReplacementSchedule) -> String {
    format!(
        "Top off every {} · full replacement every {}",
        days_label(schedule.topoff_interval_days),
        days_label(schedule.full_replacement_days)
    )
}

fn days_label(days: i64) -> String {
    if days == 1 {
        "day".to_owned()
    } else {
        format!("{days} days")
    }
}
