use super::*;
use crate::net::types::{EcRecommendation, PhRecommendation};

fn full_optimization() -> NutrientOptimization {
    NutrientOptimization {
        ec_recommendation: Some(EcRecommendation {
            min_ms_cm: 1.2,
            max_ms_cm: 1.8,
            rationale: None,
        }),
        ph_recommendation: Some(PhRecommendation {
            min_ph: 5.5,
            max_ph: 6.2,
            rationale: None,
        }),
        replacement_schedule: Some(ReplacementSchedule {
            topoff_interval_days: 3,
            full_replacement_days: 14,
            rationale: None,
        }),
        active_plantings: Vec::new(),
        warnings: Vec::new(),
        generated_at: None,
    }
}

// =============================================================
// Bar math
// =============================================================

#[test]
fn bar_segment_maps_range_onto_axis() {
    let seg = bar_segment(1.0, 2.0, 0.0, 5.0);
    assert!((seg.left_pct - 20.0).abs() < 1e-9);
    assert!((seg.width_pct - 20.0).abs() < 1e-9);
}

#[test]
fn bar_segment_clamps_to_axis_bounds() {
    let seg = bar_segment(-1.0, 7.0, 0.0, 5.0);
    assert!((seg.left_pct - 0.0).abs() < 1e-9);
    assert!((seg.width_pct - 100.0).abs() < 1e-9);
}

#[test]
fn bar_segment_normalizes_inverted_ranges() {
    let forward = bar_segment(1.0, 2.0, 0.0, 5.0);
    let inverted = bar_segment(2.0, 1.0, 0.0, 5.0);
    assert_eq!(forward, inverted);
}

#[test]
fn bar_segment_collapses_non_finite_input() {
    let seg = bar_segment(f64::NAN, 2.0, 0.0, 5.0);
    assert_eq!(seg, BarSegment { left_pct: 0.0, width_pct: 0.0 });
    let seg = bar_segment(1.0, f64::INFINITY, 0.0, 5.0);
    assert_eq!(seg, BarSegment { left_pct: 0.0, width_pct: 0.0 });
}

#[test]
fn bar_segment_collapses_degenerate_axis() {
    let seg = bar_segment(1.0, 2.0, 5.0, 5.0);
    assert_eq!(seg, BarSegment { left_pct: 0.0, width_pct: 0.0 });
}

#[test]
fn ph_segment_centers_neutral_ph() {
    let seg = ph_segment(7.0, 7.0);
    assert!((seg.left_pct - 50.0).abs() < 1e-9);
    assert!((seg.width_pct - 0.0).abs() < 1e-9);
}

#[test]
fn ec_segment_uses_ec_axis() {
    let seg = ec_segment(0.0, EC_AXIS_MAX);
    assert!((seg.width_pct - 100.0).abs() < 1e-9);
}

// =============================================================
// Completeness
// =============================================================

#[test]
fn full_payload_is_complete() {
    assert!(is_complete(&full_optimization()));
}

#[test]
fn missing_any_block_is_incomplete() {
    let mut opt = full_optimization();
    opt.ec_recommendation = None;
    assert!(!is_complete(&opt));

    let mut opt = full_optimization();
    opt.ph_recommendation = None;
    assert!(!is_complete(&opt));

    let mut opt = full_optimization();
    opt.replacement_schedule = None;
    assert!(!is_complete(&opt));
}

// =============================================================
// Schedule summary
// =============================================================

#[test]
fn schedule_summary_pluralizes_days() {
    let schedule = ReplacementSchedule {
        topoff_interval_days: 3,
        full_replacement_days: 14,
        rationale: None,
    };
    assert_eq!(
        schedule_summary(&schedule),
        "Top off every 3 days · full replacement every 14 days"
    );
}

#[test]
fn schedule_summary_handles_single_day() {
    let schedule = ReplacementSchedule {
        topoff_interval_days: 1,
        full_replacement_days: 1,
        rationale: None,
    };
    assert_eq!(
        schedule_summary(&schedule),
        "Top off every day · full replacement every day"
    );
}
