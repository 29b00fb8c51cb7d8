//! Nutrient optimization display panel.
//!
//! Purely presentational: the backend computes the recommendation; this
//! panel projects the numeric ranges onto fixed axes and renders bars,
//! labels, warnings, and the active planting list. Every optional field is
//! null-coalesced at render time.

use leptos::prelude::*;

use crate::net::types::NutrientOptimization;
use crate::state::optimization::{self, EC_AXIS_MAX, PH_AXIS_MAX};

/// Fetch-on-mount optimization panel for one garden.
#[component]
pub fn NutrientOptimizationPanel(garden_id: String) -> impl IntoView {
    let optimization = LocalResource::new(move || {
        let id = garden_id.clone();
        async move { crate::net::api::fetch_nutrient_optimization(&id).await }
    });

    view! {
        <section class="nutrient-panel">
            <h2 class="nutrient-panel__title">"Nutrient Optimization"</h2>
            <Suspense fallback=move || view! { <p>"Loading optimization..."</p> }>
                {move || {
                    optimization
                        .get()
                        .map(|result| match result {
                            Ok(data) => optimization_body(&data),
                            Err(e) => view! { <p class="nutrient-panel__error">{e}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

fn optimization_body(data: &NutrientOptimization) -> AnyView {
    if !optimization::is_complete(data) {
        return view! {
            <p class="nutrient-panel__incomplete">"Incomplete optimization data received"</p>
        }
        .into_any();
    }

    let (Some(ec), Some(ph), Some(schedule)) = (
        data.ec_recommendation.clone(),
        data.ph_recommendation.clone(),
        data.replacement_schedule.clone(),
    ) else {
        // Guarded by is_complete above.
        return ().into_any();
    };

    let ec_seg = optimization::ec_segment(ec.min_ms_cm, ec.max_ms_cm);
    let ph_seg = optimization::ph_segment(ph.min_ph, ph.max_ph);
    let schedule_line = optimization::schedule_summary(&schedule);

    let warnings = data.warnings.clone();
    let has_warnings = !warnings.is_empty();
    let plantings = data.active_plantings.clone();
    let has_plantings = !plantings.is_empty();
    let generated = data
        .generated_at
        .clone()
        .map(|ts| format!("Generated {ts}"))
        .unwrap_or_default();

    view! {
        <div class="nutrient-panel__body">
            <div class="nutrient-panel__block">
                <div class="nutrient-panel__block-label">
                    {format!("EC {:.1}–{:.1} mS/cm", ec.min_ms_cm, ec.max_ms_cm)}
                </div>
                <div class="nutrient-panel__bar" title=format!("axis 0–{EC_AXIS_MAX} mS/cm")>
                    <div
                        class="nutrient-panel__bar-fill"
                        style:left=format!("{:.2}%", ec_seg.left_pct)
                        style:width=format!("{:.2}%", ec_seg.width_pct)
                    ></div>
                </div>
                <p class="nutrient-panel__rationale">{ec.rationale.unwrap_or_default()}</p>
            </div>

            <div class="nutrient-panel__block">
                <div class="nutrient-panel__block-label">
                    {format!("pH {:.1}–{:.1}", ph.min_ph, ph.max_ph)}
                </div>
                <div class="nutrient-panel__bar" title=format!("axis 0–{PH_AXIS_MAX}")>
                    <div
                        class="nutrient-panel__bar-fill nutrient-panel__bar-fill--ph"
                        style:left=format!("{:.2}%", ph_seg.left_pct)
                        style:width=format!("{:.2}%", ph_seg.width_pct)
                    ></div>
                </div>
                <p class="nutrient-panel__rationale">{ph.rationale.unwrap_or_default()}</p>
            </div>

            <div class="nutrient-panel__block">
                <div class="nutrient-panel__block-label">"Reservoir Schedule"</div>
                <p class="nutrient-panel__schedule">{schedule_line}</p>
                <p class="nutrient-panel__rationale">{schedule.rationale.unwrap_or_default()}</p>
            </div>

            <Show when=move || has_warnings>
                <ul class="nutrient-panel__warnings">
                    {warnings
                        .clone()
                        .into_iter()
                        .map(|w| view! { <li class="nutrient-panel__warning">{w}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>

            <Show when=move || has_plantings>
                <div class="nutrient-panel__plantings">
                    <div class="nutrient-panel__block-label">"Active Plantings"</div>
                    <ul>
                        {plantings
                            .clone()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <li>{format!("{} × {}", p.quantity, p.variety_name)}</li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>

            <p class="nutrient-panel__generated">{generated}</p>
        </div>
    }
    .into_any()
}
