//! Garden detail page: nutrient optimization, care tasks, seed batches.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::create_seed_batch::CreateSeedBatchDialog;
use crate::components::nutrient_panel::NutrientOptimizationPanel;
use crate::components::task_list::TaskList;

/// Detail page for one garden, keyed by the `:id` route param.
///
/// The backend has no single-garden endpoint, so the name comes from the
/// garden list; an id with no match renders a not-found notice.
#[component]
pub fn GardenPage() -> impl IntoView {
    let params = use_params_map();
    let garden_id = move || params.read().get("id");

    // Garden list resource — used to resolve this garden's display name.
    let gardens = LocalResource::new(|| crate::net::api::fetch_gardens());

    let show_add_batch = RwSignal::new(false);
    let batch_notice = RwSignal::new(String::new());

    let on_add_batch = move |_| {
        batch_notice.set(String::new());
        show_add_batch.set(true);
    };
    let on_batch_close = Callback::new(move |()| show_add_batch.set(false));
    let on_batch_added = Callback::new(move |()| {
        show_add_batch.set(false);
        batch_notice.set("Seed batch added.".to_owned());
    });

    let heading = move || {
        let id = garden_id().unwrap_or_default();
        gardens.get().map_or_else(
            || "Loading...".to_owned(),
            |result| match result {
                Ok(list) => list
                    .iter()
                    .find(|g| g.id == id)
                    .map_or("Garden not found".to_owned(), |g| g.name.clone()),
                Err(_) => "Garden".to_owned(),
            },
        )
    };

    view! {
        <div class="garden-page">
            <header class="garden-page__header toolbar">
                <a class="toolbar__back" href="/">
                    "← Gardens"
                </a>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="toolbar__title">{heading}</span>

                <span class="toolbar__spacer"></span>

                <button class="btn toolbar__add-batch" on:click=on_add_batch>
                    "+ Seed Batch"
                </button>
            </header>

            <Show when=move || !batch_notice.get().is_empty()>
                <p class="garden-page__notice">{move || batch_notice.get()}</p>
            </Show>

            {move || {
                garden_id().map(|id| {
                    view! {
                        <div class="garden-page__panels">
                            <NutrientOptimizationPanel garden_id=id.clone()/>
                            <TaskList garden_id=id/>
                        </div>
                    }
                })
            }}

            <Show when=move || show_add_batch.get()>
                <CreateSeedBatchDialog on_success=on_batch_added on_close=on_batch_close/>
            </Show>
        </div>
    }
}
