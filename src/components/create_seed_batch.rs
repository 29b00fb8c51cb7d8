//! Modal dialog for adding a seed batch.
//!
//! The variety selector is populated from the backend's variety list on
//! mount. Numeric fields stay free-text until validation so the inputs are
//! fully controlled.

use leptos::prelude::*;

use crate::net::types::PlantVariety;
use crate::state::seed_batch_form::SeedBatchForm;

/// Modal seed-batch form. Calls `on_success` when the API call resolves,
/// `on_close` on cancel/backdrop/Escape.
#[component]
pub fn CreateSeedBatchDialog(on_success: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(SeedBatchForm::default());

    // Variety list resource — fetches on mount.
    let varieties = LocalResource::new(|| crate::net::api::fetch_plant_varieties());

    let submit = Callback::new(move |()| {
        if form.get().submitting {
            return;
        }
        match form.get().validate() {
            Err(message) => form.update(|f| f.error = Some(message)),
            Ok(payload) => {
                form.update(|f| {
                    f.submitting = true;
                    f.error = None;
                });
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::create_seed_batch(&payload).await {
                        Ok(()) => on_success.run(()),
                        Err(e) => {
                            log::error!("create seed batch failed: {e}");
                            form.update(|f| {
                                f.submitting = false;
                                f.error = Some(e);
                            });
                        }
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = payload;
                }
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <h2>"Add Seed Batch"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Plant Variety"
                        <Suspense fallback=move || {
                            view! { <select class="dialog__input" disabled=true></select> }
                        }>
                            {move || {
                                varieties
                                    .get()
                                    .map(|result| match result {
                                        Ok(list) => variety_select(form, list).into_any(),
                                        Err(e) => {
                                            view! { <p class="dialog__error">{e}</p> }.into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </label>

                    <label class="dialog__label">
                        "Source"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. seed swap, saved from harvest"
                            prop:value=move || form.get().source
                            on:input=move |ev| form.update(|f| f.source = event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Harvest Year"
                        <input
                            class="dialog__input"
                            type="text"
                            inputmode="numeric"
                            placeholder="e.g. 2025"
                            prop:value=move || form.get().harvest_year
                            on:input=move |ev| form.update(|f| f.harvest_year = event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Quantity"
                        <input
                            class="dialog__input"
                            type="text"
                            inputmode="numeric"
                            placeholder="seed count"
                            prop:value=move || form.get().quantity
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || form.get().error.is_some()>
                        <p class="dialog__error">{move || form.get().error.unwrap_or_default()}</p>
                    </Show>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || form.get().submitting
                        >
                            {move || if form.get().submitting { "Adding..." } else { "Add Batch" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn variety_select(form: RwSignal<SeedBatchForm>, list: Vec<PlantVariety>) -> impl IntoView {
    view! {
        <select
            class="dialog__input"
            prop:value=move || form.get().plant_variety_id
            on:change=move |ev| form.update(|f| f.plant_variety_id = event_target_value(&ev))
        >
            <option value="">"Select a variety..."</option>
            {list
                .into_iter()
                .map(|v| view! { <option value=v.id.clone()>{v.name}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
