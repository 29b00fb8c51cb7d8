//! Modal dialog for creating a garden.
//!
//! Conditional sections follow the form model: indoor placement reveals
//! location and light-source inputs, the hydroponic checkbox reveals the
//! system-type input. One create attempt per submit; the form re-enables on
//! failure with the error shown inline.

use leptos::prelude::*;

use crate::net::types::{Garden, GardenType};
use crate::state::garden_form::GardenForm;

/// Modal create-garden form. Calls `on_success` with the created garden when
/// the API call resolves, `on_close` on cancel/backdrop/Escape.
#[component]
pub fn CreateGardenDialog(on_success: Callback<Garden>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(GardenForm::default());

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
                    match crate::net::api::create_garden(&payload).await {
                        Ok(garden) => on_success.run(garden),
                        Err(e) => {
                            log::error!("create garden failed: {e}");
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
                <h2>"Create Garden"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Garden Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Garden Type"
                        <select
                            class="dialog__input"
                            prop:value=move || match form.get().garden_type {
                                GardenType::Outdoor => "outdoor",
                                GardenType::Indoor => "indoor",
                            }
                            on:change=move |ev| {
                                let selected = if event_target_value(&ev) == "indoor" {
                                    GardenType::Indoor
                                } else {
                                    GardenType::Outdoor
                                };
                                form.update(|f| f.garden_type = selected);
                            }
                        >
                            <option value="outdoor">"Outdoor"</option>
                            <option value="indoor">"Indoor"</option>
                        </select>
                    </label>

                    <label class="dialog__label dialog__label--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_hydroponic
                            on:change=move |ev| {
                                form.update(|f| f.is_hydroponic = event_target_checked(&ev));
                            }
                        />
                        "Hydroponic"
                    </label>

                    <Show when=move || form.get().shows_indoor_fields()>
                        <label class="dialog__label">
                            "Location"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="e.g. spare room, kitchen sill"
                                prop:value=move || form.get().location
                                on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Light Source"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="e.g. LED panel, south window"
                                prop:value=move || form.get().light_source
                                on:input=move |ev| form.update(|f| f.light_source = event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <Show when=move || form.get().shows_hydro_fields()>
                        <label class="dialog__label">
                            "System Type"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="e.g. dwc, nft, ebb_flow"
                                prop:value=move || form.get().hydro_system_type
                                on:input=move |ev| {
                                    form.update(|f| f.hydro_system_type = event_target_value(&ev));
                                }
                            />
                        </label>
                    </Show>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__input--multiline"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
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
                            {move || if form.get().submitting { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
