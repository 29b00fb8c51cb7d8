//! Dashboard page listing gardens with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the garden inventory on mount and
//! coordinates the create dialog and delete confirmation flow.

use leptos::prelude::*;

use crate::components::create_garden::CreateGardenDialog;
use crate::components::garden_card::GardenCard;
use crate::state::gardens::GardensState;
use crate::state::ui::UiState;

fn load_gardens(gardens: RwSignal<GardensState>) {
    gardens.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_gardens().await {
            Ok(items) => gardens.update(|s| s.set_items(items)),
            Err(e) => {
                log::error!("garden fetch failed: {e}");
                gardens.update(|s| s.set_error(e));
            }
        }
    });
}

/// Dashboard page — garden card grid plus create/delete dialogs.
#[component]
pub fn GardensPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let gardens = RwSignal::new(GardensState::default());

    load_gardens(gardens);

    let show_create = RwSignal::new(false);

    let on_create = move |_| show_create.set(true);
    let on_create_close = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |garden| {
        gardens.update(|s| s.items.push(garden));
        show_create.set(false);
    });

    let on_delete_request = Callback::new(move |id: String| {
        gardens.update(|s| s.pending_delete = Some(id));
    });
    let on_delete_cancel = Callback::new(move |()| {
        gardens.update(|s| s.pending_delete = None);
    });

    view! {
        <div class="gardens-page">
            <header class="gardens-page__header toolbar">
                <span class="toolbar__title">"Gardens"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <button class="btn toolbar__new-garden" on:click=on_create>
                    "+ New Garden"
                </button>

                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            <div class="gardens-page__grid">
                <Show when=move || gardens.get().error.is_some()>
                    <p class="gardens-page__error">
                        {move || gardens.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !gardens.get().loading
                    fallback=move || view! { <p>"Loading gardens..."</p> }
                >
                    {move || {
                        let items = gardens.get().items;
                        if items.is_empty() {
                            view! {
                                <p class="gardens-page__empty">
                                    "No gardens yet. Create one to get started."
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="gardens-page__cards">
                                    {items
                                        .into_iter()
                                        .map(|g| {
                                            view! {
                                                <GardenCard garden=g on_delete=on_delete_request/>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </Show>
            </div>

            <Show when=move || show_create.get()>
                <CreateGardenDialog on_success=on_created on_close=on_create_close/>
            </Show>

            <Show when=move || gardens.get().pending_delete.is_some()>
                <DeleteGardenDialog gardens=gardens on_cancel=on_delete_cancel/>
            </Show>
        </div>
    }
}

/// Confirmation dialog shown before a garden delete call.
#[component]
fn DeleteGardenDialog(gardens: RwSignal<GardensState>, on_cancel: Callback<()>) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = gardens.get_untracked().pending_delete else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_garden(&id).await {
                Ok(()) => gardens.update(|s| s.remove(&id)),
                Err(e) => {
                    log::error!("delete garden failed: {e}");
                    gardens.update(|s| {
                        s.pending_delete = None;
                        s.error = Some(e);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Garden"</h2>
                <p class="dialog__danger">
                    "This will permanently delete this garden and its plantings."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
