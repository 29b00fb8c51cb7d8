//! Card component for garden list items on the dashboard.

#[cfg(test)]
#[path = "garden_card_test.rs"]
mod garden_card_test;

use leptos::prelude::*;

use crate::net::types::{Garden, GardenType};

/// One-line placement summary shown under the garden name.
fn meta_label(garden: &Garden) -> String {
    let placement = match garden.garden_type {
        GardenType::Outdoor => "Outdoor",
        GardenType::Indoor => "Indoor",
    };
    let mut label = placement.to_owned();
    if garden.is_hydroponic {
        label.push_str(" · Hydroponic");
        if let Some(system) = garden.hydro_system_type.as_deref() {
            label.push_str(&format!(" ({system})"));
        }
    }
    if let Some(location) = garden.location.as_deref() {
        label.push_str(&format!(" · {location}"));
    }
    label
}

/// A clickable card representing a garden, linking to its detail page.
#[component]
pub fn GardenCard(garden: Garden, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let href = format!("/garden/{}", garden.id);
    let meta = meta_label(&garden);
    let name = garden.name.clone();
    let description = garden.description.clone().unwrap_or_default();
    let has_description = !description.is_empty();
    let on_delete_click = Callback::new({
        let id = garden.id.clone();
        move |()| {
            if let Some(on_delete) = on_delete.as_ref() {
                on_delete.run(id.clone());
            }
        }
    });

    view! {
        <a class="garden-card" href=href>
            <span class="garden-card__name">{name}</span>
            <span class="garden-card__meta">{meta}</span>
            <Show when=move || has_description>
                <span class="garden-card__description">{description.clone()}</span>
            </Show>
            <button
                class="garden-card__delete"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_delete_click.run(());
                }
                title="Delete garden"
                aria-label="Delete garden"
            >
                "✕"
            </button>
        </a>
    }
}
