//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{garden::GardenPage, gardens::GardensPage};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState {
        dark_mode: crate::util::dark_mode::read_preference(),
    });
    provide_context(ui);

    Effect::new(move || {
        crate::util::dark_mode::apply(ui.get().dark_mode);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/verdant-ui.css"/>
        <Title text="Verdant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GardensPage/>
                <Route path=(StaticSegment("garden"), ParamSegment("id")) view=GardenPage/>
            </Routes>
        </Router>
    }
}
