//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! `App` is the composition root for one builder session. It creates the
//! session's `WorkspaceStore`, the read-only catalog and the UI chrome state
//! and hands them to every component through context. Nothing is global:
//! a new `App` means a fresh, empty workspace.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use configurator::catalog::Catalog;
use configurator::store::WorkspaceStore;

use crate::pages::builder::BuilderPage;
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = StoredValue::new(load_catalog());
    let store = RwSignal::new(WorkspaceStore::new());
    let ui = RwSignal::new(UiState::default());

    provide_context(catalog);
    provide_context(store);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/deskrent.css"/>
        <Title text="Workspace Builder · Office Rentals Bali"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BuilderPage/>
            </Routes>
        </Router>
    }
}

/// The embedded catalog, or an empty one if the data file is broken.
///
/// An empty shelf is recoverable; a panic during hydration is not.
fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => {
            log::debug!("catalog loaded: {} products", catalog.len());
            catalog
        }
        Err(e) => {
            log::error!("catalog failed to load: {e}");
            Catalog::default()
        }
    }
}
