//! Workspace builder page: shelf, canvas, inspector, and summary bar.
//!
//! ARCHITECTURE
//! ============
//! The page is pure layout. Every region reads the session store from
//! context, so the page passes no props and holds no state of its own.

use leptos::prelude::*;

use crate::components::floating_toolbar::FloatingToolbar;
use crate::components::item_inspector::ItemInspector;
use crate::components::lifestyle_zones::LifestyleZones;
use crate::components::product_shelf::ProductShelf;
use crate::components::rent_modal::RentModal;
use crate::components::rent_summary_bar::RentSummaryBar;
use crate::components::workspace_canvas::WorkspaceCanvas;

#[component]
pub fn BuilderPage() -> impl IntoView {
    view! {
        <div class="builder">
            <div class="builder__main">
                <ProductShelf/>

                <main class="builder__stage">
                    <div class="builder__wordmark">
                        <span class="builder__wordmark-title">"Workspace Builder"</span>
                        <span class="builder__wordmark-divider"></span>
                        <span class="builder__wordmark-tagline">"Office Rentals · Bali"</span>
                    </div>
                    <FloatingToolbar/>
                    <WorkspaceCanvas/>
                    <LifestyleZones/>
                </main>

                <ItemInspector/>
            </div>

            <RentSummaryBar/>
            <RentModal/>
        </div>
    }
}
