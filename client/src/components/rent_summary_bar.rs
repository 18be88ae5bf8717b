//! Bottom bar with the running total and the rent call-to-action.

use leptos::prelude::*;

use configurator::catalog::Catalog;
use configurator::quote::RentalQuote;
use configurator::store::WorkspaceStore;

use crate::state::ui::UiState;

#[component]
pub fn RentSummaryBar() -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();
    let catalog = expect_context::<StoredValue<Catalog>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let quote = Memo::new(move |_| store.with(|s| catalog.with_value(|c| RentalQuote::from_store(s, c))));

    view! {
        <footer class="summary-bar">
            <div class="summary-bar__count">
                {move || quote.with(RentalQuote::count_display)} " in workspace"
            </div>
            <div class="summary-bar__total">
                <span class="summary-bar__amount">{move || quote.with(RentalQuote::total_display)}</span>
                <span class="summary-bar__suffix">{move || quote.with(|q| q.duration.suffix())}</span>
            </div>
            <p class="summary-bar__note">"Delivered & set up anywhere in Bali · 48h"</p>
            <button
                class="btn btn--primary summary-bar__cta"
                on:click=move |_| ui.update(UiState::open_rent_modal)
            >
                "Rent My Setup →"
            </button>
        </footer>
    }
}
