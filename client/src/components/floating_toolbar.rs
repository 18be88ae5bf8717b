//! Floating toolbar over the canvas: templates, grid, undo, clear.
//!
//! Clearing is destructive, so it takes two presses. The first arms
//! [`ClearConfirm`](crate::util::clear_confirm::ClearConfirm) and the label
//! changes to "Confirm clear?"; the second clears the canvas. An armed
//! confirmation dismisses itself after
//! [`CLEAR_CONFIRM_TIMEOUT_MS`](crate::util::clear_confirm::CLEAR_CONFIRM_TIMEOUT_MS).

#[cfg(test)]
#[path = "floating_toolbar_test.rs"]
mod floating_toolbar_test;

use leptos::prelude::*;

use configurator::store::WorkspaceStore;

use crate::state::ui::UiState;
use crate::util::clear_confirm::ClearPress;

fn clear_label(armed: bool) -> &'static str {
    if armed { "Confirm clear?" } else { "🗑" }
}

/// Start the dismissal timer for an armed confirmation.
fn schedule_clear_expiry(ui: RwSignal<UiState>, generation: u64) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::clear_confirm::CLEAR_CONFIRM_TIMEOUT_MS;

        gloo_timers::callback::Timeout::new(CLEAR_CONFIRM_TIMEOUT_MS, move || {
            // The page may have unmounted before the timer fired.
            ui.try_update(|u| u.clear_confirm.expire(generation));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, generation);
    }
}

#[component]
pub fn FloatingToolbar() -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let armed = move || ui.with(|u| u.clear_confirm.is_armed());
    let can_undo = move || store.with(WorkspaceStore::can_undo);

    let on_clear = move |_| match ui.try_update(|u| u.clear_confirm.press()) {
        Some(ClearPress::Confirmed) => store.update(WorkspaceStore::clear_canvas),
        Some(ClearPress::Armed(generation)) => schedule_clear_expiry(ui, generation),
        None => {}
    };

    view! {
        <div class="floating-toolbar">
            // TODO: open a template picker once templates exist in the catalog.
            <button class="floating-toolbar__btn floating-toolbar__btn--template">
                "Start from template"
            </button>
            <span class="floating-toolbar__divider"></span>

            <button
                class="floating-toolbar__btn"
                class:floating-toolbar__btn--active=move || ui.with(|u| u.show_grid)
                on:click=move |_| ui.update(UiState::toggle_grid)
            >
                "⊞ Grid"
            </button>

            <button
                class="floating-toolbar__btn"
                disabled=move || !can_undo()
                title="Undo last change"
                on:click=move |_| store.update(WorkspaceStore::undo)
            >
                "↩ Undo"
            </button>

            <button
                class="floating-toolbar__btn floating-toolbar__btn--danger"
                class:floating-toolbar__btn--armed=armed
                title="Clear canvas"
                on:click=on_clear
            >
                {move || clear_label(armed())}
            </button>
        </div>
    }
}
