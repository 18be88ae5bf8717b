//! Lifestyle zone picker beneath the desk scene.
//!
//! Zones only highlight for now; pressing the active zone again turns it off.

use leptos::prelude::*;

use configurator::store::WorkspaceStore;
use configurator::zone::LifestyleZone;

#[component]
pub fn LifestyleZones() -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();

    let buttons = LifestyleZone::ALL
        .into_iter()
        .map(|zone| {
            view! {
                <button
                    class="zones__btn"
                    class:zones__btn--active=move || store.with(|s| s.active_zone() == Some(zone))
                    on:click=move |_| store.update(|s| s.set_active_zone(zone))
                >
                    <span class="zones__emoji">{zone.emoji()}</span>
                    <span class="zones__label">{zone.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="zones">
            <h3 class="zones__title">"Lifestyle Zones"</h3>
            <div class="zones__list">{buttons}</div>
        </section>
    }
}
