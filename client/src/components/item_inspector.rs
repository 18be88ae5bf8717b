//! Right-hand inspector for the selected product.
//!
//! Visible only while the store reports the inspector open and the selected
//! id still resolves in the catalog. Shows the rental price for the chosen
//! duration, a remove action for the selected slot, and the running
//! "Your Setup" list.

#[cfg(test)]
#[path = "item_inspector_test.rs"]
mod item_inspector_test;

use leptos::prelude::*;

use configurator::catalog::{Catalog, Product};
use configurator::pricing::{RentalDuration, format_price};
use configurator::quote::RentalQuote;
use configurator::store::WorkspaceStore;

use crate::components::product_image::ProductImage;

/// "Your Setup" header with the placed-item count.
fn setup_heading(count: usize) -> String {
    format!("Your Setup ({count})")
}

/// Price line for the selected product, e.g. `$111 / month`.
fn price_line(product: &Product, duration: RentalDuration) -> String {
    format!("{} {}", format_price(product.price(duration)), duration.suffix())
}

#[component]
pub fn ItemInspector() -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();
    let catalog = expect_context::<StoredValue<Catalog>>();

    let product = Memo::new(move |_| {
        store.with(|s| {
            if !s.inspector_open() {
                return None;
            }
            catalog.with_value(|c| s.selected_product(c).cloned())
        })
    });
    let quote = Memo::new(move |_| store.with(|s| catalog.with_value(|c| RentalQuote::from_store(s, c))));
    let duration = move || store.with(WorkspaceStore::duration);

    let on_remove = move |_| {
        store.update(|s| {
            if let Some(slot) = s.selected_slot() {
                s.remove_from_slot(slot);
            }
        });
    };

    view! {
        <Show when=move || product.with(Option::is_some)>
            <aside class="inspector">
                <header class="inspector__header">
                    <span class="inspector__title">"Item Details"</span>
                    <button
                        class="inspector__close"
                        aria-label="Close inspector"
                        on:click=move |_| store.update(WorkspaceStore::close_inspector)
                    >
                        "×"
                    </button>
                </header>

                {move || {
                    product
                        .get()
                        .map(|p| {
                            let image = (p.image_url.clone(), p.name.clone(), p.emoji.clone());
                            let name = p.name.clone();
                            let description = p.description.clone();
                            let price = move || price_line(&p, duration());
                            view! {
                                <div class="inspector__product">
                                    <ProductImage src=image.0 alt=image.1 emoji=image.2 class_name="inspector__image"/>
                                    <h3 class="inspector__name">{name}</h3>
                                    <p class="inspector__description">{description}</p>
                                    <p class="inspector__price">{price}</p>
                                </div>
                            }
                        })
                }}

                <DurationTabs/>

                <Show when=move || store.with(|s| s.selected_slot().is_some_and(|slot| s.filled_slots().is_filled(slot)))>
                    <button class="btn inspector__remove" on:click=on_remove>
                        "Remove from Workspace"
                    </button>
                </Show>

                <section class="inspector__setup">
                    <h4>{move || quote.with(|q| setup_heading(q.item_count()))}</h4>
                    <ul class="inspector__setup-list">
                        <For each=move || quote.get().lines key=|line| line.slot let:line>
                            <li class="inspector__setup-item">
                                <span class="inspector__setup-emoji">{line.emoji}</span>
                                <span class="inspector__setup-name">{line.name}</span>
                                <span class="inspector__setup-price">{format_price(line.price)}</span>
                            </li>
                        </For>
                    </ul>
                    <p class="inspector__setup-total">
                        "Total " {move || quote.with(RentalQuote::total_display)}
                        " " {move || duration().suffix()}
                    </p>
                </section>
            </aside>
        </Show>
    }
}

/// Day / Week / Month selector. Changing it reprices every quote.
#[component]
fn DurationTabs() -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();

    view! {
        <div class="inspector__durations">
            {RentalDuration::ALL
                .into_iter()
                .map(|d| {
                    view! {
                        <button
                            class="inspector__duration"
                            class:inspector__duration--active=move || store.with(WorkspaceStore::duration) == d
                            on:click=move |_| store.update(|s| s.set_duration(d))
                        >
                            {d.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
