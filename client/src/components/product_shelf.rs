//! Left-hand product shelf: search, category tabs, and the product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shelf is the only way to choose products. It narrows by the search
//! query and the active category tab, and when a slot is selected on the
//! canvas it narrows further to products that fit that slot. Clicking a
//! card calls `select_product`, which auto-places it into the selected slot
//! when compatible.

#[cfg(test)]
#[path = "product_shelf_test.rs"]
mod product_shelf_test;

use leptos::prelude::*;

use configurator::catalog::{Catalog, Category, Product};
use configurator::pricing::format_price;
use configurator::shelf::ShelfFilter;
use configurator::slot::SlotId;
use configurator::store::WorkspaceStore;

use crate::components::product_image::ProductImage;

/// Owned copies of the products the shelf should show.
fn visible_products(catalog: &Catalog, filter: &ShelfFilter) -> Vec<Product> {
    filter.apply(catalog).into_iter().cloned().collect()
}

/// Heading above the grid: names the selected slot when one narrows it.
fn shelf_heading(slot: Option<SlotId>) -> String {
    match slot {
        Some(slot) => format!("Fits {}", slot.label()),
        None => "Equipment".to_owned(),
    }
}

fn empty_message(filter: &ShelfFilter) -> String {
    if filter.has_query() {
        format!("No products match \"{}\"", filter.query.trim())
    } else {
        "No products in this category".to_owned()
    }
}

#[component]
pub fn ProductShelf() -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();
    let catalog = expect_context::<StoredValue<Catalog>>();

    let query = RwSignal::new(String::new());
    let category = RwSignal::new(None::<Category>);

    let filter = Memo::new(move |_| {
        ShelfFilter::new()
            .with_query(query.get())
            .with_category(category.get())
            .with_slot(store.with(WorkspaceStore::selected_slot))
    });
    let products = move || filter.with(|f| catalog.with_value(|c| visible_products(c, f)));

    let category_tabs = Category::ALL
        .into_iter()
        .map(|cat| {
            let info = cat.info();
            view! {
                <button
                    class="shelf__tab"
                    class:shelf__tab--active=move || category.get() == Some(cat)
                    on:click=move |_| category.set(Some(cat))
                >
                    <span class="shelf__tab-emoji">{info.emoji}</span>
                    {info.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <aside class="shelf">
            <div class="shelf__search">
                <input
                    class="shelf__search-input"
                    type="search"
                    placeholder="Search equipment..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Show when=move || !query.get().is_empty()>
                    <button
                        class="shelf__search-clear"
                        aria-label="Clear search"
                        on:click=move |_| query.set(String::new())
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <nav class="shelf__tabs">
                <button
                    class="shelf__tab"
                    class:shelf__tab--active=move || category.get().is_none()
                    on:click=move |_| category.set(None)
                >
                    "All"
                </button>
                {category_tabs}
            </nav>

            <h2 class="shelf__heading">{move || shelf_heading(store.with(WorkspaceStore::selected_slot))}</h2>

            <Show
                when=move || !products().is_empty()
                fallback=move || {
                    view! {
                        <div class="shelf__empty">
                            <p>{move || filter.with(empty_message)}</p>
                            <Show when=move || filter.with(ShelfFilter::has_query)>
                                <button class="btn shelf__empty-clear" on:click=move |_| query.set(String::new())>
                                    "Clear search"
                                </button>
                            </Show>
                        </div>
                    }
                }
            >
                <div class="shelf__grid">
                    <For each=products key=|product| product.id.clone() let:product>
                        <ShelfCard product=product/>
                    </For>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn ShelfCard(product: Product) -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();

    let id = product.id.clone();
    let selected = move || store.with(|s| s.selected_product_id() == Some(id.as_str()));
    let price = format!("{}/day", format_price(product.price_per_day));
    let title = product.description.clone();
    let image = (product.image_url.clone(), product.name.clone(), product.emoji.clone());
    let name = product.name.clone();

    view! {
        <button
            class="shelf-card"
            class:shelf-card--selected=selected
            title=title
            on:click=move |_| store.update(|s| s.select_product(&product))
        >
            <ProductImage src=image.0 alt=image.1 emoji=image.2 class_name="shelf-card__image"/>
            <span class="shelf-card__name">{name}</span>
            <span class="shelf-card__price">{price}</span>
        </button>
    }
}
