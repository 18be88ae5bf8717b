//! Product thumbnail with an emoji fallback.

use leptos::prelude::*;

/// Renders the product image, swapping to the emoji if the image fails to
/// load or no URL is set.
#[component]
pub fn ProductImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] emoji: String,
    #[prop(optional, into)] class_name: String,
) -> impl IntoView {
    let failed = RwSignal::new(src.is_empty());
    let wrapper_class = format!("product-image {class_name}");

    view! {
        <span class=wrapper_class>
            <Show
                when=move || !failed.get()
                fallback={
                    let emoji = emoji.clone();
                    move || view! { <span class="product-image__emoji">{emoji.clone()}</span> }
                }
            >
                <img
                    class="product-image__img"
                    src=src.clone()
                    alt=alt.clone()
                    loading="lazy"
                    on:error=move |_| failed.set(true)
                />
            </Show>
        </span>
    }
}
