//! Checkout modal: workspace summary, delivery note, and the booking form.
//!
//! DESIGN
//! ======
//! Field drafts live in `UiState::checkout`, not in the component, so
//! closing and reopening the modal keeps what the user typed. Submission is
//! simulated: a valid form flips the session to its submitted step and the
//! success panel replaces the form.

#[cfg(test)]
#[path = "rent_modal_test.rs"]
mod rent_modal_test;

use leptos::prelude::*;

use configurator::catalog::Catalog;
use configurator::checkout::CheckoutField;
use configurator::pricing::format_price;
use configurator::quote::RentalQuote;
use configurator::store::WorkspaceStore;

use crate::state::ui::UiState;

/// Input `id` for a form field, also used by its `<label for>`.
fn field_input_id(field: CheckoutField) -> String {
    let key = match field {
        CheckoutField::FullName => "full-name",
        CheckoutField::Whatsapp => "whatsapp",
        CheckoutField::Address => "address",
        CheckoutField::MoveInDate => "move-in-date",
    };
    format!("checkout-{key}")
}

#[component]
pub fn RentModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let submitted = move || ui.with(|u| u.checkout.is_submitted());

    view! {
        <Show when=move || ui.with(|u| u.rent_modal_open)>
            <div class="modal-overlay" on:click=move |_| ui.update(UiState::close_rent_modal)></div>
            <div class="modal" role="dialog" aria-modal="true">
                <Show when=submitted fallback=|| view! { <CheckoutPanel/> }>
                    <SuccessPanel/>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn SuccessPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="modal__success">
            <span class="modal__success-emoji">"🎉"</span>
            <h2 class="modal__success-title">"Workspace booked!"</h2>
            <p class="modal__success-text">
                "We'll WhatsApp you within 1 hour to confirm your delivery details and schedule."
            </p>
            <button class="btn btn--primary" on:click=move |_| ui.update(UiState::close_rent_modal)>
                "Done"
            </button>
        </div>
    }
}

#[component]
fn CheckoutPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();
    let catalog = expect_context::<StoredValue<Catalog>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let quote = Memo::new(move |_| store.with(|s| catalog.with_value(|c| RentalQuote::from_store(s, c))));
    let form_valid = move || ui.with(|u| u.checkout.form.is_valid());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ui.update(|u| {
            if let Err(e) = u.checkout.submit() {
                log::warn!("checkout rejected: {e}");
            }
        });
    };

    let fields = CheckoutField::ALL
        .into_iter()
        .map(|field| {
            let id = field_input_id(field);
            view! {
                <div class="modal__field">
                    <label class="modal__label" for=id.clone()>{field.label()}</label>
                    <input
                        id=id
                        class="modal__input"
                        type=field.input_type()
                        placeholder=field.placeholder()
                        required=true
                        prop:value=move || ui.with(|u| u.checkout.form.get(field).to_owned())
                        on:input=move |ev| ui.update(|u| u.checkout.form.set(field, event_target_value(&ev)))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="modal__form" on:submit=on_submit>
            <header class="modal__header">
                <h2 class="modal__title">"Your Bali Office Awaits 🌴"</h2>
                <button
                    type="button"
                    class="modal__close"
                    aria-label="Close"
                    on:click=move |_| ui.update(UiState::close_rent_modal)
                >
                    "✕"
                </button>
            </header>

            <section class="modal__summary">
                <h3 class="modal__section-title">"Your Workspace"</h3>
                <For each=move || quote.get().lines key=|line| line.slot let:line>
                    <div class="modal__line">
                        <span class="modal__line-emoji">{line.emoji}</span>
                        <span class="modal__line-name">{line.name}</span>
                        <span class="modal__line-price">{format_price(line.price)}</span>
                    </div>
                </For>
                <div class="modal__total">
                    <span>"Total"</span>
                    <span class="modal__total-amount">
                        {move || quote.with(RentalQuote::total_display)}
                        <span class="modal__total-suffix">{move || quote.with(|q| q.duration.suffix())}</span>
                    </span>
                </div>
            </section>

            <section class="modal__delivery">
                <span>"🛵"</span>
                <p>
                    "We'll deliver and set up your workspace within "
                    <strong>"48 hours"</strong>
                    " anywhere in Bali."
                </p>
            </section>

            <section class="modal__fields">{fields}</section>

            <footer class="modal__footer">
                <button type="submit" class="btn btn--primary modal__submit" disabled=move || !form_valid()>
                    "Confirm & Rent →"
                </button>
            </footer>
        </form>
    }
}
