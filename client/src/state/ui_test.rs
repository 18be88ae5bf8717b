use configurator::checkout::{CheckoutField, CheckoutStep};

use super::*;

fn submitted_state() -> UiState {
    let mut state = UiState::default();
    state.checkout.form.set(CheckoutField::FullName, "Sarah Chen");
    state.checkout.form.set(CheckoutField::Whatsapp, "+62 812 3456 7890");
    state.checkout.form.set(CheckoutField::Address, "Canggu");
    state.checkout.form.set(CheckoutField::MoveInDate, "2026-11-01");
    state.open_rent_modal();
    state.checkout.submit().unwrap();
    state
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_grid_hidden() {
    let state = UiState::default();
    assert!(!state.show_grid);
}

#[test]
fn ui_state_default_modal_closed_on_form_step() {
    let state = UiState::default();
    assert!(!state.rent_modal_open);
    assert_eq!(state.checkout.step, CheckoutStep::Form);
}

#[test]
fn ui_state_default_clear_not_armed() {
    let state = UiState::default();
    assert!(!state.clear_confirm.is_armed());
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn toggle_grid_flips_back_and_forth() {
    let mut state = UiState::default();
    state.toggle_grid();
    assert!(state.show_grid);
    state.toggle_grid();
    assert!(!state.show_grid);
}

#[test]
fn close_rent_modal_rewinds_checkout_but_keeps_drafts() {
    let mut state = submitted_state();
    assert!(state.checkout.is_submitted());

    state.close_rent_modal();
    assert!(!state.rent_modal_open);
    assert!(!state.checkout.is_submitted());
    assert_eq!(state.checkout.form.get(CheckoutField::FullName), "Sarah Chen");
}
