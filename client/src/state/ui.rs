//! Local UI chrome state (grid overlay, clear confirmation, rent modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the workspace store so undo
//! history only ever covers slot contents and selection. Toggling the grid
//! or opening the modal is not an undoable action.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use configurator::checkout::CheckoutSession;

use crate::util::clear_confirm::ClearConfirm;

/// UI state for the builder page, provided as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Alignment grid drawn over the desk scene.
    pub show_grid: bool,
    /// Two-press confirmation for "Clear Canvas".
    pub clear_confirm: ClearConfirm,
    pub rent_modal_open: bool,
    /// Checkout drafts survive closing the modal.
    pub checkout: CheckoutSession,
}

impl UiState {
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn open_rent_modal(&mut self) {
        self.rent_modal_open = true;
    }

    /// Hide the modal and rewind checkout to the form step.
    pub fn close_rent_modal(&mut self) {
        self.rent_modal_open = false;
        self.checkout.reset();
    }
}
