//! Workspace store: the single source of truth for one builder session.
//!
//! DESIGN
//! ======
//! The store owns slot occupancy, selection, rental duration, the active
//! lifestyle zone, and a bounded undo history. Derived values (selected
//! product, filled items, totals) are computed on every read from the state
//! plus a caller-supplied [`Catalog`]; nothing derived is cached.
//!
//! Every action that changes `filled_slots` first pushes a snapshot of
//! `{filled_slots, selected_slot, selected_product_id}` onto the history.
//! Selection, duration, and zone actions never touch history.
//!
//! There are no error paths. Slots come from a closed enum, products come
//! from the catalog, and the only degenerate cases (undo with empty history,
//! removing from an empty slot) are inert.
//!
//! TRADE-OFFS
//! ==========
//! `select_product` only auto-places when the product fits the selected slot,
//! while `place_product` places unconditionally. Compatibility filtering for
//! direct placement is the shelf's job, so both paths are kept as they are.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::catalog::{Catalog, Product};
use crate::history::History;
use crate::pricing::RentalDuration;
use crate::slot::{FilledSlots, SlotId};
use crate::zone::LifestyleZone;

/// State captured immediately before a slot-mutating action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub filled_slots: FilledSlots,
    pub selected_slot: Option<SlotId>,
    pub selected_product_id: Option<String>,
}

/// A placed product resolved through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledItem<'a> {
    pub product: &'a Product,
    pub slot: SlotId,
}

/// Workspace session state. Views read fields through accessors and mutate
/// only through the action methods.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceStore {
    filled_slots: FilledSlots,
    selected_slot: Option<SlotId>,
    selected_product_id: Option<String>,
    duration: RentalDuration,
    active_zone: Option<LifestyleZone>,
    history: History<Snapshot>,
}

impl WorkspaceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // STATE
    // =========================================================================

    #[must_use]
    pub fn filled_slots(&self) -> &FilledSlots {
        &self.filled_slots
    }

    #[must_use]
    pub fn selected_slot(&self) -> Option<SlotId> {
        self.selected_slot
    }

    #[must_use]
    pub fn selected_product_id(&self) -> Option<&str> {
        self.selected_product_id.as_deref()
    }

    #[must_use]
    pub fn duration(&self) -> RentalDuration {
        self.duration
    }

    #[must_use]
    pub fn active_zone(&self) -> Option<LifestyleZone> {
        self.active_zone
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of steps `undo` can currently reverse.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    // =========================================================================
    // DERIVED
    // =========================================================================

    /// Catalog entry for the selected product id, if set and resolvable.
    #[must_use]
    pub fn selected_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.selected_product_id.as_deref().and_then(|id| catalog.get(id))
    }

    /// The inspector is shown only when both a slot and a product are selected.
    #[must_use]
    pub fn inspector_open(&self) -> bool {
        self.selected_slot.is_some() && self.selected_product_id.is_some()
    }

    /// Placed products in slot order. Ids the catalog cannot resolve are
    /// skipped.
    #[must_use]
    pub fn filled_items<'a>(&self, catalog: &'a Catalog) -> Vec<FilledItem<'a>> {
        self.filled_slots
            .iter()
            .filter_map(|(slot, id)| catalog.get(id).map(|product| FilledItem { product, slot }))
            .collect()
    }

    #[must_use]
    pub fn item_count(&self, catalog: &Catalog) -> usize {
        self.filled_items(catalog).len()
    }

    /// Sum of every placed product's price for the current duration.
    #[must_use]
    pub fn total_price(&self, catalog: &Catalog) -> u32 {
        self.filled_items(catalog)
            .iter()
            .map(|item| item.product.price(self.duration))
            .sum()
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Select `slot`. If it is filled, its occupant becomes the selected
    /// product; if it is empty, the current product selection is kept so a
    /// follow-up `select_product` can auto-place into it.
    pub fn select_slot(&mut self, slot: SlotId) {
        self.selected_slot = Some(slot);
        if let Some(occupant) = self.filled_slots.get(slot) {
            self.selected_product_id = Some(occupant.to_owned());
        }
    }

    /// Select `product`, auto-placing it into the selected slot when it fits.
    ///
    /// The history snapshot is taken before the product selection changes, so
    /// undo restores the previously selected product too.
    pub fn select_product(&mut self, product: &Product) {
        let target = self.selected_slot.filter(|slot| product.fits(*slot));
        if let Some(slot) = target {
            self.push_snapshot();
            self.filled_slots.insert(slot, product.id.clone());
            log::debug!("auto-placed {} into {slot}", product.id);
        }
        self.selected_product_id = Some(product.id.clone());
    }

    /// Place `product_id` into `slot` and select both, replacing any occupant.
    ///
    /// No compatibility check is made here.
    pub fn place_product(&mut self, product_id: impl Into<String>, slot: SlotId) {
        let product_id = product_id.into();
        self.push_snapshot();
        self.filled_slots.insert(slot, product_id.clone());
        self.selected_slot = Some(slot);
        log::debug!("placed {product_id} into {slot}");
        self.selected_product_id = Some(product_id);
    }

    /// Vacate `slot` and clear the selection. History is pushed and the
    /// selection cleared even when the slot was already empty.
    pub fn remove_from_slot(&mut self, slot: SlotId) {
        self.push_snapshot();
        let removed = self.filled_slots.remove(slot);
        self.clear_selection();
        log::debug!("removed {removed:?} from {slot}");
    }

    /// Empty every slot and clear the selection.
    pub fn clear_canvas(&mut self) {
        self.push_snapshot();
        self.filled_slots.clear();
        self.clear_selection();
        log::debug!("canvas cleared");
    }

    /// Restore the state captured before the most recent slot mutation.
    pub fn undo(&mut self) {
        let Some(snapshot) = self.history.pop() else {
            log::debug!("undo ignored: history empty");
            return;
        };
        self.filled_slots = snapshot.filled_slots;
        self.selected_slot = snapshot.selected_slot;
        self.selected_product_id = snapshot.selected_product_id;
        log::debug!("undo applied, {} steps remain", self.history.len());
    }

    pub fn set_duration(&mut self, duration: RentalDuration) {
        self.duration = duration;
    }

    /// Activate `zone`, or clear it if it is already active.
    pub fn set_active_zone(&mut self, zone: LifestyleZone) {
        self.active_zone = if self.active_zone == Some(zone) { None } else { Some(zone) };
    }

    /// Dismiss the inspector without touching any placement.
    pub fn close_inspector(&mut self) {
        self.clear_selection();
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn clear_selection(&mut self) {
        self.selected_slot = None;
        self.selected_product_id = None;
    }

    fn push_snapshot(&mut self) {
        self.history.push(Snapshot {
            filled_slots: self.filled_slots.clone(),
            selected_slot: self.selected_slot,
            selected_product_id: self.selected_product_id.clone(),
        });
    }
}
