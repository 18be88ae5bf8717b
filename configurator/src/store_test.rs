use super::*;
use crate::catalog::Category;

fn product(id: &str, prices: (u32, u32, u32), slots: &[SlotId]) -> Product {
    Product {
        id: id.to_owned(),
        name: id.to_uppercase(),
        category: Category::Peripherals,
        description: String::new(),
        emoji: "📦".to_owned(),
        price_per_day: prices.0,
        price_per_week: prices.1,
        price_per_month: prices.2,
        image_url: String::new(),
        slug: format!("/products/{id}"),
        width: 1,
        height: 1,
        tags: Vec::new(),
        compatible_slots: slots.to_vec(),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        product("monitor", (2, 13, 45), &[SlotId::MonitorLeft, SlotId::MonitorCenter, SlotId::MonitorRight]),
        product("chair", (1, 6, 20), &[SlotId::Chair]),
        product("light-bar", (1, 5, 17), &[SlotId::Lamp]),
        product("cable", (1, 2, 4), &[]),
    ])
    .unwrap()
}

fn get<'a>(catalog: &'a Catalog, id: &str) -> &'a Product {
    catalog.get(id).unwrap()
}

fn snapshot_of(store: &WorkspaceStore) -> Snapshot {
    Snapshot {
        filled_slots: store.filled_slots().clone(),
        selected_slot: store.selected_slot(),
        selected_product_id: store.selected_product_id().map(str::to_owned),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_store_is_empty() {
    let catalog = catalog();
    let store = WorkspaceStore::new();
    assert!(store.filled_slots().is_empty());
    assert_eq!(store.selected_slot(), None);
    assert_eq!(store.selected_product_id(), None);
    assert_eq!(store.duration(), RentalDuration::Month);
    assert_eq!(store.active_zone(), None);
    assert!(!store.can_undo());
    assert!(!store.inspector_open());
    assert_eq!(store.item_count(&catalog), 0);
    assert_eq!(store.total_price(&catalog), 0);
}

// =============================================================
// place_product
// =============================================================

#[test]
fn place_product_fills_and_selects() {
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::Lamp);
    store.place_product("chair", SlotId::Chair);
    assert_eq!(store.filled_slots().get(SlotId::Chair), Some("chair"));
    assert_eq!(store.selected_slot(), Some(SlotId::Chair));
    assert_eq!(store.selected_product_id(), Some("chair"));
    assert!(store.inspector_open());
}

#[test]
fn place_product_skips_compatibility_check() {
    let mut store = WorkspaceStore::new();
    store.place_product("monitor", SlotId::Chair);
    assert_eq!(store.filled_slots().get(SlotId::Chair), Some("monitor"));
}

#[test]
fn place_product_overwrites_occupant() {
    let mut store = WorkspaceStore::new();
    store.place_product("monitor", SlotId::MonitorLeft);
    store.place_product("cable", SlotId::MonitorLeft);
    assert_eq!(store.filled_slots().get(SlotId::MonitorLeft), Some("cable"));
    assert_eq!(store.filled_slots().len(), 1);
}

// =============================================================
// select_slot / select_product
// =============================================================

#[test]
fn select_filled_slot_selects_occupant() {
    let mut store = WorkspaceStore::new();
    store.place_product("chair", SlotId::Chair);
    store.close_inspector();
    store.select_slot(SlotId::Chair);
    assert_eq!(store.selected_product_id(), Some("chair"));
}

#[test]
fn select_empty_slot_keeps_product_selection() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_product(get(&catalog, "monitor"));
    store.select_slot(SlotId::Lamp);
    assert_eq!(store.selected_slot(), Some(SlotId::Lamp));
    assert_eq!(store.selected_product_id(), Some("monitor"));
}

#[test]
fn select_slot_does_not_touch_history() {
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::Lamp);
    store.select_slot(SlotId::Lamp);
    assert!(!store.can_undo());
    assert_eq!(store.selected_slot(), Some(SlotId::Lamp));
}

#[test]
fn select_product_auto_places_when_compatible() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::MonitorCenter);
    store.select_product(get(&catalog, "monitor"));
    assert_eq!(store.filled_slots().get(SlotId::MonitorCenter), Some("monitor"));
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn select_product_does_not_place_when_incompatible() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.place_product("light-bar", SlotId::Lamp);
    store.select_slot(SlotId::Lamp);
    store.select_product(get(&catalog, "chair"));
    assert_eq!(store.filled_slots().get(SlotId::Lamp), Some("light-bar"));
    assert_eq!(store.selected_product_id(), Some("chair"));
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn select_product_without_slot_only_selects() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_product(get(&catalog, "chair"));
    assert!(store.filled_slots().is_empty());
    assert_eq!(store.selected_product_id(), Some("chair"));
    assert!(!store.can_undo());
}

#[test]
fn select_product_that_fits_nowhere_never_places() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    for slot in SlotId::ALL {
        store.select_slot(slot);
        store.select_product(get(&catalog, "cable"));
    }
    assert!(store.filled_slots().is_empty());
}

// =============================================================
// Inspector visibility
// =============================================================

#[test]
fn inspector_needs_both_slot_and_product() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::Chair);
    assert!(!store.inspector_open());
    store.select_product(get(&catalog, "chair"));
    assert!(store.inspector_open());
}

#[test]
fn product_alone_does_not_open_inspector() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_product(get(&catalog, "monitor"));
    assert!(!store.inspector_open());
}

#[test]
fn close_inspector_keeps_placements() {
    let mut store = WorkspaceStore::new();
    store.place_product("chair", SlotId::Chair);
    store.close_inspector();
    assert!(!store.inspector_open());
    assert_eq!(store.selected_slot(), None);
    assert_eq!(store.selected_product_id(), None);
    assert_eq!(store.filled_slots().get(SlotId::Chair), Some("chair"));
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn selected_product_resolves_through_catalog() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    assert!(store.selected_product(&catalog).is_none());
    store.place_product("chair", SlotId::Chair);
    assert_eq!(store.selected_product(&catalog).map(|p| p.id.as_str()), Some("chair"));
    store.place_product("ghost", SlotId::Lamp);
    assert!(store.selected_product(&catalog).is_none());
}

// =============================================================
// remove_from_slot / clear_canvas
// =============================================================

#[test]
fn remove_from_slot_clears_entry_and_selection() {
    let mut store = WorkspaceStore::new();
    store.place_product("chair", SlotId::Chair);
    store.remove_from_slot(SlotId::Chair);
    assert!(!store.filled_slots().is_filled(SlotId::Chair));
    assert_eq!(store.selected_slot(), None);
    assert_eq!(store.selected_product_id(), None);
}

#[test]
fn remove_from_empty_slot_still_pushes_history_and_clears_selection() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::Lamp);
    store.select_product(get(&catalog, "chair"));
    assert!(!store.can_undo());

    store.remove_from_slot(SlotId::SideTable);
    assert!(store.filled_slots().is_empty());
    assert_eq!(store.selected_slot(), None);
    assert_eq!(store.selected_product_id(), None);
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn clear_canvas_empties_slots_and_selection() {
    let mut store = WorkspaceStore::new();
    store.place_product("monitor", SlotId::MonitorLeft);
    store.place_product("chair", SlotId::Chair);
    store.clear_canvas();
    assert!(store.filled_slots().is_empty());
    assert_eq!(store.selected_slot(), None);
    assert_eq!(store.selected_product_id(), None);
}

// =============================================================
// undo
// =============================================================

#[test]
fn undo_on_empty_history_is_noop() {
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::Chair);
    let before = snapshot_of(&store);
    store.undo();
    assert_eq!(snapshot_of(&store), before);
    assert!(!store.can_undo());
}

#[test]
fn undo_reverses_exactly_one_step() {
    let mut store = WorkspaceStore::new();
    store.place_product("monitor", SlotId::MonitorLeft);
    let before_second = snapshot_of(&store);
    store.place_product("chair", SlotId::Chair);
    store.undo();
    assert_eq!(snapshot_of(&store), before_second);
}

#[test]
fn undo_all_restores_initial_state() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::Lamp);
    let initial = snapshot_of(&store);

    store.select_product(get(&catalog, "light-bar"));
    store.place_product("monitor", SlotId::MonitorRight);
    store.remove_from_slot(SlotId::Lamp);
    store.place_product("chair", SlotId::Chair);
    store.clear_canvas();
    assert_eq!(store.undo_depth(), 5);

    for _ in 0..5 {
        store.undo();
    }
    assert_eq!(snapshot_of(&store), initial);
    assert!(!store.can_undo());
}

#[test]
fn undo_after_auto_place_restores_previous_product_selection() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_product(get(&catalog, "chair"));
    store.select_slot(SlotId::MonitorLeft);
    store.select_product(get(&catalog, "monitor"));
    store.undo();
    assert!(store.filled_slots().is_empty());
    assert_eq!(store.selected_slot(), Some(SlotId::MonitorLeft));
    assert_eq!(store.selected_product_id(), Some("chair"));
}

#[test]
fn undo_after_clear_restores_everything() {
    let mut store = WorkspaceStore::new();
    store.place_product("monitor", SlotId::MonitorLeft);
    store.place_product("chair", SlotId::Chair);
    let before_clear = snapshot_of(&store);
    store.clear_canvas();
    store.undo();
    assert_eq!(snapshot_of(&store), before_clear);
}

#[test]
fn history_is_bounded_to_twenty_steps() {
    let mut store = WorkspaceStore::new();
    let mut states = vec![snapshot_of(&store)];
    for n in 0..25 {
        let slot = SlotId::ALL[n % SlotId::ALL.len()];
        store.place_product(format!("p{n}"), slot);
        states.push(snapshot_of(&store));
    }
    assert_eq!(store.undo_depth(), 20);

    let mut undone = 0;
    while store.can_undo() {
        store.undo();
        undone += 1;
    }
    assert_eq!(undone, 20);
    // 25 mutations, 20 undone: we land on the state after the fifth.
    assert_eq!(snapshot_of(&store), states[5]);
}

#[test]
fn selection_duration_and_zone_actions_skip_history() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.select_slot(SlotId::Chair);
    store.select_product(get(&catalog, "cable"));
    store.set_duration(RentalDuration::Day);
    store.set_active_zone(LifestyleZone::RelaxZone);
    store.close_inspector();
    assert!(!store.can_undo());
}

// =============================================================
// Pricing
// =============================================================

#[test]
fn total_price_sums_selected_duration_field() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.place_product("monitor", SlotId::MonitorLeft);
    store.place_product("monitor", SlotId::MonitorRight);
    store.place_product("chair", SlotId::Chair);

    assert_eq!(store.total_price(&catalog), 45 + 45 + 20);
    store.set_duration(RentalDuration::Week);
    assert_eq!(store.total_price(&catalog), 13 + 13 + 6);
    store.set_duration(RentalDuration::Day);
    assert_eq!(store.total_price(&catalog), 2 + 2 + 1);
    assert_eq!(store.item_count(&catalog), 3);
}

#[test]
fn duration_change_leaves_slots_untouched() {
    let mut store = WorkspaceStore::new();
    store.place_product("chair", SlotId::Chair);
    let slots = store.filled_slots().clone();
    store.set_duration(RentalDuration::Week);
    assert_eq!(store.filled_slots(), &slots);
    assert_eq!(store.duration(), RentalDuration::Week);
}

#[test]
fn unresolvable_ids_are_skipped_in_items_and_totals() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.place_product("chair", SlotId::Chair);
    store.place_product("discontinued", SlotId::SideTable);
    assert_eq!(store.filled_slots().len(), 2);
    assert_eq!(store.item_count(&catalog), 1);
    assert_eq!(store.total_price(&catalog), 20);
}

#[test]
fn filled_items_follow_slot_order() {
    let catalog = catalog();
    let mut store = WorkspaceStore::new();
    store.place_product("chair", SlotId::Chair);
    store.place_product("light-bar", SlotId::Lamp);
    store.place_product("monitor", SlotId::MonitorLeft);
    let slots: Vec<_> = store.filled_items(&catalog).iter().map(|item| item.slot).collect();
    assert_eq!(slots, vec![SlotId::MonitorLeft, SlotId::Lamp, SlotId::Chair]);
}

// =============================================================
// Lifestyle zone
// =============================================================

#[test]
fn same_zone_twice_toggles_off() {
    let mut store = WorkspaceStore::new();
    store.set_active_zone(LifestyleZone::CoffeeStation);
    assert_eq!(store.active_zone(), Some(LifestyleZone::CoffeeStation));
    store.set_active_zone(LifestyleZone::CoffeeStation);
    assert_eq!(store.active_zone(), None);
}

#[test]
fn different_zone_replaces_active_zone() {
    let mut store = WorkspaceStore::new();
    store.set_active_zone(LifestyleZone::CoffeeStation);
    store.set_active_zone(LifestyleZone::GarageSpace);
    assert_eq!(store.active_zone(), Some(LifestyleZone::GarageSpace));
}
