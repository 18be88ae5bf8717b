//! Desk scene with clickable equipment slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas draws two layers: the desk surface (monitors, lamp, keyboard,
//! desk plant) and the floor (chair, floor plant, side table). Every slot is
//! a button that calls `select_slot`; the shelf and inspector react to the
//! resulting selection.
//!
//! Empty slots render a dashed placeholder, and the prominent ones also get a
//! floating hotspot label. The keyboard is part of the base desk and always
//! renders, filled or not.

#[cfg(test)]
#[path = "workspace_canvas_test.rs"]
mod workspace_canvas_test;

use leptos::prelude::*;

use configurator::catalog::Catalog;
use configurator::slot::{SlotId, SlotZone};
use configurator::store::WorkspaceStore;

use crate::state::ui::UiState;

/// Accessible name for a slot button.
fn slot_aria_label(slot: SlotId, occupant: Option<&str>) -> String {
    match occupant {
        Some(name) => format!("{}: {name}", slot.label()),
        None => format!("Add {}", slot.label()),
    }
}

/// Whether to draw the dashed empty placeholder for a slot.
fn shows_placeholder(slot: SlotId, filled: bool) -> bool {
    !filled && !slot.always_visible()
}

fn slots_in(zone: SlotZone) -> impl Iterator<Item = SlotId> {
    SlotId::ALL.into_iter().filter(move |slot| slot.zone() == zone)
}

#[component]
pub fn WorkspaceCanvas() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let desk = slots_in(SlotZone::Desk).map(|slot| CanvasSlot(CanvasSlotProps { slot })).collect_view();
    let floor = slots_in(SlotZone::Floor).map(|slot| CanvasSlot(CanvasSlotProps { slot })).collect_view();

    view! {
        <section class="canvas" class:canvas--grid=move || ui.with(|u| u.show_grid)>
            <div class="canvas__wall"></div>
            <div class="canvas__desk">
                <div class="canvas__desk-surface"></div>
                {desk}
            </div>
            <div class="canvas__floor">{floor}</div>
        </section>
    }
}

#[component]
fn CanvasSlot(slot: SlotId) -> impl IntoView {
    let store = expect_context::<RwSignal<WorkspaceStore>>();
    let catalog = expect_context::<StoredValue<Catalog>>();

    let occupant = move || {
        store.with(|s| {
            let id = s.filled_slots().get(slot)?;
            catalog.with_value(|c| c.get(id).map(|p| (p.name.clone(), p.emoji.clone())))
        })
    };
    let filled = move || store.with(|s| s.filled_slots().is_filled(slot));
    let selected = move || store.with(|s| s.selected_slot() == Some(slot));
    let aria_label = move || {
        let occupant = occupant();
        slot_aria_label(slot, occupant.as_ref().map(|(name, _)| name.as_str()))
    };

    view! {
        <button
            class=format!("canvas-slot canvas-slot--{slot}")
            class:canvas-slot--filled=filled
            class:canvas-slot--selected=selected
            class:canvas-slot--placeholder=move || shows_placeholder(slot, filled())
            aria-label=aria_label
            on:click=move |_| store.update(|s| s.select_slot(slot))
        >
            <span class="canvas-slot__visual">
                {move || occupant().map(|(_, emoji)| emoji)}
            </span>
            {slot.hotspot_label().map(|label| {
                view! {
                    <Show when=move || !filled()>
                        <span class="canvas-slot__hotspot">{label}</span>
                    </Show>
                }
            })}
        </button>
    }
}
