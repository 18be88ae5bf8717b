//! Slot identifiers and slot occupancy.
//!
//! A slot is one of nine fixed placement positions in the virtual workspace.
//! The set is known at compile time and never changes, so it is modelled as a
//! plain enum. `FilledSlots` is the partial slot → product id mapping owned by
//! the workspace store.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named placement position in the workspace scene.
///
/// Declaration order is the canonical slot order; `FilledSlots` iterates in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotId {
    MonitorLeft,
    MonitorCenter,
    MonitorRight,
    Lamp,
    Keyboard,
    PlantDesk,
    Chair,
    PlantFloor,
    SideTable,
}

/// Scene layer a slot is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotZone {
    /// On the desk surface, inside the perspective desk-items layer.
    Desk,
    /// On the floor in front of the desk.
    Floor,
}

/// Error returned when a string does not name a slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown slot: {0}")]
pub struct SlotParseError(pub String);

impl SlotId {
    /// Every slot, in canonical order.
    pub const ALL: [SlotId; 9] = [
        SlotId::MonitorLeft,
        SlotId::MonitorCenter,
        SlotId::MonitorRight,
        SlotId::Lamp,
        SlotId::Keyboard,
        SlotId::PlantDesk,
        SlotId::Chair,
        SlotId::PlantFloor,
        SlotId::SideTable,
    ];

    /// Wire identifier, e.g. `"monitor-left"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SlotId::MonitorLeft => "monitor-left",
            SlotId::MonitorCenter => "monitor-center",
            SlotId::MonitorRight => "monitor-right",
            SlotId::Lamp => "lamp",
            SlotId::Keyboard => "keyboard",
            SlotId::PlantDesk => "plant-desk",
            SlotId::Chair => "chair",
            SlotId::PlantFloor => "plant-floor",
            SlotId::SideTable => "side-table",
        }
    }

    /// Short display label shown on the empty placeholder.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SlotId::MonitorLeft | SlotId::MonitorCenter | SlotId::MonitorRight => "Monitor",
            SlotId::Lamp => "Lamp",
            SlotId::Keyboard => "Keyboard",
            SlotId::PlantDesk | SlotId::PlantFloor => "Plant",
            SlotId::Chair => "Chair",
            SlotId::SideTable => "Side Table",
        }
    }

    #[must_use]
    pub fn zone(self) -> SlotZone {
        match self {
            SlotId::Chair | SlotId::PlantFloor | SlotId::SideTable => SlotZone::Floor,
            _ => SlotZone::Desk,
        }
    }

    /// Floating call-to-action shown over the scene while the slot is empty.
    ///
    /// Only the most prominent slots get one.
    #[must_use]
    pub fn hotspot_label(self) -> Option<&'static str> {
        match self {
            SlotId::MonitorLeft | SlotId::MonitorCenter | SlotId::MonitorRight => Some("Add Monitor!"),
            SlotId::Lamp => Some("Add Lamp"),
            SlotId::PlantFloor => Some("Add Plant"),
            SlotId::Chair => Some("Place a Chair"),
            SlotId::Keyboard | SlotId::PlantDesk | SlotId::SideTable => None,
        }
    }

    /// The keyboard is part of the base desk illustration and has no empty
    /// placeholder.
    #[must_use]
    pub fn always_visible(self) -> bool {
        self == SlotId::Keyboard
    }

    #[must_use]
    pub fn is_monitor(self) -> bool {
        matches!(self, SlotId::MonitorLeft | SlotId::MonitorCenter | SlotId::MonitorRight)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotId {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotId::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| SlotParseError(s.to_owned()))
    }
}

/// Partial mapping from slot to the id of the product occupying it.
///
/// Only occupied slots have an entry. Product ids are not validated here;
/// callers obtain them from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledSlots(BTreeMap<SlotId, String>);

impl FilledSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Product id occupying `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    #[must_use]
    pub fn is_filled(&self, slot: SlotId) -> bool {
        self.0.contains_key(&slot)
    }

    /// Place `product_id` into `slot`, returning the previous occupant.
    pub fn insert(&mut self, slot: SlotId, product_id: impl Into<String>) -> Option<String> {
        self.0.insert(slot, product_id.into())
    }

    /// Vacate `slot`, returning the previous occupant.
    pub fn remove(&mut self, slot: SlotId) -> Option<String> {
        self.0.remove(&slot)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Occupied slots and their product ids, in canonical slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &str)> {
        self.0.iter().map(|(slot, id)| (*slot, id.as_str()))
    }
}
