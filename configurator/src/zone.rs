//! Lifestyle zones shown beneath the canvas.
//!
//! A zone is a thematic label with no effect on slots or pricing. At most one
//! is active at a time; see [`crate::store::WorkspaceStore::set_active_zone`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifestyleZone {
    CoffeeStation,
    OutdoorGear,
    RelaxZone,
    GarageSpace,
}

impl LifestyleZone {
    /// Display order, left to right.
    pub const ALL: [LifestyleZone; 4] = [
        LifestyleZone::CoffeeStation,
        LifestyleZone::OutdoorGear,
        LifestyleZone::RelaxZone,
        LifestyleZone::GarageSpace,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LifestyleZone::CoffeeStation => "Coffee Station",
            LifestyleZone::OutdoorGear => "Outdoor Gear",
            LifestyleZone::RelaxZone => "Relax Zone",
            LifestyleZone::GarageSpace => "Garage Space",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            LifestyleZone::CoffeeStation => "☕",
            LifestyleZone::OutdoorGear => "🏄",
            LifestyleZone::RelaxZone => "🛋️",
            LifestyleZone::GarageSpace => "🔧",
        }
    }
}
