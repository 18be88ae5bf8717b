//! Rental durations.
//!
//! Duration is a single global setting: it selects which of a product's three
//! unit prices applies to every placed item at once.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing period used to pick each product's price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalDuration {
    Day,
    Week,
    #[default]
    Month,
}

impl RentalDuration {
    /// Selector order: shortest period first.
    pub const ALL: [RentalDuration; 3] = [RentalDuration::Day, RentalDuration::Week, RentalDuration::Month];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RentalDuration::Day => "day",
            RentalDuration::Week => "week",
            RentalDuration::Month => "month",
        }
    }

    /// Capitalized label for the duration selector buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RentalDuration::Day => "Day",
            RentalDuration::Week => "Week",
            RentalDuration::Month => "Month",
        }
    }

    /// Price suffix, e.g. `"/ month"`.
    #[must_use]
    pub fn suffix(self) -> String {
        format!("/ {}", self.as_str())
    }
}

impl fmt::Display for RentalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a whole-dollar amount the way the storefront displays it.
#[must_use]
pub fn format_price(amount: u32) -> String {
    format!("${amount}")
}
