//! Priced view of the current workspace.
//!
//! The inspector's setup list, the summary bar, and the checkout summary table
//! all show the same lines and total. `RentalQuote` computes them once per
//! render from the store and catalog.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::pricing::{RentalDuration, format_price};
use crate::slot::SlotId;
use crate::store::WorkspaceStore;

/// One placed product, priced for the quote's duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub slot: SlotId,
    pub product_id: String,
    pub name: String,
    pub emoji: String,
    pub image_url: String,
    pub price: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RentalQuote {
    pub duration: RentalDuration,
    pub lines: Vec<QuoteLine>,
    pub total: u32,
}

impl RentalQuote {
    #[must_use]
    pub fn from_store(store: &WorkspaceStore, catalog: &Catalog) -> Self {
        let duration = store.duration();
        let lines: Vec<QuoteLine> = store
            .filled_items(catalog)
            .into_iter()
            .map(|item| QuoteLine {
                slot: item.slot,
                product_id: item.product.id.clone(),
                name: item.product.name.clone(),
                emoji: item.product.emoji.clone(),
                image_url: item.product.image_url.clone(),
                price: item.product.price(duration),
            })
            .collect();
        let total = lines.iter().map(|line| line.price).sum();
        Self { duration, lines, total }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `"$110"`
    #[must_use]
    pub fn total_display(&self) -> String {
        format_price(self.total)
    }

    /// `"3 items"`; singular for one.
    #[must_use]
    pub fn count_display(&self) -> String {
        match self.lines.len() {
            1 => "1 item".to_owned(),
            n => format!("{n} items"),
        }
    }
}
