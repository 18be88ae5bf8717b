//! Product shelf filtering.
//!
//! The shelf narrows the catalog in three stages: free-text search, the
//! active category tab, then compatibility with the selected slot. Each stage
//! keeps catalog order.

#[cfg(test)]
#[path = "shelf_test.rs"]
mod shelf_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, Product};
use crate::slot::SlotId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfFilter {
    /// Free-text query; blank means no text filtering.
    #[serde(default)]
    pub query: String,
    /// `None` is the "All" tab.
    #[serde(default)]
    pub category: Option<Category>,
    /// Usually the store's selected slot.
    #[serde(default)]
    pub slot: Option<SlotId>,
}

impl ShelfFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_slot(mut self, slot: Option<SlotId>) -> Self {
        self.slot = slot;
        self
    }

    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Products visible on the shelf under this filter.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut result = catalog.search(&self.query);
        if let Some(category) = self.category {
            result.retain(|p| p.category == category);
        }
        if let Some(slot) = self.slot {
            result.retain(|p| p.fits(slot));
        }
        result
    }
}
