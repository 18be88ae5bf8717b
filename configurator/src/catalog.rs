//! Product catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is static data compiled into the binary from
//! `data/products.json`. It is loaded once per session (client) or once per
//! process (server) and shared read-only. The workspace store never owns it;
//! callers pass a `&Catalog` into the store's derived-value methods.
//!
//! Lookups are total: an unknown id is `None`, never an error.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pricing::RentalDuration;
use crate::slot::SlotId;

const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

/// Product category, used for shelf tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Monitors,
    Furniture,
    Computers,
    Peripherals,
    Gaming,
    AudioVideo,
    Fitness,
    Appliances,
}

/// Display metadata for a category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub label: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl Category {
    /// Tab order on the shelf.
    pub const ALL: [Category; 8] = [
        Category::Monitors,
        Category::Furniture,
        Category::Computers,
        Category::Peripherals,
        Category::Gaming,
        Category::AudioVideo,
        Category::Fitness,
        Category::Appliances,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Monitors => "monitors",
            Category::Furniture => "furniture",
            Category::Computers => "computers",
            Category::Peripherals => "peripherals",
            Category::Gaming => "gaming",
            Category::AudioVideo => "audio-video",
            Category::Fitness => "fitness",
            Category::Appliances => "appliances",
        }
    }

    #[must_use]
    pub fn info(self) -> CategoryInfo {
        let (label, emoji) = match self {
            Category::Monitors => ("Monitors", "🖥"),
            Category::Furniture => ("Furniture", "🪑"),
            Category::Computers => ("Computers", "💻"),
            Category::Peripherals => ("Keyboard, Mouse & Accessories", "⌨️"),
            Category::Gaming => ("Gaming", "🎮"),
            Category::AudioVideo => ("Audio & Video", "🎙"),
            Category::Fitness => ("Health & Fitness", "🏃"),
            Category::Appliances => ("Home Appliances", "🏠"),
        };
        CategoryInfo { id: self, label, emoji }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}

/// Category metadata for every tab, in display order.
#[must_use]
pub fn categories() -> Vec<CategoryInfo> {
    Category::ALL.into_iter().map(Category::info).collect()
}

/// A rentable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Fallback glyph shown when the product image fails to load.
    pub emoji: String,
    pub price_per_day: u32,
    pub price_per_week: u32,
    pub price_per_month: u32,
    pub image_url: String,
    /// Path of the product page on the storefront.
    pub slug: String,
    /// Canvas footprint in grid units.
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Slots this product may occupy. Empty means it fits nowhere (cables,
    /// whiteboards, desks that replace the scene itself).
    #[serde(default)]
    pub compatible_slots: Vec<SlotId>,
}

impl Product {
    /// Unit price for `duration`.
    #[must_use]
    pub fn price(&self, duration: RentalDuration) -> u32 {
        match duration {
            RentalDuration::Day => self.price_per_day,
            RentalDuration::Week => self.price_per_week,
            RentalDuration::Month => self.price_per_month,
        }
    }

    #[must_use]
    pub fn fits(&self, slot: SlotId) -> bool {
        self.compatible_slots.contains(&slot)
    }

    /// Case-insensitive match against name, description, and tags.
    ///
    /// `needle` must already be lowercased and trimmed.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.contains(needle))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
}

/// Immutable, order-stable product list with id lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from `products`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed JSON and
    /// [`CatalogError::DuplicateId`] on repeated ids.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    /// The storefront catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data file is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PRODUCTS)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|pos| self.products.get(*pos))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products that may occupy `slot`.
    #[must_use]
    pub fn for_slot(&self, slot: SlotId) -> Vec<&Product> {
        self.products.iter().filter(|p| p.fits(slot)).collect()
    }

    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category == category).collect()
    }

    /// Text search over name, description, and tags.
    ///
    /// A blank query returns every product.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products.iter().filter(|p| p.matches(&needle)).collect()
    }
}
