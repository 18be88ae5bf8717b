//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is loaded once at startup and never mutated, so handlers share
//! it behind an `Arc` without locking.

use std::sync::Arc;

use configurator::catalog::{Catalog, CatalogError};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }

    /// State backed by the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded product data is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Catalog::builtin().map(Self::new)
    }
}
