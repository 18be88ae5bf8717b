//! Read-only catalog routes.
//!
//! The shelf filter that narrows the in-browser product grid also backs
//! `GET /api/products`, so both surfaces agree on what a query matches.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use configurator::catalog::{Category, CategoryInfo, Product, categories};
use configurator::shelf::ShelfFilter;
use configurator::slot::SlotId;

use crate::state::AppState;

/// Query string for `GET /api/products`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub slot: Option<String>,
}

impl ProductQuery {
    /// Parse into a shelf filter. Unknown category or slot names are client
    /// errors rather than empty results.
    fn to_filter(&self) -> Result<ShelfFilter, StatusCode> {
        let category = self
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()
            .map_err(|e| {
                tracing::debug!(error = %e, "rejecting product query");
                StatusCode::BAD_REQUEST
            })?;
        let slot = self
            .slot
            .as_deref()
            .map(str::parse::<SlotId>)
            .transpose()
            .map_err(|e| {
                tracing::debug!(error = %e, "rejecting product query");
                StatusCode::BAD_REQUEST
            })?;

        Ok(ShelfFilter::new()
            .with_query(self.q.clone().unwrap_or_default())
            .with_category(category)
            .with_slot(slot))
    }
}

/// `GET /api/categories`: category tabs in display order.
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(categories())
}

/// `GET /api/products`: products matching the search, category and slot.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, StatusCode> {
    let filter = query.to_filter()?;
    let products: Vec<Product> = filter.apply(&state.catalog).into_iter().cloned().collect();
    tracing::debug!(count = products.len(), "listed products");
    Ok(Json(products))
}

/// `GET /api/products/{id}`: fetch one product.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    state.catalog.get(&id).cloned().map(Json).ok_or_else(|| {
        tracing::debug!(%id, "product not found");
        StatusCode::NOT_FOUND
    })
}
