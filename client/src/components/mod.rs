//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the builder chrome and read/write the session's
//! `WorkspaceStore` and `UiState` from Leptos context providers. Pure
//! presentation helpers sit next to each component and are unit tested
//! without a DOM.

pub mod floating_toolbar;
pub mod item_inspector;
pub mod lifestyle_zones;
pub mod product_image;
pub mod product_shelf;
pub mod rent_modal;
pub mod rent_summary_bar;
pub mod workspace_canvas;
