//! Workspace configurator logic for the desk rental storefront.
//!
//! This crate has no browser dependencies. It owns everything the builder UI
//! needs to decide *what* is on the virtual desk: the fixed set of slots, the
//! product catalog, the shelf filter, rental durations and the workspace
//! store that coordinates slot occupancy, selection, undo history and derived
//! pricing. The `client` crate renders from these types and routes every
//! mutation through [`store::WorkspaceStore`] actions.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`slot`] | Slot identifiers, scene metadata, and the typed [`slot::FilledSlots`] map |
//! | [`catalog`] | Products, categories, and the read-only [`catalog::Catalog`] |
//! | [`shelf`] | Search / category / slot filter used by the product shelf |
//! | [`pricing`] | [`pricing::RentalDuration`] and per-duration price selection |
//! | [`zone`] | Lifestyle zone labels |
//! | [`history`] | Bounded undo stack |
//! | [`store`] | The workspace store: state, actions, and derived values |
//! | [`quote`] | Priced line items for the inspector, summary bar, and checkout |
//! | [`checkout`] | Simulated checkout form and its validation |

pub mod catalog;
pub mod checkout;
pub mod history;
pub mod pricing;
pub mod quote;
pub mod shelf;
pub mod slot;
pub mod store;
pub mod zone;
