//! Client-side presentation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Workspace data (filled slots, selection, history) belongs to
//! `configurator::store::WorkspaceStore`. Modules here hold only the chrome
//! around it: toggles, modal visibility and checkout drafts.

pub mod ui;
