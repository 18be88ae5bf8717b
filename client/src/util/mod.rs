//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate timing and browser concerns from component
//! rendering so the logic can be unit tested without a DOM.

pub mod clear_confirm;
