//! Two-press confirmation for destructive toolbar actions.
//!
//! The first press arms the confirmation and the toolbar shows
//! "Confirm clear?". A second press within the timeout confirms. Otherwise
//! a timer scheduled at arm time calls [`ClearConfirm::expire`] with the
//! generation it was armed under.
//!
//! TRADE-OFFS
//! ==========
//! Timers cannot be cancelled from SSR-safe code, so stale timers are
//! tolerated instead: each arm bumps the generation and `expire` ignores any
//! generation but the current one.

#[cfg(test)]
#[path = "clear_confirm_test.rs"]
mod clear_confirm_test;

/// How long the armed state lasts before dismissing itself.
pub const CLEAR_CONFIRM_TIMEOUT_MS: u32 = 2_500;

/// Outcome of pressing the clear button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearPress {
    /// Confirmation is now showing; schedule `expire(generation)`.
    Armed(u64),
    /// Second press landed in time; clear the canvas.
    Confirmed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearConfirm {
    armed: bool,
    generation: u64,
}

impl ClearConfirm {
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn press(&mut self) -> ClearPress {
        if self.armed {
            self.armed = false;
            ClearPress::Confirmed
        } else {
            self.armed = true;
            self.generation = self.generation.wrapping_add(1);
            ClearPress::Armed(self.generation)
        }
    }

    /// Timer callback. Returns `true` if this call dismissed the confirmation.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.armed && self.generation == generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}
