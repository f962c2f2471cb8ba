//! Gift-box unwrap
//!
//! A wrapped box opens after a required number of clicks. Opening is one-way
//! and fires the confetti celebration exactly once; further clicks are
//! no-ops.

use keepsake_animation::ConfettiSystem;

/// Clicks needed to pop the lid.
pub const REQUIRED_CLICKS: u32 = 5;

/// Result of one click on the box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Still wrapped; `remaining` clicks to go.
    Shaking { remaining: u32 },
    /// This click opened the box.
    Opened,
    /// The box was already open.
    AlreadyOpen,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GiftUnwrap {
    clicks: u32,
    open: bool,
}

impl GiftUnwrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one click, scheduling the confetti burst on the click that
    /// opens the box.
    pub fn click(&mut self, confetti: &mut ConfettiSystem) -> ClickOutcome {
        if self.open {
            return ClickOutcome::AlreadyOpen;
        }

        self.clicks += 1;
        if self.clicks >= REQUIRED_CLICKS {
            self.open = true;
            confetti.burst();
            tracing::info!(clicks = self.clicks, "gift opened");
            ClickOutcome::Opened
        } else {
            ClickOutcome::Shaking {
                remaining: REQUIRED_CLICKS - self.clicks,
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        REQUIRED_CLICKS.saturating_sub(self.clicks)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
