//! Pulse energy and the trigger window
//!
//! A pulse is a transient scalar of user-triggered energy. Each trigger adds
//! a fixed step (clamped to a ceiling) and the scalar decays linearly toward
//! zero every tick. Trigger timestamps are also kept in a short sliding
//! window; the animator reads the in-window count to decide reveal
//! activation and amplify bursts.

use smallvec::SmallVec;

use crate::config::{
    PULSE_BOOST_GAIN, PULSE_CEILING, PULSE_DECAY_RATE, PULSE_STEP, TRIGGER_WINDOW,
};

#[derive(Clone, Debug, Default)]
pub struct PulseState {
    strength: f32,
    /// Trigger timestamps on the scene clock, oldest first.
    triggers: SmallVec<[f32; 8]>,
}

impl PulseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger at clock time `now`.
    ///
    /// Bumps the strength by the fixed step and returns how many triggers
    /// (including this one) fall within the sliding window.
    pub fn trigger(&mut self, now: f32) -> usize {
        self.strength = (self.strength + PULSE_STEP).min(PULSE_CEILING);
        self.triggers.retain(|&mut t| now - t <= TRIGGER_WINDOW);
        self.triggers.push(now);
        self.triggers.len()
    }

    /// Linear decay applied once per tick.
    pub fn decay(&mut self, dt: f32) {
        self.strength = keepsake_animation::decay(self.strength, dt * PULSE_DECAY_RATE);
    }

    /// Residual energy in `[0, PULSE_CEILING]`.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Speed multiplier derived from the residual energy.
    pub fn boost(&self) -> f32 {
        1.0 + self.strength * PULSE_BOOST_GAIN
    }
}
