//! Reveal latch and explosion burst
//!
//! The scene starts dormant: only the emblem breathes, rings sit at scale
//! zero and photo billboards fade out. Activation is a one-way latch; once
//! set, a `[0, 1]` progress scalar eases the whole group up to full scale
//! and never resets within a session. Activation events also feed a decaying
//! "burst" scalar consumed by the star shader and the billboard radius
//! easing.

use keepsake_animation::{decay, Easing};

use crate::config::{
    BURST_CEILING, BURST_DECAY_RATE, BURST_STEP, REVEAL_SPEED, REVEAL_START_SCALE,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct RevealState {
    activated: bool,
    progress: f32,
    burst: f32,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the reveal. Idempotent; there is no way back.
    pub fn activate(&mut self) {
        if !self.activated {
            self.activated = true;
            tracing::info!("reveal activated");
        }
    }

    /// Advance progress and decay the burst by one tick.
    pub fn advance(&mut self, dt: f32) {
        if self.activated {
            self.progress = (self.progress + dt * REVEAL_SPEED).min(1.0);
        }
        self.burst = decay(self.burst, dt * BURST_DECAY_RATE);
    }

    /// Add burst energy, capped at the ceiling.
    pub fn amplify(&mut self, multiplier: f32) {
        self.burst = (self.burst + BURST_STEP * multiplier).min(BURST_CEILING);
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Reveal progress in `[0, 1]`; zero while dormant.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Decaying burst energy in `[0, BURST_CEILING]`.
    pub fn burst(&self) -> f32 {
        self.burst
    }

    /// Group scale applied to rings and used for the reveal easing.
    ///
    /// Zero while dormant, then an ease-out-cubic ramp from the small start
    /// scale up to 1.
    pub fn group_scale(&self) -> f32 {
        if !self.activated {
            return 0.0;
        }
        let eased = Easing::EaseOutCubic.apply(self.progress);
        REVEAL_START_SCALE + (1.0 - REVEAL_START_SCALE) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dormant_group_scale_is_zero() {
        let mut reveal = RevealState::new();
        reveal.advance(10.0);
        assert_eq!(reveal.group_scale(), 0.0);
        assert_eq!(reveal.progress(), 0.0);
    }

    #[test]
    fn activation_is_one_way() {
        let mut reveal = RevealState::new();
        reveal.activate();
        assert!(reveal.is_activated());
        reveal.advance(100.0);
        assert!(reveal.is_activated());
        assert_eq!(reveal.progress(), 1.0);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut reveal = RevealState::new();
        reveal.activate();
        let mut last = 0.0;
        for _ in 0..300 {
            reveal.advance(0.016);
            assert!(reveal.progress() >= last);
            assert!(reveal.progress() <= 1.0);
            last = reveal.progress();
        }
    }

    #[test]
    fn group_scale_starts_small_and_reaches_one() {
        let mut reveal = RevealState::new();
        reveal.activate();
        assert!((reveal.group_scale() - REVEAL_START_SCALE).abs() < 1e-6);
        reveal.advance(10.0);
        assert!((reveal.group_scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn burst_caps_and_decays() {
        let mut reveal = RevealState::new();
        reveal.amplify(1.2);
        assert!((reveal.burst() - 1.08).abs() < 1e-6);

        reveal.amplify(1.0);
        assert!((reveal.burst() - BURST_CEILING).abs() < 1e-6);

        reveal.advance(1.0);
        assert!((reveal.burst() - (BURST_CEILING - BURST_DECAY_RATE)).abs() < 1e-5);

        reveal.advance(100.0);
        assert_eq!(reveal.burst(), 0.0);
    }
}
