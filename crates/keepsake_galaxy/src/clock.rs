//! Monotonic scene clock

use crate::config::MAX_TICK_DELTA;

/// Elapsed-time accumulator advanced once per tick.
///
/// The raw host delta is clamped to [`MAX_TICK_DELTA`] before it is applied,
/// so a stalled tab resumes smoothly instead of teleporting every object.
/// Elapsed time never decreases; the clock resets only by constructing a new
/// animator.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationClock {
    elapsed: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tick. Returns the clamped delta actually consumed.
    pub fn advance(&mut self, raw_delta: f32) -> f32 {
        let delta = raw_delta.clamp(0.0, MAX_TICK_DELTA);
        self.elapsed += delta;
        delta
    }

    /// Total clamped time consumed so far, in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_clamped_delta() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.advance(0.016), 0.016);
        assert!((clock.elapsed() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn stall_deltas_clamp_to_max() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.advance(5.0), MAX_TICK_DELTA);
        assert!((clock.elapsed() - MAX_TICK_DELTA).abs() < 1e-6);
    }

    #[test]
    fn negative_deltas_are_ignored() {
        let mut clock = AnimationClock::new();
        clock.advance(0.05);
        clock.advance(-1.0);
        assert!((clock.elapsed() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn elapsed_never_decreases() {
        let mut clock = AnimationClock::new();
        let mut last = 0.0;
        for raw in [0.016, 0.0, 0.2, -3.0, 0.033] {
            clock.advance(raw);
            assert!(clock.elapsed() >= last);
            last = clock.elapsed();
        }
    }
}
