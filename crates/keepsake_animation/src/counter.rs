//! Eased count-up for result screens

use crate::easing::Easing;

/// Animates a number from a start value up to a target over a fixed duration.
///
/// Used by the quiz result screen to count the final prize up with an
/// ease-out curve.
#[derive(Clone, Debug)]
pub struct CountUp {
    start: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl CountUp {
    /// Count from zero to `target` over `duration` seconds with ease-out-cubic
    pub fn new(target: f32, duration: f32) -> Self {
        Self {
            start: 0.0,
            target,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Override the starting value
    pub fn from(mut self, start: f32) -> Self {
        self.start = start;
        self
    }

    /// Override the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        let progress = self.easing.apply(self.elapsed / self.duration);
        self.start + (self.target - self.start) * progress
    }

    /// Current value rounded to the nearest whole number
    pub fn rounded(&self) -> i64 {
        self.value().round() as i64
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}
