//! Wrapped slide deck and relationship timer
//!
//! A linear deck of slides with clamped navigation and a progress readout,
//! plus the running "time together" breakdown shown above it. The breakdown
//! uses flat 365-day years and 30-day months on purpose, matching how the
//! experience has always displayed it.

use std::time::{Duration, SystemTime};

/// Linear slide navigation with clamped bounds.
#[derive(Clone, Copy, Debug)]
pub struct SlideDeck {
    current: usize,
    total: usize,
}

impl SlideDeck {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Jump to a slide; out-of-range indices clamp to the deck bounds.
    pub fn show(&mut self, index: usize) {
        self.current = index.min(self.total.saturating_sub(1));
    }

    /// Advance one slide. False on the last slide.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one slide. False on the first slide.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Back to the first slide.
    pub fn replay(&mut self) {
        self.current = 0;
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Progress through the deck as a percentage, counting the current slide.
    pub fn progress_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current + 1) as f32 / self.total as f32 * 100.0
    }
}

/// Elapsed-time breakdown for the relationship timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerBreakdown {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimerBreakdown {
    /// Break an elapsed duration down using 365-day years and 30-day months.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let total_seconds = elapsed.as_secs();
        let total_days = total_seconds / 86_400;
        Self {
            years: total_days / 365,
            months: (total_days % 365) / 30,
            days: (total_days % 365) % 30,
            hours: (total_seconds / 3_600) % 24,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }

    /// Breakdown of the time since `start`, saturating at zero for clocks
    /// that report a time before the start instant.
    pub fn since(start: SystemTime, now: SystemTime) -> Self {
        let elapsed = now.duration_since(start).unwrap_or(Duration::ZERO);
        Self::from_elapsed(elapsed)
    }

    /// The `HH:MM:SS` tail of the timer display.
    pub fn clock_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
