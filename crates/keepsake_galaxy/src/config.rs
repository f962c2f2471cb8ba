//! Scene configuration and tuning constants

/// Largest per-tick delta accepted by the clock, in seconds. Protects the
/// closed-form transforms from a huge jump after tab backgrounding.
pub const MAX_TICK_DELTA: f32 = 0.1;

// Pulse tuning.
pub const PULSE_STEP: f32 = 1.0;
pub const PULSE_CEILING: f32 = 1.0;
pub const PULSE_DECAY_RATE: f32 = 0.4;
pub const PULSE_BOOST_GAIN: f32 = 2.4;

// Trigger window driving reveal activation and amplify bursts.
pub const TRIGGER_WINDOW: f32 = 1.3;
pub const ACTIVATE_TRIGGER_COUNT: usize = 4;
pub const AMPLIFY_TRIGGER_COUNT: usize = 3;
pub const ACTIVATE_MULTIPLIER: f32 = 1.2;
pub const AMPLIFY_MULTIPLIER: f32 = 1.0;

// Reveal and burst tuning.
pub const REVEAL_SPEED: f32 = 0.6;
pub const REVEAL_START_SCALE: f32 = 0.12;
pub const BURST_STEP: f32 = 0.9;
pub const BURST_CEILING: f32 = 1.6;
pub const BURST_DECAY_RATE: f32 = 0.8;

// Ring geometry.
pub const RING_RADII: [f32; 3] = [28.0, 42.0, 58.0];

// Star field sampling.
pub const STAR_MIN_COUNT: usize = 900;
pub const STAR_BASE_COUNT: usize = 1300;
pub const STAR_SHELL_RADIUS: (f32, f32) = (60.0, 320.0);

// Photo orbit tuning.
pub const PHOTO_MIN_COUNT: usize = 12;
/// Billboards update on a fixed 30 Hz step, independent of the render rate.
pub const PHOTO_UPDATE_STEP: f32 = 1.0 / 30.0;
pub const RADIUS_EASE_BASE: f32 = 1.8;
pub const OPACITY_EASE_RATE: f32 = 2.5;
/// A billboard's target radius never exceeds its base radius plus this.
pub const MAX_RADIUS_OFFSET: f32 = 160.0;
pub const WOBBLE_RATE: f32 = 0.2;
pub const WOBBLE_AMPLITUDE: f32 = 3.0;

/// Interval between periodic texture swaps while unshown sources remain.
pub const SWAP_INTERVAL: f32 = 2.2;

/// Clock deadline after which the billboard set reports ready even if some
/// textures never arrived.
pub const READY_DEADLINE: f32 = 8.0;

/// Host-facing knobs for scene construction
#[derive(Clone, Copy, Debug)]
pub struct GalaxyConfig {
    /// Scales star and billboard counts and billboard footprints. 0.5-0.8
    /// for low-end devices, ~1.0 for default quality.
    pub detail_factor: f32,
    /// Hard cap on the number of photo billboards.
    pub device_limit: usize,
    /// Whether the hidden secret marker is placed in the scene.
    pub secret_marker: bool,
}

impl GalaxyConfig {
    pub fn desktop() -> Self {
        Self {
            detail_factor: 0.8,
            device_limit: 200,
            secret_marker: true,
        }
    }

    pub fn mobile() -> Self {
        Self {
            detail_factor: 0.8,
            device_limit: 60,
            secret_marker: true,
        }
    }

    /// Number of billboards for a source list of the given length.
    ///
    /// An empty manifest yields an empty orbit; otherwise at least
    /// [`PHOTO_MIN_COUNT`] billboards are created (cycling through sources)
    /// up to the device limit.
    pub fn photo_count(&self, source_count: usize) -> usize {
        if source_count == 0 {
            return 0;
        }
        let scaled = (source_count as f32 * self.detail_factor).round() as usize;
        PHOTO_MIN_COUNT.max(scaled.min(self.device_limit))
    }

    /// Number of star points at the configured detail level.
    pub fn star_count(&self) -> usize {
        let scaled = (STAR_BASE_COUNT as f32 * self.detail_factor).round() as usize;
        STAR_MIN_COUNT.max(scaled)
    }
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self::desktop()
    }
}
