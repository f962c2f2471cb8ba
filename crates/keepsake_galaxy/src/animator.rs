//! The galaxy animator
//!
//! Owns every scene object plus the pulse/reveal state machines and advances
//! them all from a single `tick`. The tick order is fixed: clock, energy
//! decay, load completions, texture swaps, closed-form object updates, then
//! the fixed-rate billboard steps, ending with a rebuilt frame snapshot.
//!
//! All user input funnels through two entry points: [`GalaxyAnimator::tick`]
//! (time) and [`GalaxyAnimator::pulse_trigger`] (taps). Everything else is
//! derived.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use crate::assets::{TextureLoader, TextureRequestId};
use crate::clock::AnimationClock;
use crate::config::{
    GalaxyConfig, ACTIVATE_MULTIPLIER, ACTIVATE_TRIGGER_COUNT, AMPLIFY_MULTIPLIER,
    AMPLIFY_TRIGGER_COUNT, PHOTO_UPDATE_STEP, READY_DEADLINE, RING_RADII, SWAP_INTERVAL,
};
use crate::frame::{BillboardFrame, GalaxyFrame, ObjectFrame, StarFieldFrame, StarUniforms, Transform};
use crate::objects::{Emblem, Glow, PhotoBillboard, RingObject, SecretMarker, StarField};
use crate::pulse::PulseState;
use crate::reveal::RevealState;

pub struct GalaxyAnimator<L: TextureLoader> {
    config: GalaxyConfig,
    clock: AnimationClock,
    pulse: PulseState,
    reveal: RevealState,

    emblem: Emblem,
    glow: Glow,
    rings: Vec<RingObject>,
    stars: StarField,
    photos: Vec<PhotoBillboard>,
    secret: Option<SecretMarker>,

    sources: Vec<String>,
    next_source: usize,
    loader: L,
    /// In-flight texture requests, keyed to the billboard that asked.
    pending: FxHashMap<TextureRequestId, usize>,

    photo_accum: f32,
    swap_accum: f32,
    rng: StdRng,
    frame: GalaxyFrame,
}

impl<L: TextureLoader> GalaxyAnimator<L> {
    pub fn new(config: GalaxyConfig, sources: Vec<String>, loader: L) -> Self {
        Self::with_rng(config, sources, loader, StdRng::from_entropy())
    }

    /// Construct with an explicit RNG, for deterministic scenes.
    pub fn with_rng(
        config: GalaxyConfig,
        sources: Vec<String>,
        mut loader: L,
        mut rng: StdRng,
    ) -> Self {
        let rings = (0..RING_RADII.len())
            .map(|i| RingObject::new(i, &mut rng))
            .collect();
        let stars = StarField::generate(config.star_count(), &mut rng);

        let photo_count = config.photo_count(sources.len());
        let mut photos = Vec::with_capacity(photo_count);
        let mut pending = FxHashMap::default();
        for i in 0..photo_count {
            photos.push(PhotoBillboard::new(config.detail_factor, &mut rng));
            let id = loader.request(&sources[i % sources.len()]);
            pending.insert(id, i);
        }

        let secret = config.secret_marker.then(|| SecretMarker::new(&mut rng));

        tracing::debug!(
            photos = photo_count,
            stars = stars.len(),
            sources = sources.len(),
            "galaxy scene constructed"
        );

        Self {
            config,
            clock: AnimationClock::new(),
            pulse: PulseState::new(),
            reveal: RevealState::new(),
            emblem: Emblem::new(),
            glow: Glow::new(),
            rings,
            stars,
            photos,
            secret,
            next_source: photo_count,
            sources,
            loader,
            pending,
            photo_accum: 0.0,
            swap_accum: 0.0,
            rng,
            frame: GalaxyFrame::default(),
        }
    }

    /// Advance the whole scene by one host frame and return the snapshot.
    pub fn tick(&mut self, raw_delta: f32) -> &GalaxyFrame {
        let dt = self.clock.advance(raw_delta);
        let elapsed = self.clock.elapsed();

        self.pulse.decay(dt);
        self.reveal.advance(dt);

        self.drain_completions();
        self.advance_swap_timer(dt);

        self.emblem
            .update(elapsed, dt, self.pulse.strength(), self.pulse.boost());
        self.glow.update(elapsed, dt, self.pulse.strength());

        let group_scale = self.reveal.group_scale();
        let boost = self.pulse.boost();
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.update(i, elapsed, dt, boost, group_scale);
        }
        self.stars.update(dt);

        // Billboards advance on a fixed 30 Hz step so their easing rates
        // stay frame-rate independent.
        let burst = self.reveal.burst();
        let revealed = self.reveal.is_activated();
        self.photo_accum += dt;
        while self.photo_accum >= PHOTO_UPDATE_STEP {
            self.photo_accum -= PHOTO_UPDATE_STEP;
            for billboard in &mut self.photos {
                billboard.update(PHOTO_UPDATE_STEP, boost, burst, revealed);
            }
            if let Some(marker) = &mut self.secret {
                marker.update(PHOTO_UPDATE_STEP, boost, burst, revealed);
            }
        }

        self.rebuild_frame(elapsed);
        &self.frame
    }

    /// Record a user tap.
    ///
    /// Four taps inside the sliding window activate the reveal with an
    /// amplified burst; once active, three suffice for a plain burst.
    pub fn pulse_trigger(&mut self) {
        let count = self.pulse.trigger(self.clock.elapsed());
        if !self.reveal.is_activated() {
            if count >= ACTIVATE_TRIGGER_COUNT {
                self.reveal.activate();
                self.amplify(ACTIVATE_MULTIPLIER);
            }
        } else if count >= AMPLIFY_TRIGGER_COUNT {
            self.amplify(AMPLIFY_MULTIPLIER);
        }
    }

    /// Whether the hidden marker is currently visible and tappable.
    pub fn secret_visible(&self) -> bool {
        self.secret.is_some() && self.reveal.is_activated()
    }

    /// True once every billboard is textured, or after the readiness
    /// deadline has passed on the scene clock.
    pub fn photos_ready(&self) -> bool {
        self.clock.elapsed() >= READY_DEADLINE
            || self.photos.iter().all(PhotoBillboard::is_textured)
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_activated()
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    pub fn frame(&self) -> &GalaxyFrame {
        &self.frame
    }

    /// Static scene geometry the renderer binds once.
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn photos(&self) -> &[PhotoBillboard] {
        &self.photos
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    fn amplify(&mut self, multiplier: f32) {
        self.reveal.amplify(multiplier);
        for billboard in &mut self.photos {
            let extra = self.rng.gen_range(0.0..40.0) * multiplier;
            billboard.push_target(extra);
        }
        if let Some(marker) = &mut self.secret {
            let extra = self.rng.gen_range(0.0..40.0) * multiplier;
            marker.push_target(extra);
        }
    }

    fn drain_completions(&mut self) {
        for (id, result) in self.loader.poll_completions() {
            let Some(index) = self.pending.remove(&id) else {
                continue;
            };
            if let Some(billboard) = self.photos.get_mut(index) {
                billboard.apply_load(result);
            }
        }
    }

    /// Periodically retarget a random billboard at the next unshown source.
    /// Runs only while the manifest holds more sources than billboards.
    fn advance_swap_timer(&mut self, dt: f32) {
        if self.sources.len() <= self.photos.len() || self.photos.is_empty() {
            return;
        }
        self.swap_accum += dt;
        while self.swap_accum >= SWAP_INTERVAL {
            self.swap_accum -= SWAP_INTERVAL;
            let index = self.rng.gen_range(0..self.photos.len());
            let source = &self.sources[self.next_source % self.sources.len()];
            let id = self.loader.request(source);
            self.pending.insert(id, index);
            self.next_source += 1;
        }
    }

    fn rebuild_frame(&mut self, elapsed: f32) {
        self.frame.emblem = ObjectFrame {
            transform: Transform {
                position: Vec3::ZERO,
                rotation: Vec3::new(0.0, self.emblem.yaw, 0.0),
                scale: Vec3::splat(self.emblem.scale),
            },
            opacity: 1.0,
        };
        self.frame.glow = ObjectFrame {
            transform: Transform {
                position: Vec3::ZERO,
                rotation: Vec3::new(0.0, 0.0, self.glow.roll),
                scale: Vec3::splat(self.glow.scale_factor),
            },
            opacity: self.glow.opacity,
        };

        self.frame.rings.clear();
        self.frame.rings.extend(self.rings.iter().map(|ring| ObjectFrame {
            transform: Transform {
                position: Vec3::ZERO,
                rotation: Vec3::new(ring.pitch, ring.yaw, ring.roll),
                scale: Vec3::splat(ring.scale),
            },
            opacity: ring.base_opacity,
        }));

        self.frame.stars = StarFieldFrame {
            yaw: self.stars.yaw,
            uniforms: StarUniforms {
                time: elapsed,
                burst: self.reveal.burst(),
            },
        };

        self.frame.photos.clear();
        self.frame
            .photos
            .extend(self.photos.iter().map(|billboard| BillboardFrame {
                position: billboard.position(elapsed),
                size: billboard.footprint(),
                opacity: billboard.opacity,
                textured: billboard.is_textured(),
            }));

        self.frame.secret = self.secret.as_ref().map(|marker| BillboardFrame {
            position: marker.position(elapsed),
            size: Vec2::splat(SecretMarker::FOOTPRINT * marker.scale),
            opacity: marker.opacity,
            textured: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ManualLoader;
    use crate::config::PHOTO_MIN_COUNT;

    fn sources(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("photo_{i}.jpg")).collect()
    }

    fn animator(source_count: usize) -> GalaxyAnimator<ManualLoader> {
        GalaxyAnimator::with_rng(
            GalaxyConfig::desktop(),
            sources(source_count),
            ManualLoader::new(),
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn scene_construction_requests_initial_textures() {
        let animator = animator(20);
        assert_eq!(animator.photos().len(), 16); // 20 * 0.8 detail
        assert_eq!(animator.loader().pending().count(), 16);
    }

    #[test]
    fn small_manifests_cycle_through_the_floor_count() {
        let animator = animator(3);
        assert_eq!(animator.photos().len(), PHOTO_MIN_COUNT);
        assert_eq!(animator.loader().pending().count(), PHOTO_MIN_COUNT);
    }

    #[test]
    fn empty_manifest_builds_an_empty_orbit() {
        let mut animator = animator(0);
        assert!(animator.photos().is_empty());
        animator.tick(0.016);
        assert!(animator.frame().photos.is_empty());
        assert!(animator.photos_ready());
    }

    #[test]
    fn three_taps_do_not_activate_but_four_do() {
        let mut animator = animator(5);
        for _ in 0..3 {
            animator.pulse_trigger();
        }
        assert!(!animator.is_revealed());

        animator.pulse_trigger();
        assert!(animator.is_revealed());
    }

    #[test]
    fn slow_taps_never_activate() {
        let mut animator = animator(5);
        for _ in 0..8 {
            animator.pulse_trigger();
            // Step well past the trigger window between taps.
            for _ in 0..20 {
                animator.tick(0.1);
            }
        }
        assert!(!animator.is_revealed());
    }

    #[test]
    fn secret_marker_is_gated_on_reveal() {
        let mut animator = animator(5);
        assert!(!animator.secret_visible());
        for _ in 0..4 {
            animator.pulse_trigger();
        }
        assert!(animator.secret_visible());

        // Marker opacity moves on the fixed 30 Hz step, so tick one full
        // step before sampling the frame.
        animator.tick(PHOTO_UPDATE_STEP);
        let secret = animator.frame().secret.expect("marker configured");
        assert!(secret.opacity > 0.0);
    }

    #[test]
    fn swap_timer_requests_unshown_sources() {
        let mut animator = animator(100);
        let initial = animator.loader().pending().count();

        // 3 seconds: one swap interval elapses.
        for _ in 0..180 {
            animator.tick(1.0 / 60.0);
        }
        assert_eq!(animator.loader().pending().count(), initial + 1);
    }

    #[test]
    fn swap_timer_is_idle_without_spare_sources() {
        let mut animator = animator(5);
        let initial = animator.loader().pending().count();
        for _ in 0..600 {
            animator.tick(1.0 / 60.0);
        }
        assert_eq!(animator.loader().pending().count(), initial);
    }

    #[test]
    fn readiness_comes_from_textures_or_deadline() {
        let mut animator = animator(5);
        assert!(!animator.photos_ready());

        let pending: Vec<_> = animator
            .loader()
            .pending()
            .map(|(id, _)| id)
            .collect();
        for id in pending {
            animator.loader_mut().complete_square(id, 128);
        }
        animator.tick(0.016);
        assert!(animator.photos_ready());

        // Deadline path: fresh scene, nothing ever completes.
        let mut stalled = animator_with_seed(5, 3);
        for _ in 0..((READY_DEADLINE * 60.0) as usize + 10) {
            stalled.tick(1.0 / 60.0);
        }
        assert!(stalled.photos_ready());
    }

    fn animator_with_seed(source_count: usize, seed: u64) -> GalaxyAnimator<ManualLoader> {
        GalaxyAnimator::with_rng(
            GalaxyConfig::desktop(),
            sources(source_count),
            ManualLoader::new(),
            StdRng::seed_from_u64(seed),
        )
    }
}
