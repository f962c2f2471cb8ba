//! Scene objects and their per-tick transform math
//!
//! Every transform here is a closed-form function of the scene clock plus a
//! handful of decaying scalars (pulse, burst, reveal scale). Objects own no
//! engine resources; they produce numbers the frame snapshot carries out.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Vec2, Vec3};
use rand::Rng;

use keepsake_animation::approach;

use crate::assets::{LoadResult, TextureData};
use crate::config::{
    MAX_RADIUS_OFFSET, OPACITY_EASE_RATE, RADIUS_EASE_BASE, RING_RADII, STAR_SHELL_RADIUS,
    WOBBLE_AMPLITUDE, WOBBLE_RATE,
};

/// The central emblem: a gentle periodic breathing scale plus a slow yaw.
#[derive(Clone, Copy, Debug)]
pub struct Emblem {
    pub scale: f32,
    pub yaw: f32,
}

impl Emblem {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            yaw: 0.0,
        }
    }

    pub fn update(&mut self, elapsed: f32, dt: f32, pulse: f32, boost: f32) {
        self.scale = 1.0 + (elapsed * 1.4).sin() * (0.07 + pulse * 0.25);
        self.yaw += 0.1 * dt * boost;
    }
}

impl Default for Emblem {
    fn default() -> Self {
        Self::new()
    }
}

/// Additive glow halo behind the emblem.
#[derive(Clone, Copy, Debug)]
pub struct Glow {
    pub roll: f32,
    pub scale_factor: f32,
    pub opacity: f32,
}

impl Glow {
    pub fn new() -> Self {
        Self {
            roll: 0.0,
            scale_factor: 1.0,
            opacity: 0.85,
        }
    }

    pub fn update(&mut self, elapsed: f32, dt: f32, pulse: f32) {
        self.roll -= 0.03 * dt;
        self.scale_factor = 1.0 + (elapsed * 1.3).sin() * 0.18 + pulse * 0.35;
        self.opacity =
            (0.55 + (elapsed * 1.4).sin() * 0.25 + pulse * 0.25).clamp(0.35, 1.0);
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self::new()
    }
}

/// A concentric orbit ring.
///
/// Radius and thickness are fixed at creation; only rotation and scale
/// evolve. The reveal group scale gates everything, so rings are inert
/// while the scene is dormant.
#[derive(Clone, Copy, Debug)]
pub struct RingObject {
    pub radius: f32,
    pub thickness: f32,
    pub base_opacity: f32,
    tilt_amplitude: f32,
    tilt_speed: f32,
    phase: f32,
    spin_dir: f32,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub scale: f32,
}

impl RingObject {
    pub fn new(index: usize, rng: &mut impl Rng) -> Self {
        Self {
            radius: RING_RADII[index % RING_RADII.len()],
            thickness: 0.6 + index as f32 * 0.1,
            base_opacity: 0.25 - index as f32 * 0.05,
            tilt_amplitude: 0.12 + index as f32 * 0.045,
            tilt_speed: 0.35 + index as f32 * 0.22,
            phase: rng.gen_range(0.0..TAU),
            spin_dir: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            roll: index as f32 * 0.45,
            pitch: FRAC_PI_2,
            yaw: 0.0,
            scale: 0.0,
        }
    }

    pub fn update(&mut self, index: usize, elapsed: f32, dt: f32, boost: f32, group_scale: f32) {
        self.roll += 0.045 * dt * (index as f32 + 1.0) * boost * self.spin_dir * group_scale;
        let tilt = (elapsed * self.tilt_speed + self.phase).sin() * self.tilt_amplitude;
        self.pitch = FRAC_PI_2 + tilt * group_scale;
        self.yaw = (elapsed * self.tilt_speed * 0.8 + self.phase).cos()
            * self.tilt_amplitude
            * 0.6
            * group_scale;
        self.scale = group_scale;
    }
}

/// Fixed point cloud with per-point twinkle attributes.
///
/// Positions are sampled once, uniformly on spherical shells, and never
/// move; only the whole-field yaw and the shared time/burst uniforms evolve.
#[derive(Clone, Debug)]
pub struct StarField {
    positions: Vec<Vec3>,
    twinkle_phases: Vec<f32>,
    twinkle_speeds: Vec<f32>,
    sizes: Vec<f32>,
    pub yaw: f32,
}

impl StarField {
    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let (min_r, max_r) = STAR_SHELL_RADIUS;
        let mut positions = Vec::with_capacity(count);
        let mut twinkle_phases = Vec::with_capacity(count);
        let mut twinkle_speeds = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);

        for _ in 0..count {
            let radius = rng.gen_range(min_r..max_r);
            let theta = rng.gen_range(0.0..TAU);
            // acos of a uniform sample gives an unbiased polar angle.
            let phi = rng.gen_range(-1.0_f32..1.0).acos();
            positions.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ));
            twinkle_phases.push(rng.gen_range(0.0..TAU));
            twinkle_speeds.push(rng.gen_range(0.5..2.0));
            sizes.push(rng.gen_range(0.6..1.4));
        }

        Self {
            positions,
            twinkle_phases,
            twinkle_speeds,
            sizes,
            yaw: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.yaw += 0.002 * dt;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Immutable point positions for the renderer to upload once.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-point twinkle attributes: (phase, speed, size).
    pub fn twinkle_attributes(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        self.positions.iter().enumerate().map(|(i, _)| {
            (
                self.twinkle_phases[i],
                self.twinkle_speeds[i],
                self.sizes[i],
            )
        })
    }
}

/// Texture state of a billboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TextureSlot {
    /// Flat placeholder visual until (or instead of) a real texture.
    #[default]
    Placeholder,
    Ready(TextureData),
}

/// A camera-facing photo plane on a circular orbit.
#[derive(Clone, Debug)]
pub struct PhotoBillboard {
    base_radius: f32,
    radius: f32,
    target_radius: f32,
    pub angle: f32,
    height: f32,
    wobble_phase: f32,
    speed: f32,
    base_footprint: f32,
    footprint: Vec2,
    pub opacity: f32,
    texture: TextureSlot,
}

impl PhotoBillboard {
    pub fn new(detail_factor: f32, rng: &mut impl Rng) -> Self {
        let base_radius = rng.gen_range(30.0..90.0);
        let base_footprint = rng.gen_range(8.0..14.0) * detail_factor;
        Self {
            base_radius,
            radius: base_radius,
            target_radius: base_radius,
            angle: rng.gen_range(0.0..TAU),
            height: rng.gen_range(-14.0..14.0),
            wobble_phase: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(0.05..0.15),
            base_footprint,
            // Small footprint until a texture arrives.
            footprint: Vec2::splat(base_footprint * 0.5),
            opacity: 0.0,
            texture: TextureSlot::Placeholder,
        }
    }

    /// One fixed-rate update step.
    pub fn update(&mut self, step: f32, boost: f32, burst: f32, revealed: bool) {
        self.radius = approach(
            self.radius,
            self.target_radius,
            step * (RADIUS_EASE_BASE + burst),
        );
        let opacity_target = if revealed { 1.0 } else { 0.0 };
        self.opacity = approach(self.opacity, opacity_target, step * OPACITY_EASE_RATE);
        self.angle += self.speed * boost * step;
    }

    /// Orbit position; independent of texture state by design, so a late
    /// load never moves the billboard.
    pub fn position(&self, elapsed: f32) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.radius,
            self.height + (self.wobble_phase + elapsed * WOBBLE_RATE).sin() * WOBBLE_AMPLITUDE,
            self.angle.sin() * self.radius,
        )
    }

    /// Push the target radius outward, capped relative to the base orbit.
    pub fn push_target(&mut self, extra: f32) {
        self.target_radius = (self.target_radius + extra).min(self.base_radius + MAX_RADIUS_OFFSET);
    }

    /// Apply a load completion. The previous texture (if any) is dropped
    /// here, releasing it synchronously on swap.
    pub fn apply_load(&mut self, result: LoadResult) {
        match result {
            Ok(texture) => {
                let aspect = texture.aspect();
                self.footprint = if aspect >= 1.0 {
                    Vec2::new(self.base_footprint, self.base_footprint / aspect)
                } else {
                    Vec2::new(self.base_footprint * aspect, self.base_footprint)
                };
                self.texture = TextureSlot::Ready(texture);
            }
            Err(error) => {
                tracing::warn!(%error, "texture load failed; keeping placeholder");
                self.footprint = Vec2::splat(self.base_footprint);
                self.texture = TextureSlot::Placeholder;
            }
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self.texture, TextureSlot::Ready(_))
    }

    pub fn texture(&self) -> Option<&TextureData> {
        match &self.texture {
            TextureSlot::Ready(texture) => Some(texture),
            TextureSlot::Placeholder => None,
        }
    }

    pub fn footprint(&self) -> Vec2 {
        self.footprint
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn target_radius(&self) -> f32 {
        self.target_radius
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }
}

/// The hidden secret billboard.
///
/// Orbits exactly like a photo billboard but pulses its glow from a
/// self-contained phase accumulator, untouched by the global pulse. Only
/// visible (and hit-testable) while the scene is revealed.
#[derive(Clone, Debug)]
pub struct SecretMarker {
    base_radius: f32,
    radius: f32,
    target_radius: f32,
    pub angle: f32,
    height: f32,
    wobble_phase: f32,
    speed: f32,
    glow_phase: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl SecretMarker {
    /// World footprint of the marker sprite.
    pub const FOOTPRINT: f32 = 6.0;

    pub fn new(rng: &mut impl Rng) -> Self {
        // Parked beyond the photo band so it only reads as part of the
        // scene once someone goes looking.
        let base_radius = rng.gen_range(95.0..115.0);
        Self {
            base_radius,
            radius: base_radius,
            target_radius: base_radius,
            angle: rng.gen_range(0.0..TAU),
            height: rng.gen_range(-20.0..20.0),
            wobble_phase: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(0.05..0.15),
            glow_phase: 0.0,
            opacity: 0.0,
            scale: 1.0,
        }
    }

    pub fn update(&mut self, step: f32, boost: f32, burst: f32, revealed: bool) {
        self.radius = approach(
            self.radius,
            self.target_radius,
            step * (RADIUS_EASE_BASE + burst),
        );
        self.angle += self.speed * boost * step;

        self.glow_phase += step * 2.0;
        self.opacity = if revealed {
            0.35 + ((self.glow_phase).sin() * 0.5 + 0.5) * 0.45
        } else {
            0.0
        };
        self.scale = 1.0 + (self.glow_phase * 1.7).sin() * 0.15;
    }

    pub fn position(&self, elapsed: f32) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.radius,
            self.height + (self.wobble_phase + elapsed * WOBBLE_RATE).sin() * WOBBLE_AMPLITUDE,
            self.angle.sin() * self.radius,
        )
    }

    pub fn push_target(&mut self, extra: f32) {
        self.target_radius = (self.target_radius + extra).min(self.base_radius + MAX_RADIUS_OFFSET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::LoadError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn rings_are_inert_while_dormant() {
        let mut rng = rng();
        let mut ring = RingObject::new(1, &mut rng);
        let roll_before = ring.roll;

        for i in 0..100 {
            ring.update(1, i as f32 * 0.016, 0.016, 1.0, 0.0);
        }
        assert_eq!(ring.roll, roll_before);
        assert_eq!(ring.scale, 0.0);
        assert!((ring.pitch - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn revealed_rings_spin_and_tilt() {
        let mut rng = rng();
        let mut ring = RingObject::new(0, &mut rng);
        let roll_before = ring.roll;
        ring.update(0, 1.0, 0.016, 1.0, 1.0);
        assert_ne!(ring.roll, roll_before);
        assert_eq!(ring.scale, 1.0);
    }

    #[test]
    fn star_positions_stay_on_shells() {
        let mut rng = rng();
        let field = StarField::generate(500, &mut rng);
        let (min_r, max_r) = STAR_SHELL_RADIUS;
        for position in field.positions() {
            let radius = position.length();
            assert!(radius >= min_r - 1e-3 && radius <= max_r + 1e-3);
        }
    }

    #[test]
    fn radius_converges_monotonically_without_overshoot() {
        let mut rng = rng();
        let mut billboard = PhotoBillboard::new(0.8, &mut rng);
        billboard.push_target(50.0);
        let target = billboard.target_radius();

        let mut last = billboard.radius();
        for _ in 0..600 {
            billboard.update(1.0 / 30.0, 1.0, 0.0, true);
            assert!(billboard.radius() >= last);
            assert!(billboard.radius() <= target);
            last = billboard.radius();
        }
        assert_eq!(billboard.radius(), target);
    }

    #[test]
    fn target_radius_is_capped() {
        let mut rng = rng();
        let mut billboard = PhotoBillboard::new(0.8, &mut rng);
        let cap = billboard.base_radius() + MAX_RADIUS_OFFSET;
        for _ in 0..50 {
            billboard.push_target(100.0);
        }
        assert_eq!(billboard.target_radius(), cap);
    }

    #[test]
    fn opacity_tracks_reveal_flag() {
        let mut rng = rng();
        let mut billboard = PhotoBillboard::new(0.8, &mut rng);
        for _ in 0..300 {
            billboard.update(1.0 / 30.0, 1.0, 0.0, true);
        }
        assert_eq!(billboard.opacity, 1.0);

        for _ in 0..300 {
            billboard.update(1.0 / 30.0, 1.0, 0.0, false);
        }
        assert_eq!(billboard.opacity, 0.0);
    }

    #[test]
    fn position_ignores_texture_state() {
        let mut rng = rng();
        let mut billboard = PhotoBillboard::new(0.8, &mut rng);
        for _ in 0..3 {
            billboard.update(1.0 / 30.0, 1.0, 0.0, true);
        }
        let before = billboard.position(0.1);

        billboard.apply_load(Ok(TextureData {
            source: "late.jpg".into(),
            width: 300,
            height: 200,
        }));
        assert_eq!(billboard.position(0.1), before);
    }

    #[test]
    fn texture_footprint_preserves_aspect() {
        let mut rng = rng();
        let mut billboard = PhotoBillboard::new(1.0, &mut rng);
        let base = billboard.base_footprint;

        billboard.apply_load(Ok(TextureData {
            source: "wide.jpg".into(),
            width: 200,
            height: 100,
        }));
        let footprint = billboard.footprint();
        assert!((footprint.x - base).abs() < 1e-6);
        assert!((footprint.y - base / 2.0).abs() < 1e-6);

        billboard.apply_load(Ok(TextureData {
            source: "tall.jpg".into(),
            width: 100,
            height: 200,
        }));
        let footprint = billboard.footprint();
        assert!((footprint.y - base).abs() < 1e-6);
        assert!((footprint.x - base / 2.0).abs() < 1e-6);
    }

    #[test]
    fn failed_load_keeps_default_footprint() {
        let mut rng = rng();
        let mut billboard = PhotoBillboard::new(1.0, &mut rng);
        billboard.apply_load(Err(LoadError::Fetch("missing".into())));
        assert!(!billboard.is_textured());
        assert_eq!(billboard.footprint(), Vec2::splat(billboard.base_footprint));
    }

    #[test]
    fn secret_marker_hides_until_revealed() {
        let mut rng = rng();
        let mut marker = SecretMarker::new(&mut rng);
        marker.update(1.0 / 30.0, 1.0, 0.0, false);
        assert_eq!(marker.opacity, 0.0);

        marker.update(1.0 / 30.0, 1.0, 0.0, true);
        assert!(marker.opacity >= 0.35);
    }
}
