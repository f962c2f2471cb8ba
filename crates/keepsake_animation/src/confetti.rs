//! Confetti particle bursts
//!
//! Drives the unwrap celebration: a burst schedules several waves of
//! staggered spawns, each particle falls under gravity and is culled once it
//! leaves the view bounds. All units are pixels and seconds.

use rand::Rng;
use smallvec::SmallVec;

/// Downward acceleration applied to every particle.
const GRAVITY: f32 = 180.0;

/// Vertical margin above/below the view where particles spawn and get culled.
const EDGE_MARGIN: f32 = 20.0;

/// Number of theme colors a particle can index into.
pub const PALETTE_SIZE: usize = 7;

/// Particle silhouette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleShape {
    Rect,
    Circle,
}

/// A single confetti particle
#[derive(Clone, Debug)]
pub struct Confetto {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Index into the host's color palette.
    pub color: usize,
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub shape: ParticleShape,
}

impl Confetto {
    fn spawn(width: f32, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..width.max(1.0)),
            y: -EDGE_MARGIN,
            size: rng.gen_range(5.0..15.0),
            color: rng.gen_range(0..PALETTE_SIZE),
            velocity_x: rng.gen_range(-120.0..120.0),
            velocity_y: rng.gen_range(120.0..300.0),
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-300.0..300.0),
            shape: if rng.gen_bool(0.5) {
                ParticleShape::Rect
            } else {
                ParticleShape::Circle
            },
        }
    }
}

/// A scheduled run of staggered spawns.
#[derive(Clone, Copy, Debug)]
struct SpawnWave {
    /// Next spawn time, measured on the system clock.
    next_at: f32,
    remaining: u32,
    /// Delay between consecutive spawns within the wave.
    stagger: f32,
}

/// Owns the live particles and the pending spawn schedule
#[derive(Debug)]
pub struct ConfettiSystem {
    width: f32,
    height: f32,
    elapsed: f32,
    particles: Vec<Confetto>,
    waves: SmallVec<[SpawnWave; 4]>,
}

impl ConfettiSystem {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elapsed: 0.0,
            particles: Vec::new(),
            waves: SmallVec::new(),
        }
    }

    /// Track a resized view; live particles keep falling in the new bounds
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Schedule the full celebration: three waves of staggered spawns
    pub fn burst(&mut self) {
        self.schedule_wave(0.0, 150, 0.020);
        self.schedule_wave(0.5, 100, 0.015);
        self.schedule_wave(1.0, 50, 0.020);
        tracing::debug!(live = self.particles.len(), "confetti burst scheduled");
    }

    /// Schedule a single wave of `count` particles starting `delay` seconds
    /// from now, one spawn every `stagger` seconds.
    pub fn schedule_wave(&mut self, delay: f32, count: u32, stagger: f32) {
        if count == 0 {
            return;
        }
        self.waves.push(SpawnWave {
            next_at: self.elapsed + delay.max(0.0),
            remaining: count,
            stagger: stagger.max(0.0),
        });
    }

    /// Advance spawns and particle physics by `dt` seconds
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        let dt = dt.max(0.0);
        self.elapsed += dt;

        for wave in self.waves.iter_mut() {
            while wave.remaining > 0 && wave.next_at <= self.elapsed {
                self.particles.push(Confetto::spawn(self.width, rng));
                wave.remaining -= 1;
                wave.next_at += wave.stagger;
            }
        }
        self.waves.retain(|w| w.remaining > 0);

        let floor = self.height + EDGE_MARGIN;
        for particle in self.particles.iter_mut() {
            particle.y += particle.velocity_y * dt;
            particle.x += particle.velocity_x * dt;
            particle.rotation += particle.rotation_speed * dt;
            particle.velocity_y += GRAVITY * dt;
        }
        self.particles.retain(|p| p.y <= floor);
    }

    /// Live particles, for the host to draw
    pub fn particles(&self) -> &[Confetto] {
        &self.particles
    }

    /// True once every wave has spawned and every particle has fallen out
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty() && self.waves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn burst_spawns_all_waves_over_time() {
        let mut system = ConfettiSystem::new(800.0, 600.0);
        let mut rng = rng();
        system.burst();
        assert!(!system.is_idle());

        // 1.5 s in: the first wave is still spawning and nothing slow has
        // reached the cull floor yet.
        for _ in 0..90 {
            system.update(1.0 / 60.0, &mut rng);
        }
        assert!(!system.particles().is_empty());
        assert!(!system.waves.is_empty());

        // The longest wave finishes spawning after 3 s of stagger.
        for _ in 0..210 {
            system.update(1.0 / 60.0, &mut rng);
        }
        assert!(system.waves.is_empty());
    }

    #[test]
    fn particles_fall_and_get_culled() {
        let mut system = ConfettiSystem::new(100.0, 50.0);
        let mut rng = rng();
        system.schedule_wave(0.0, 10, 0.0);
        system.update(0.0, &mut rng);
        assert_eq!(system.particles().len(), 10);

        // Plenty of time for everything to clear a 50px-tall view.
        for _ in 0..600 {
            system.update(1.0 / 60.0, &mut rng);
        }
        assert!(system.is_idle());
    }

    #[test]
    fn gravity_accelerates_fall() {
        let mut system = ConfettiSystem::new(100.0, 10_000.0);
        let mut rng = rng();
        system.schedule_wave(0.0, 1, 0.0);
        system.update(0.0, &mut rng);

        let v0 = system.particles()[0].velocity_y;
        system.update(1.0, &mut rng);
        let v1 = system.particles()[0].velocity_y;
        assert!((v1 - v0 - GRAVITY).abs() < 1e-3);
    }

    #[test]
    fn stagger_delays_spawns() {
        let mut system = ConfettiSystem::new(100.0, 100.0);
        let mut rng = rng();
        system.schedule_wave(0.0, 5, 0.1);

        system.update(0.05, &mut rng);
        assert_eq!(system.particles().len(), 1);

        system.update(0.2, &mut rng);
        assert_eq!(system.particles().len(), 3);
    }
}
