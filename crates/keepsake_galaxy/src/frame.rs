//! Per-frame output handed to the renderer
//!
//! The animator is engine-agnostic: every tick it fills a plain-data
//! [`GalaxyFrame`] with transforms, opacities and shader uniforms, and the
//! host's renderer adapter maps that onto its own scene graph. Static
//! geometry (star positions, ring radii, billboard textures) is read from
//! the animator once at bind time, not re-sent per frame.

use glam::{Vec2, Vec3};

/// Euler-rotation transform for a scene object
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians (x = pitch, y = yaw, z = roll).
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn uniform_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Default::default()
        }
    }
}

/// Transform plus opacity for a single object
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectFrame {
    pub transform: Transform,
    pub opacity: f32,
}

/// Camera-facing billboard state
#[derive(Clone, Copy, Debug, Default)]
pub struct BillboardFrame {
    pub position: Vec3,
    /// Width/height footprint in world units.
    pub size: Vec2,
    pub opacity: f32,
    /// False while the billboard still shows its placeholder visual.
    pub textured: bool,
}

/// Shared uniforms consumed by the star twinkle shader
#[derive(Clone, Copy, Debug, Default)]
pub struct StarUniforms {
    /// Scene clock time, in seconds.
    pub time: f32,
    /// Decaying burst energy from activation events.
    pub burst: f32,
}

/// Whole-field star state; point positions are immutable after creation
#[derive(Clone, Copy, Debug, Default)]
pub struct StarFieldFrame {
    pub yaw: f32,
    pub uniforms: StarUniforms,
}

/// Snapshot of everything the renderer needs for one frame
#[derive(Clone, Debug, Default)]
pub struct GalaxyFrame {
    pub emblem: ObjectFrame,
    pub glow: ObjectFrame,
    pub rings: Vec<ObjectFrame>,
    pub stars: StarFieldFrame,
    pub photos: Vec<BillboardFrame>,
    pub secret: Option<BillboardFrame>,
}

/// External renderer boundary.
///
/// The animator never reads anything back; a frame is handed over and
/// forgotten.
pub trait GalaxyRenderer {
    fn present(&mut self, frame: &GalaxyFrame);
}
