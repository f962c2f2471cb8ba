//! Keepsake Animation Primitives
//!
//! Small building blocks shared by the scene animator and the mini-games:
//!
//! - **Easing curves**: closed-form progress remapping
//! - **Motion helpers**: lerp, exponential approach, linear decay
//! - **Count-up**: eased number counter for result screens
//! - **Confetti**: staggered particle bursts for the unwrap celebration

pub mod confetti;
pub mod counter;
pub mod easing;
pub mod motion;

pub use confetti::{Confetto, ConfettiSystem, ParticleShape};
pub use counter::CountUp;
pub use easing::Easing;
pub use motion::{approach, decay, lerp};
