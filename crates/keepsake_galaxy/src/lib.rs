//! Renderer-agnostic animation core for the keepsake galaxy scene
//!
//! This crate owns all of the scene's timing and state and none of its
//! pixels. A host drives [`GalaxyAnimator::tick`] once per frame and hands
//! the resulting [`GalaxyFrame`] snapshot to whatever renderer it likes.
//!
//! **Features:**
//! - **Monotonic clock** with stall clamping, so backgrounded hosts resume
//!   smoothly
//! - **Pulse energy** from user taps, with a sliding trigger window
//! - **One-way reveal latch** that eases the dormant scene up to full scale
//! - **Photo orbit** of camera-facing billboards with fixed-rate updates,
//!   aspect-preserving texture fits and periodic source swaps
//! - **Star field** sampled once on spherical shells, twinkled in-shader
//! - **Hidden secret marker** gated on the reveal
//!
//! ```
//! use keepsake_galaxy::{GalaxyAnimator, GalaxyConfig, ManualLoader};
//!
//! let sources = vec!["one.jpg".to_string(), "two.jpg".to_string()];
//! let mut animator = GalaxyAnimator::new(GalaxyConfig::desktop(), sources, ManualLoader::new());
//!
//! let frame = animator.tick(1.0 / 60.0);
//! assert!(!frame.photos.is_empty());
//! ```

pub mod animator;
pub mod assets;
pub mod clock;
pub mod config;
pub mod frame;
pub mod objects;
pub mod pulse;
pub mod reveal;

pub use animator::GalaxyAnimator;
pub use assets::{
    parse_photo_manifest, LoadError, LoadResult, ManifestError, ManualLoader, TextureData,
    TextureLoader, TextureRequestId,
};
pub use clock::AnimationClock;
pub use config::GalaxyConfig;
pub use frame::{
    BillboardFrame, GalaxyFrame, GalaxyRenderer, ObjectFrame, StarFieldFrame, StarUniforms,
    Transform,
};
pub use objects::{Emblem, Glow, PhotoBillboard, RingObject, SecretMarker, StarField, TextureSlot};
pub use pulse::PulseState;
pub use reveal::RevealState;
