//! Progression and unlock layer for the keepsake experience
//!
//! Everything here runs against a host-provided [`KeyValueStore`], standing
//! in for whatever persistent storage the host has. The layer tracks which
//! sections were visited and which games were completed, unlocks gifts from
//! those records, sequences the folder menu, guards entry behind a date
//! verification gate and drives the wrapped slide deck.

pub mod gifts;
pub mod menu;
pub mod progress;
pub mod store;
pub mod verify;
pub mod wrapped;

pub use gifts::{Gift, GiftCatalog, Requirement, GAME_IDS};
pub use menu::{EnterOutcome, FolderMenu, UNLOCKED_FOLDER_KEY};
pub use progress::{
    Progress, COMPLETED_GAMES_KEY, REVEALED_GIFTS_KEY, UNLOCKED_SECTIONS_KEY,
};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use verify::VerificationGate;
pub use wrapped::{SlideDeck, TimerBreakdown};
