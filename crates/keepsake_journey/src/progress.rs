//! Section and game completion tracking
//!
//! Three string-array records hold everything the unlock rules need: visited
//! sections, completed games and already-revealed gifts. Marking is
//! idempotent; records only ever grow.

use crate::store::{append_string, read_string_list, KeyValueStore, StoreError};

pub const UNLOCKED_SECTIONS_KEY: &str = "unlockedSections";
pub const COMPLETED_GAMES_KEY: &str = "completedGames";
pub const REVEALED_GIFTS_KEY: &str = "revealedGifts";

/// Progression state over a host-provided store.
#[derive(Debug)]
pub struct Progress<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Progress<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a section visit. Returns whether this was the first visit.
    pub fn mark_section_visited(&mut self, section_id: &str) -> Result<bool, StoreError> {
        let added = append_string(&mut self.store, UNLOCKED_SECTIONS_KEY, section_id)?;
        if added {
            tracing::info!(section_id, "section visited");
        }
        Ok(added)
    }

    /// Record a game completion. Returns whether this was the first time.
    pub fn mark_game_completed(&mut self, game_id: &str) -> Result<bool, StoreError> {
        let added = append_string(&mut self.store, COMPLETED_GAMES_KEY, game_id)?;
        if added {
            tracing::info!(game_id, "game completed");
        }
        Ok(added)
    }

    pub(crate) fn reveal_gift(&mut self, gift_id: &str) -> Result<bool, StoreError> {
        append_string(&mut self.store, REVEALED_GIFTS_KEY, gift_id)
    }

    pub fn unlocked_sections(&self) -> Vec<String> {
        read_string_list(&self.store, UNLOCKED_SECTIONS_KEY)
    }

    pub fn completed_games(&self) -> Vec<String> {
        read_string_list(&self.store, COMPLETED_GAMES_KEY)
    }

    pub fn revealed_gifts(&self) -> Vec<String> {
        read_string_list(&self.store, REVEALED_GIFTS_KEY)
    }

    pub fn is_section_visited(&self, section_id: &str) -> bool {
        self.unlocked_sections().iter().any(|s| s == section_id)
    }

    pub fn is_game_completed(&self, game_id: &str) -> bool {
        self.completed_games().iter().any(|g| g == game_id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
