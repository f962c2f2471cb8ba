//! Gift catalog and unlock rules
//!
//! Each gift names a requirement: a visited section, or completion of every
//! game in the fixed id set. [`GiftCatalog::sync`] compares requirements
//! against the progress records, persists newly-satisfied gifts and reports
//! them exactly once so the UI can run its reveal moment; already-revealed
//! gifts stay silently unlocked on later syncs.

use crate::progress::Progress;
use crate::store::{KeyValueStore, StoreError};

/// The games `Requirement::AllGames` checks for.
pub const GAME_IDS: [&str; 3] = ["game1", "game2", "game3"];

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Requirement {
    /// A named section has been visited.
    Section(String),
    /// Every game in [`GAME_IDS`] is completed.
    AllGames,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Gift {
    pub id: String,
    pub requirement: Requirement,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, Default)]
pub struct GiftCatalog {
    gifts: Vec<Gift>,
}

impl GiftCatalog {
    pub fn new(gifts: Vec<Gift>) -> Self {
        Self { gifts }
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    fn requirement_met<S: KeyValueStore>(
        requirement: &Requirement,
        progress: &Progress<S>,
    ) -> bool {
        match requirement {
            Requirement::Section(section_id) => progress.is_section_visited(section_id),
            Requirement::AllGames => GAME_IDS.iter().all(|id| progress.is_game_completed(id)),
        }
    }

    /// Reveal every gift whose requirement is newly satisfied. Returns the
    /// gifts revealed by this call; each gift is reported once per store
    /// lifetime.
    pub fn sync<S: KeyValueStore>(
        &self,
        progress: &mut Progress<S>,
    ) -> Result<Vec<&Gift>, StoreError> {
        let revealed = progress.revealed_gifts();
        let mut new_unlocks = Vec::new();

        for gift in &self.gifts {
            if revealed.iter().any(|id| id == &gift.id) {
                continue;
            }
            if Self::requirement_met(&gift.requirement, progress) {
                progress.reveal_gift(&gift.id)?;
                tracing::info!(gift_id = %gift.id, "gift unlocked");
                new_unlocks.push(gift);
            }
        }
        Ok(new_unlocks)
    }

    /// Catalog gifts already revealed in the progress records.
    pub fn unlocked_count<S: KeyValueStore>(&self, progress: &Progress<S>) -> usize {
        let revealed = progress.revealed_gifts();
        self.gifts
            .iter()
            .filter(|gift| revealed.iter().any(|id| id == &gift.id))
            .count()
    }

    /// Unlock progress in `[0, 1]` for the progress bar.
    pub fn progress_fraction<S: KeyValueStore>(&self, progress: &Progress<S>) -> f32 {
        if self.gifts.is_empty() {
            return 0.0;
        }
        self.unlocked_count(progress) as f32 / self.gifts.len() as f32
    }
}
