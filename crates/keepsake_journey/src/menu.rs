//! Sequential folder menu
//!
//! Folders unlock strictly in order. A single numeric record holds the
//! highest enterable index; entering folder `i` is allowed while
//! `i <= unlocked` and raises the unlock to `i + 1` for next time. The
//! record is meant to live in session-scoped storage, so a new session
//! starts locked down again.

use crate::store::{KeyValueStore, StoreError};

pub const UNLOCKED_FOLDER_KEY: &str = "unlockedFolder";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    Entered,
    /// The folder is still locked; nothing changed.
    Locked,
}

#[derive(Debug)]
pub struct FolderMenu<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FolderMenu<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Highest folder index currently enterable. Missing or unreadable
    /// records mean only folder 0 is open.
    pub fn unlocked(&self) -> usize {
        match self.store.get(UNLOCKED_FOLDER_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or(0),
            Ok(None) => 0,
            Err(error) => {
                tracing::warn!(%error, "unlock record read failed; starting locked");
                0
            }
        }
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        index <= self.unlocked()
    }

    /// Try to enter a folder. Entering an open folder unlocks the next one.
    pub fn enter(&mut self, index: usize) -> Result<EnterOutcome, StoreError> {
        let unlocked = self.unlocked();
        if index > unlocked {
            return Ok(EnterOutcome::Locked);
        }
        let next = index + 1;
        if next > unlocked {
            self.store.set(UNLOCKED_FOLDER_KEY, &next.to_string())?;
            tracing::debug!(unlocked = next, "folder unlocked");
        }
        Ok(EnterOutcome::Entered)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
