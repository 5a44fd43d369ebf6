//! Reads, compares and writes the best record.
//!
//! The keeper fails soft: a broken store reads as "no record", a failed
//! write is logged and the run's comparison result is still reported.

use log::{info, warn};
use thiserror::Error;

use super::best::{BestRecord, RecordStatus};
use super::store::{RecordStore, StoreError};

/// Why a stored record could not be loaded.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The store itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored value is not a record.
    #[error("malformed best record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Owns the store and the key the best record lives under.
#[derive(Debug)]
pub struct BestRecordKeeper<S: RecordStore> {
    store: S,
    key: String,
}

impl<S: RecordStore> BestRecordKeeper<S> {
    /// Create a keeper for `key` in `store`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored record, reporting why it could not be read.
    ///
    /// An absent key, an empty value and a JSON `null` all read as `None`.
    pub fn try_load(&self) -> Result<Option<BestRecord>, RecordError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<BestRecord>>(&raw)?)
    }

    /// Read the stored record, treating any failure as "no record".
    #[must_use]
    pub fn load(&self) -> Option<BestRecord> {
        match self.try_load() {
            Ok(best) => best,
            Err(err) => {
                warn!("[BestRecord] Unable to read best score under {:?}: {}", self.key, err);
                None
            }
        }
    }

    /// Compare a finished run with the stored record and persist it if it is
    /// strictly better.
    pub fn submit(&mut self, run: BestRecord) -> RecordStatus {
        let stored = self.load();
        if !run.improves_on(stored.as_ref()) {
            return RecordStatus::NoNewRecord;
        }

        match serde_json::to_string(&run) {
            Ok(json) => {
                if let Err(err) = self.store.set(&self.key, json) {
                    warn!("[BestRecord] Unable to persist best score under {:?}: {}", self.key, err);
                }
            }
            Err(err) => warn!("[BestRecord] Unable to encode best score: {}", err),
        }

        info!("[BestRecord] New record: {} moves in {}", run.moves, run.time());
        RecordStatus::NewRecord
    }
}
