//! Per-session snapshot cache.
//!
//! Holds the last `load_all` read for the lifetime of one interactive
//! session, so selection lists and scoring contexts don't re-query
//! storage on every access. Not shared across sessions; each session
//! invalidates and reloads independently after its own writes.

use rusqlite::Connection;

use crate::db::{repository, StoreError};
use crate::models::ReferenceSnapshot;

/// Read-through cache over the reference store.
#[derive(Default)]
pub struct SnapshotCache {
    snapshot: Option<ReferenceSnapshot>,
}

impl SnapshotCache {
    /// Create an empty (cold) cache.
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// Return the cached snapshot, loading it from storage on first
    /// access after creation or invalidation.
    pub fn get_or_load(&mut self, conn: &Connection) -> Result<&ReferenceSnapshot, StoreError> {
        if self.snapshot.is_none() {
            tracing::debug!("snapshot cache cold, loading from storage");
            self.snapshot = Some(repository::load_all(conn)?);
        }
        // Populated just above; a load failure returned early.
        Ok(self.snapshot.as_ref().expect("snapshot populated"))
    }

    /// Discard the snapshot. The next `get_or_load` re-reads storage.
    pub fn invalidate(&mut self) {
        if self.snapshot.take().is_some() {
            tracing::debug!("snapshot cache invalidated");
        }
    }

    /// Whether a snapshot is currently held.
    pub fn is_warm(&self) -> bool {
        self.snapshot.is_some()
    }
}
