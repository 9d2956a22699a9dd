//! One interactive session over the reference store.
//!
//! A `Session` owns one storage connection and one snapshot cache.
//! Every mutating operation is exactly: open a transaction, make one
//! repository call, commit, invalidate the cache. The transaction
//! rolls back on drop, so validation failures and storage errors leave
//! prior state unchanged on every exit path.
//!
//! Sessions are not shared: concurrent callers each open their own
//! `Session` against the same database file and rely on the storage
//! busy timeout for write contention.

use std::path::Path;

use thiserror::Error;

use crate::cache::SnapshotCache;
use crate::db::{self, repository, StoreError};
use crate::models::{EntityKind, ReferenceSnapshot, SymptomState};
use crate::scoring::{self, DiseaseScore, PatientVector, ScoreError};

/// Errors from composite session operations (storage + scoring).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

pub struct Session {
    conn: rusqlite::Connection,
    cache: SnapshotCache,
}

impl Session {
    /// Open a session against the database at `path`, creating and
    /// migrating it as needed.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: db::open_database(path)?,
            cache: SnapshotCache::new(),
        })
    }

    /// Open a session against a fresh in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: db::open_memory_database()?,
            cache: SnapshotCache::new(),
        })
    }

    // ── Reads ────────────────────────────────────────────

    /// The current reference snapshot, served from cache when warm.
    pub fn snapshot(&mut self) -> Result<&ReferenceSnapshot, StoreError> {
        self.cache.get_or_load(&self.conn)
    }

    // ── Writes ───────────────────────────────────────────

    pub fn upsert_disease(&mut self, name: &str) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;
        let id = repository::upsert_disease(&tx, name)?;
        tx.commit()?;
        self.cache.invalidate();
        Ok(id)
    }

    pub fn upsert_group(&mut self, disease_id: i64, name: &str) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;
        let id = repository::upsert_group(&tx, disease_id, name)?;
        tx.commit()?;
        self.cache.invalidate();
        Ok(id)
    }

    pub fn upsert_symptom(&mut self, group_id: i64, name: &str) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;
        let id = repository::upsert_symptom(&tx, group_id, name)?;
        tx.commit()?;
        self.cache.invalidate();
        Ok(id)
    }

    pub fn set_disease_symptom_value(
        &mut self,
        disease_id: i64,
        symptom_id: i64,
        value: SymptomState,
    ) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;
        let id = repository::set_disease_symptom_value(&tx, disease_id, symptom_id, value)?;
        tx.commit()?;
        self.cache.invalidate();
        Ok(id)
    }

    pub fn rename(
        &mut self,
        kind: EntityKind,
        id: i64,
        new_name: &str,
    ) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        repository::rename(&tx, kind, id, new_name)?;
        tx.commit()?;
        self.cache.invalidate();
        Ok(())
    }

    pub fn delete(&mut self, kind: EntityKind, id: i64) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        repository::delete(&tx, kind, id)?;
        tx.commit()?;
        self.cache.invalidate();
        Ok(())
    }

    // ── Diagnosis ────────────────────────────────────────

    /// Score the patient's observations against every scorable disease,
    /// optionally restricted to one symptom category, ranked descending.
    pub fn diagnose(
        &mut self,
        patient: &PatientVector,
        group: Option<&str>,
    ) -> Result<Vec<DiseaseScore>, SessionError> {
        let snapshot = self.cache.get_or_load(&self.conn)?;
        let patterns = scoring::patterns_from_snapshot(snapshot, group);
        let scores = scoring::score_all(patient, &patterns)?;
        Ok(scoring::rank(scores))
    }
}
