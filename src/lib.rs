//! refdx — rule-based differential-diagnosis scorer.
//!
//! A SQLite-backed reference store of diseases, symptom groups,
//! symptoms, and per-disease expected symptom states, plus a pure
//! scoring engine that ranks diseases by how closely their reference
//! pattern matches a patient's observed symptom vector.
//!
//! The presentation layer (forms, tabs, export screens) consumes this
//! crate through [`session::Session`]: read via `snapshot()`, write
//! via the upsert/rename/delete operations, and score via
//! `diagnose()`.

pub mod cache;
pub mod config;
pub mod db;
pub mod matrix;
pub mod models;
pub mod scoring;
pub mod seed;
pub mod session;

pub use db::StoreError;
pub use models::{
    Disease, DiseaseSymptom, EntityKind, ReferenceSnapshot, Symptom, SymptomGroup, SymptomState,
};
pub use scoring::{DiseasePattern, DiseaseScore, PatientVector, ScoreError};
pub use session::{Session, SessionError};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and examples embedding the crate.
/// Honors RUST_LOG; falls back to the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
