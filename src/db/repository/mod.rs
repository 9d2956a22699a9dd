//! Repository layer — entity-scoped database operations.
//!
//! One sub-module per entity; all public functions are re-exported
//! here. Callers are expected to hold a transaction (see
//! `session::Session`) so multi-statement operations commit or roll
//! back as a unit.

mod disease;
mod group;
mod snapshot;
mod symptom;
mod value;

use rusqlite::Connection;

use crate::models::EntityKind;

use super::StoreError;

pub use disease::*;
pub use group::*;
pub use snapshot::*;
pub use symptom::*;
pub use value::*;

/// Rename dispatch over the entity kinds. Reference pattern cells have
/// no name to rename.
pub fn rename(
    conn: &Connection,
    kind: EntityKind,
    id: i64,
    new_name: &str,
) -> Result<(), StoreError> {
    match kind {
        EntityKind::Disease => rename_disease(conn, id, new_name),
        EntityKind::Group => rename_group(conn, id, new_name),
        EntityKind::Symptom => rename_symptom(conn, id, new_name),
        EntityKind::Value => Err(StoreError::Validation(
            "disease symptom values have no name".into(),
        )),
    }
}

/// Delete dispatch over the entity kinds; cascades per entity.
pub fn delete(conn: &Connection, kind: EntityKind, id: i64) -> Result<(), StoreError> {
    match kind {
        EntityKind::Disease => delete_disease(conn, id),
        EntityKind::Group => delete_group(conn, id),
        EntityKind::Symptom => delete_symptom(conn, id),
        EntityKind::Value => delete_value(conn, id),
    }
}
