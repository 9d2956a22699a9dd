use rusqlite::{params, Connection};

use crate::db::StoreError;

/// Insert-if-absent: returns the existing id when a disease with this
/// name is already registered.
pub fn upsert_disease(conn: &Connection, name: &str) -> Result<i64, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("disease name must not be empty".into()));
    }

    match conn.query_row(
        "SELECT id FROM diseases WHERE name = ?1",
        params![name],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(id) => Ok(id),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            conn.execute("INSERT INTO diseases (name) VALUES (?1)", params![name])?;
            Ok(conn.last_insert_rowid())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn disease_exists(conn: &Connection, id: i64) -> Result<bool, StoreError> {
    match conn.query_row(
        "SELECT 1 FROM diseases WHERE id = ?1",
        params![id],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

pub fn rename_disease(conn: &Connection, id: i64, new_name: &str) -> Result<(), StoreError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(StoreError::Validation("disease name must not be empty".into()));
    }

    let updated = conn.execute(
        "UPDATE diseases SET name = ?2 WHERE id = ?1",
        params![id, new_name],
    )?;
    if updated == 0 {
        return Err(StoreError::NotFound { entity: "disease", id });
    }
    Ok(())
}

/// Cascades to the disease's groups, their symptoms, and every
/// reference cell naming the disease. Deleting a missing id is a no-op.
pub fn delete_disease(conn: &Connection, id: i64) -> Result<(), StoreError> {
    let deleted = conn.execute("DELETE FROM diseases WHERE id = ?1", params![id])?;
    if deleted > 0 {
        tracing::debug!(disease_id = id, "deleted disease and dependents");
    }
    Ok(())
}
