use rusqlite::{params, Connection};

use crate::db::StoreError;

use super::disease::disease_exists;

/// Insert-if-absent, scoped to the owning disease: `(disease_id, name)`
/// is the natural key.
pub fn upsert_group(conn: &Connection, disease_id: i64, name: &str) -> Result<i64, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("group name must not be empty".into()));
    }
    if !disease_exists(conn, disease_id)? {
        return Err(StoreError::MissingReference { entity: "disease", id: disease_id });
    }

    match conn.query_row(
        "SELECT id FROM symptom_groups WHERE disease_id = ?1 AND group_name = ?2",
        params![disease_id, name],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(id) => Ok(id),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            conn.execute(
                "INSERT INTO symptom_groups (disease_id, group_name) VALUES (?1, ?2)",
                params![disease_id, name],
            )?;
            Ok(conn.last_insert_rowid())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn group_exists(conn: &Connection, id: i64) -> Result<bool, StoreError> {
    match conn.query_row(
        "SELECT 1 FROM symptom_groups WHERE id = ?1",
        params![id],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

pub fn rename_group(conn: &Connection, id: i64, new_name: &str) -> Result<(), StoreError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(StoreError::Validation("group name must not be empty".into()));
    }

    let updated = conn.execute(
        "UPDATE symptom_groups SET group_name = ?2 WHERE id = ?1",
        params![id, new_name],
    )?;
    if updated == 0 {
        return Err(StoreError::NotFound { entity: "symptom group", id });
    }
    Ok(())
}

/// Cascades to the group's symptoms and to every reference cell naming
/// those symptoms. Deleting a missing id is a no-op.
pub fn delete_group(conn: &Connection, id: i64) -> Result<(), StoreError> {
    let deleted = conn.execute("DELETE FROM symptom_groups WHERE id = ?1", params![id])?;
    if deleted > 0 {
        tracing::debug!(group_id = id, "deleted symptom group and dependents");
    }
    Ok(())
}
