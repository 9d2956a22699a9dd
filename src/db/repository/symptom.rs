use rusqlite::{params, Connection};

use crate::db::StoreError;

use super::group::group_exists;

/// Insert-if-absent, scoped to the owning group: `(group_id, name)` is
/// the natural key.
pub fn upsert_symptom(conn: &Connection, group_id: i64, name: &str) -> Result<i64, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("symptom name must not be empty".into()));
    }
    if !group_exists(conn, group_id)? {
        return Err(StoreError::MissingReference { entity: "symptom group", id: group_id });
    }

    match conn.query_row(
        "SELECT id FROM symptoms WHERE group_id = ?1 AND symptom_name = ?2",
        params![group_id, name],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(id) => Ok(id),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            conn.execute(
                "INSERT INTO symptoms (group_id, symptom_name) VALUES (?1, ?2)",
                params![group_id, name],
            )?;
            Ok(conn.last_insert_rowid())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn symptom_exists(conn: &Connection, id: i64) -> Result<bool, StoreError> {
    match conn.query_row(
        "SELECT 1 FROM symptoms WHERE id = ?1",
        params![id],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

pub fn rename_symptom(conn: &Connection, id: i64, new_name: &str) -> Result<(), StoreError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(StoreError::Validation("symptom name must not be empty".into()));
    }

    let updated = conn.execute(
        "UPDATE symptoms SET symptom_name = ?2 WHERE id = ?1",
        params![id, new_name],
    )?;
    if updated == 0 {
        return Err(StoreError::NotFound { entity: "symptom", id });
    }
    Ok(())
}

/// Cascades to every reference cell naming the symptom. Deleting a
/// missing id is a no-op.
pub fn delete_symptom(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM symptoms WHERE id = ?1", params![id])?;
    Ok(())
}
