use rusqlite::{params, Connection};

use crate::db::StoreError;
use crate::models::SymptomState;

use super::disease::disease_exists;
use super::symptom::symptom_exists;

/// Idempotent upsert of one reference pattern cell: overwrites the
/// value when the `(disease, symptom)` pair already has one.
pub fn set_disease_symptom_value(
    conn: &Connection,
    disease_id: i64,
    symptom_id: i64,
    value: SymptomState,
) -> Result<i64, StoreError> {
    if !disease_exists(conn, disease_id)? {
        return Err(StoreError::MissingReference { entity: "disease", id: disease_id });
    }
    if !symptom_exists(conn, symptom_id)? {
        return Err(StoreError::MissingReference { entity: "symptom", id: symptom_id });
    }

    conn.execute(
        "INSERT INTO disease_symptoms (disease_id, symptom_id, value)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (disease_id, symptom_id) DO UPDATE SET value = excluded.value",
        params![disease_id, symptom_id, value.as_str()],
    )?;

    conn.query_row(
        "SELECT id FROM disease_symptoms WHERE disease_id = ?1 AND symptom_id = ?2",
        params![disease_id, symptom_id],
        |row| row.get::<_, i64>(0),
    )
    .map_err(Into::into)
}

/// Deleting a missing id is a no-op.
pub fn delete_value(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM disease_symptoms WHERE id = ?1", params![id])?;
    Ok(())
}
