use std::str::FromStr;

use rusqlite::Connection;

use crate::db::StoreError;
use crate::models::{Disease, DiseaseSymptom, ReferenceSnapshot, Symptom, SymptomGroup, SymptomState};

/// Full snapshot read: the four collections in id (registration) order,
/// each row joined with its parent display names.
pub fn load_all(conn: &Connection) -> Result<ReferenceSnapshot, StoreError> {
    Ok(ReferenceSnapshot {
        diseases: load_diseases(conn)?,
        groups: load_groups(conn)?,
        symptoms: load_symptoms(conn)?,
        values: load_values(conn)?,
    })
}

fn load_diseases(conn: &Connection) -> Result<Vec<Disease>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM diseases ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Disease {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.map(|r| r.map_err(StoreError::from)).collect()
}

fn load_groups(conn: &Connection) -> Result<Vec<SymptomGroup>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT sg.id, sg.disease_id, sg.group_name, d.name
         FROM symptom_groups sg
         JOIN diseases d ON sg.disease_id = d.id
         ORDER BY sg.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(SymptomGroup {
            id: row.get(0)?,
            disease_id: row.get(1)?,
            name: row.get(2)?,
            disease_name: row.get(3)?,
        })
    })?;
    rows.map(|r| r.map_err(StoreError::from)).collect()
}

fn load_symptoms(conn: &Connection) -> Result<Vec<Symptom>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.group_id, s.symptom_name, sg.group_name
         FROM symptoms s
         JOIN symptom_groups sg ON s.group_id = sg.id
         ORDER BY s.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Symptom {
            id: row.get(0)?,
            group_id: row.get(1)?,
            name: row.get(2)?,
            group_name: row.get(3)?,
        })
    })?;
    rows.map(|r| r.map_err(StoreError::from)).collect()
}

fn load_values(conn: &Connection) -> Result<Vec<DiseaseSymptom>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT ds.id, ds.disease_id, ds.symptom_id, ds.value,
                d.name, s.symptom_name, sg.group_name
         FROM disease_symptoms ds
         JOIN diseases d ON ds.disease_id = d.id
         JOIN symptoms s ON ds.symptom_id = s.id
         JOIN symptom_groups sg ON s.group_id = sg.id
         ORDER BY ds.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i64>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
        ))
    })?;

    let mut values = Vec::new();
    for row in rows {
        let (id, disease_id, symptom_id, value, disease_name, symptom_name, group_name) = row?;
        values.push(DiseaseSymptom {
            id,
            disease_id,
            symptom_id,
            value: SymptomState::from_str(&value)?,
            disease_name,
            symptom_name,
            group_name,
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::disease::upsert_disease;
    use crate::db::repository::group::upsert_group;
    use crate::db::repository::symptom::upsert_symptom;
    use crate::db::repository::value::set_disease_symptom_value;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn empty_store_yields_empty_snapshot() {
        let conn = open_memory_database().unwrap();
        let snap = load_all(&conn).unwrap();
        assert!(snap.is_empty());
    }

    #[test]
    fn snapshot_joins_parent_names() {
        let conn = open_memory_database().unwrap();
        let disease = upsert_disease(&conn, "Reactive arthritis").unwrap();
        let group = upsert_group(&conn, disease, "Associated conditions").unwrap();
        let symptom = upsert_symptom(&conn, group, "Conjunctivitis").unwrap();
        set_disease_symptom_value(&conn, disease, symptom, SymptomState::Present).unwrap();

        let snap = load_all(&conn).unwrap();
        assert_eq!(snap.groups[0].disease_name, "Reactive arthritis");
        assert_eq!(snap.symptoms[0].group_name, "Associated conditions");

        let cell = &snap.values[0];
        assert_eq!(cell.disease_name, "Reactive arthritis");
        assert_eq!(cell.symptom_name, "Conjunctivitis");
        assert_eq!(cell.group_name, "Associated conditions");
        assert_eq!(cell.value, SymptomState::Present);
    }

    #[test]
    fn snapshot_preserves_registration_order() {
        let conn = open_memory_database().unwrap();
        for name in ["Rheumatoid arthritis", "Gouty arthritis", "Reactive arthritis"] {
            upsert_disease(&conn, name).unwrap();
        }

        let snap = load_all(&conn).unwrap();
        let names: Vec<&str> = snap.diseases.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["Rheumatoid arthritis", "Gouty arthritis", "Reactive arthritis"]
        );
    }
}
