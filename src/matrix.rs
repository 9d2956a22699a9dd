//! Disease × symptom matrix — the derived 0/1 view over a snapshot.
//!
//! One row per symptom (group name + symptom name), one column per
//! disease, cell 1 where the disease's reference expects the symptom
//! present and 0 otherwise; a missing reference cell reads as 0.
//! The spreadsheet exporter in the presentation layer renders this
//! grid as-is.

use serde::{Deserialize, Serialize};

use crate::models::ReferenceSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub group_name: String,
    pub symptom_name: String,
    /// One cell per disease, in `SymptomMatrix::diseases` order.
    pub cells: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomMatrix {
    /// Column headers, in registration order.
    pub diseases: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

/// Build the grid from a snapshot. Rows follow symptom registration
/// order; columns follow disease registration order.
pub fn build(snapshot: &ReferenceSnapshot) -> SymptomMatrix {
    let diseases: Vec<String> = snapshot.diseases.iter().map(|d| d.name.clone()).collect();

    let rows = snapshot
        .symptoms
        .iter()
        .map(|symptom| {
            let cells = snapshot
                .diseases
                .iter()
                .map(|disease| {
                    snapshot
                        .values
                        .iter()
                        .find(|v| v.disease_id == disease.id && v.symptom_id == symptom.id)
                        .map(|v| v.value.as_bit())
                        .unwrap_or(0)
                })
                .collect();
            MatrixRow {
                group_name: symptom.group_name.clone(),
                symptom_name: symptom.name.clone(),
                cells,
            }
        })
        .collect();

    SymptomMatrix { diseases, rows }
}
