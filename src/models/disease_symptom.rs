use serde::{Deserialize, Serialize};

use super::enums::SymptomState;

/// The reference pattern cell: the expected state of one symptom under
/// one disease. At most one row exists per (disease, symptom) pair.
///
/// The `*_name` fields are joined parent names, for display and for
/// building scoring patterns without further lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseSymptom {
    pub id: i64,
    pub disease_id: i64,
    pub symptom_id: i64,
    pub value: SymptomState,
    pub disease_name: String,
    pub symptom_name: String,
    pub group_name: String,
}
