use serde::{Deserialize, Serialize};

/// A single observable binary clinical feature, belonging to exactly
/// one symptom group.
///
/// `group_name` is the joined parent name, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub group_name: String,
}
