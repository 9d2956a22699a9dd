use serde::{Deserialize, Serialize};

/// A named category of symptoms scoped to one disease's reference
/// definition (e.g. "Joint involvement" or "Inflammatory markers").
///
/// `disease_name` is the joined parent name, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomGroup {
    pub id: i64,
    pub disease_id: i64,
    pub name: String,
    pub disease_name: String,
}
