use serde::{Deserialize, Serialize};

/// A diagnosable condition with a named reference symptom pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub id: i64,
    pub name: String,
}
