use serde::{Deserialize, Serialize};

use super::{Disease, DiseaseSymptom, Symptom, SymptomGroup};

/// A full read of the reference store: the four entity collections,
/// each ordered by id (registration order) and enriched with parent
/// display names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    pub diseases: Vec<Disease>,
    pub groups: Vec<SymptomGroup>,
    pub symptoms: Vec<Symptom>,
    pub values: Vec<DiseaseSymptom>,
}

impl ReferenceSnapshot {
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
            && self.groups.is_empty()
            && self.symptoms.is_empty()
            && self.values.is_empty()
    }
}
