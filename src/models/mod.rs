pub mod disease;
pub mod disease_symptom;
pub mod enums;
pub mod snapshot;
pub mod symptom;
pub mod symptom_group;

pub use disease::Disease;
pub use disease_symptom::DiseaseSymptom;
pub use enums::{EntityKind, SymptomState};
pub use snapshot::ReferenceSnapshot;
pub use symptom::Symptom;
pub use symptom_group::SymptomGroup;
