//! Built-in rheumatology reference catalog.
//!
//! Three arthritides scored across five symptom categories; expected
//! states per disease come from the early-diagnosis criteria tables
//! this system was built around. Installing into a fresh database
//! makes it immediately usable for diagnosis; installation is
//! idempotent because it only uses upserts.

use crate::db::StoreError;
use crate::models::SymptomState::{self, Absent as A, Present as P};
use crate::session::Session;

pub const DISEASES: [&str; 3] = [
    "Rheumatoid arthritis",
    "Gouty arthritis",
    "Reactive arthritis",
];

struct CategorySeed {
    name: &'static str,
    /// Symptom name + expected state per disease, in `DISEASES` order.
    symptoms: &'static [(&'static str, [SymptomState; 3])],
}

const CATALOG: &[CategorySeed] = &[
    CategorySeed {
        name: "Joint involvement",
        symptoms: &[
            ("Single large joint with erythema", [A, P, A]),
            ("2-10 large joints", [P, A, A]),
            ("1-3 small joints (large joints not counted)", [P, A, A]),
            ("4-10 small joints (large joints not counted)", [P, A, A]),
            ("More than 10 joints (at least one small joint)", [P, A, A]),
            ("First metatarsophalangeal joint involvement", [A, P, A]),
            ("Enthesopathy (heel pain, tibial tubercle pain)", [A, A, P]),
            ("Inflammatory low back pain: sacroiliitis", [A, A, P]),
            ("Inflammatory low back pain: spondylitis", [A, A, P]),
            ("Tendon and ligament inflammation at the ischial tuberosity", [A, A, P]),
        ],
    },
    CategorySeed {
        name: "Arthritis attack",
        symptoms: &[
            ("Maximal arthritis manifestations within one day of attack onset", [P, P, A]),
            ("One or more arthritis attacks in history", [P, P, A]),
            ("Peripheral arthritis (asymmetric oligoarthritis)", [A, A, P]),
        ],
    },
    CategorySeed {
        name: "RF and ACPA serology",
        symptoms: &[
            ("Negative RF and ACPA", [A, A, A]),
            ("Weakly positive RF or ACPA (above normal, less than threefold)", [P, A, A]),
            ("Highly positive RF or ACPA (more than threefold above normal)", [P, A, A]),
        ],
    },
    CategorySeed {
        name: "Inflammatory markers",
        symptoms: &[
            ("Normal ESR and CRP", [A, A, A]),
            ("Elevated ESR or CRP", [P, A, A]),
            ("Uric acid above 6.0 mg/dL (360 µmol/L)", [A, P, A]),
        ],
    },
    CategorySeed {
        name: "Associated conditions",
        symptoms: &[
            ("Synovitis under 6 weeks", [A, A, A]),
            ("Synovitis 6 weeks or longer", [P, A, A]),
            ("Hypertension or one or more cardiovascular diseases", [A, P, A]),
            ("Conjunctivitis", [A, A, P]),
            ("Urethritis or prostatitis", [A, A, P]),
            ("Endoscopic signs of bowel involvement", [A, A, P]),
            ("Keratoderma blennorrhagicum", [A, A, P]),
            ("Circinate balanitis", [A, A, P]),
            ("Oral mucosal ulcers", [A, A, P]),
            ("Nail hyperkeratosis", [A, A, P]),
            ("ECG conduction abnormalities", [A, A, P]),
            ("Male sex", [A, A, A]),
            ("Female sex", [A, A, A]),
        ],
    },
];

/// Install the catalog through the session's ordinary write path.
pub fn install(session: &mut Session) -> Result<(), StoreError> {
    let mut disease_ids = Vec::with_capacity(DISEASES.len());
    for name in DISEASES {
        disease_ids.push(session.upsert_disease(name)?);
    }

    for category in CATALOG {
        for (index, &disease_id) in disease_ids.iter().enumerate() {
            let group_id = session.upsert_group(disease_id, category.name)?;
            for (symptom_name, states) in category.symptoms {
                let symptom_id = session.upsert_symptom(group_id, symptom_name)?;
                session.set_disease_symptom_value(disease_id, symptom_id, states[index])?;
            }
        }
    }

    tracing::info!(
        diseases = DISEASES.len(),
        categories = CATALOG.len(),
        "installed built-in reference catalog"
    );
    Ok(())
}
