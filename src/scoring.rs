//! Exact-match scoring of patient observations against disease
//! reference patterns.
//!
//! Pure functions over owned inputs: no storage access, no shared
//! state. A disease's score is the share of its reference symptoms
//! whose expected state equals the patient's observed state, as a
//! percentage. Scores are independent per disease — they are not a
//! probability distribution and are never normalized across diseases.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ReferenceSnapshot, SymptomState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// A disease with no reference symptoms has no defined score;
    /// rejected explicitly rather than dividing by zero.
    #[error("Disease {0:?} has no reference symptoms to score against")]
    EmptyReference(String),
}

/// The caller-supplied observations for one evaluation: observed state
/// per symptom name. Built fresh per diagnosis request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientVector {
    observations: HashMap<String, SymptomState>,
}

impl PatientVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. A later observation of the same symptom
    /// replaces the earlier one.
    pub fn observe(&mut self, symptom: &str, state: SymptomState) {
        self.observations.insert(symptom.to_string(), state);
    }

    /// Record a binary observation (checked / unchecked input).
    pub fn observe_checked(&mut self, symptom: &str, observed: bool) {
        self.observe(symptom, SymptomState::from_observed(observed));
    }

    pub fn get(&self, symptom: &str) -> Option<SymptomState> {
        self.observations.get(symptom).copied()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// One disease's reference pattern: expected state per symptom name,
/// restricted to the symptoms the disease explicitly references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseasePattern {
    pub name: String,
    reference: HashMap<String, SymptomState>,
}

impl DiseasePattern {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reference: HashMap::new(),
        }
    }

    /// Set the expected state for one symptom; overwrites any earlier
    /// expectation for the same symptom.
    pub fn expect(&mut self, symptom: &str, state: SymptomState) {
        self.reference.insert(symptom.to_string(), state);
    }

    pub fn reference_len(&self) -> usize {
        self.reference.len()
    }
}

/// One disease's match result: percentage of reference symptoms whose
/// expected state the patient's observations reproduce, in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseScore {
    pub disease: String,
    pub percent: f64,
}

/// Score every pattern against the patient's observations, preserving
/// pattern (registration) order.
pub fn score_all(
    patient: &PatientVector,
    patterns: &[DiseasePattern],
) -> Result<Vec<DiseaseScore>, ScoreError> {
    patterns.iter().map(|p| score_one(patient, p)).collect()
}

fn score_one(patient: &PatientVector, pattern: &DiseasePattern) -> Result<DiseaseScore, ScoreError> {
    if pattern.reference.is_empty() {
        return Err(ScoreError::EmptyReference(pattern.name.clone()));
    }

    // A reference symptom the patient never observed is a non-match,
    // not an error: the vector may cover a subset of the reference.
    let matches = pattern
        .reference
        .iter()
        .filter(|(symptom, expected)| patient.get(symptom) == Some(**expected))
        .count();

    Ok(DiseaseScore {
        disease: pattern.name.clone(),
        percent: matches as f64 / pattern.reference.len() as f64 * 100.0,
    })
}

/// Rank scores descending. The sort is stable, so equal percentages
/// keep their input order: the first-registered disease wins ties.
pub fn rank(mut scores: Vec<DiseaseScore>) -> Vec<DiseaseScore> {
    scores.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(Ordering::Equal));
    scores
}

/// Build one pattern per disease from a reference snapshot, optionally
/// restricted to one symptom category (group name). One builder serves
/// every category; the caller selects which is active.
///
/// A disease with no reference cells in the selected category is not
/// scorable there and is omitted.
pub fn patterns_from_snapshot(
    snapshot: &ReferenceSnapshot,
    group: Option<&str>,
) -> Vec<DiseasePattern> {
    let mut patterns = Vec::new();
    for disease in &snapshot.diseases {
        let mut pattern = DiseasePattern::new(&disease.name);
        for cell in &snapshot.values {
            if cell.disease_id != disease.id {
                continue;
            }
            if let Some(group) = group {
                if cell.group_name != group {
                    continue;
                }
            }
            pattern.expect(&cell.symptom_name, cell.value);
        }
        if pattern.reference_len() > 0 {
            patterns.push(pattern);
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SymptomState::{Absent, Present};

    /// Ten joint-involvement symptoms, x1..x10 in the reference tables.
    const JOINT_SYMPTOMS: [&str; 10] = [
        "Single large joint with erythema",
        "2-10 large joints",
        "1-3 small joints (large joints not counted)",
        "4-10 small joints (large joints not counted)",
        "More than 10 joints (at least one small joint)",
        "First metatarsophalangeal joint involvement",
        "Enthesopathy (heel pain, tibial tubercle pain)",
        "Inflammatory low back pain: sacroiliitis",
        "Inflammatory low back pain: spondylitis",
        "Tendon and ligament inflammation at the ischial tuberosity",
    ];

    fn pattern_from(states: [SymptomState; 10], name: &str) -> DiseasePattern {
        let mut pattern = DiseasePattern::new(name);
        for (symptom, state) in JOINT_SYMPTOMS.iter().zip(states) {
            pattern.expect(symptom, state);
        }
        pattern
    }

    /// Observed vector x1:- x2:+ x3:+ x4:+ x5:+ x6:- x7:- x8:- x9:- x10:-
    fn typical_ra_patient() -> PatientVector {
        let observed = [
            Absent, Present, Present, Present, Present, Absent, Absent, Absent, Absent, Absent,
        ];
        let mut patient = PatientVector::new();
        for (symptom, state) in JOINT_SYMPTOMS.iter().zip(observed) {
            patient.observe(symptom, state);
        }
        patient
    }

    #[test]
    fn full_match_scores_one_hundred() {
        let reference = pattern_from(
            [Absent, Present, Present, Present, Present, Absent, Absent, Absent, Absent, Absent],
            "Rheumatoid arthritis",
        );
        let scores = score_all(&typical_ra_patient(), &[reference]).unwrap();
        assert_eq!(scores[0].percent, 100.0);
    }

    #[test]
    fn partial_match_scores_proportionally() {
        // Agrees with the vector only on x7..x10 being absent: 4 of 10.
        let reference = pattern_from(
            [Present, Absent, Absent, Absent, Absent, Present, Absent, Absent, Absent, Absent],
            "Gouty arthritis",
        );
        let scores = score_all(&typical_ra_patient(), &[reference]).unwrap();
        assert_eq!(scores[0].percent, 40.0);
    }

    #[test]
    fn scores_stay_in_range() {
        let patient = typical_ra_patient();
        let patterns = [
            pattern_from([Present; 10], "All present"),
            pattern_from([Absent; 10], "All absent"),
            pattern_from(
                [Absent, Present, Present, Present, Present, Absent, Absent, Absent, Absent, Absent],
                "Exact",
            ),
        ];
        for score in score_all(&patient, &patterns).unwrap() {
            assert!((0.0..=100.0).contains(&score.percent), "{score:?}");
        }
    }

    #[test]
    fn empty_reference_is_rejected() {
        let patient = typical_ra_patient();
        let err = score_all(&patient, &[DiseasePattern::new("Undefined")]).unwrap_err();
        assert_eq!(err, ScoreError::EmptyReference("Undefined".into()));
    }

    #[test]
    fn unobserved_reference_symptom_is_a_nonmatch() {
        let mut pattern = DiseasePattern::new("Reactive arthritis");
        pattern.expect("Conjunctivitis", Present);
        pattern.expect("Urethritis or prostatitis", Present);

        let mut patient = PatientVector::new();
        patient.observe("Conjunctivitis", Present);
        // The second reference symptom was never observed: 1 of 2.

        let scores = score_all(&patient, &[pattern]).unwrap();
        assert_eq!(scores[0].percent, 50.0);
    }

    #[test]
    fn empty_patient_vector_scores_zero() {
        let reference = pattern_from([Present; 10], "All present");
        let scores = score_all(&PatientVector::new(), &[reference]).unwrap();
        assert_eq!(scores[0].percent, 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let patient = typical_ra_patient();
        let patterns = [
            pattern_from([Absent; 10], "A"),
            pattern_from([Present; 10], "B"),
        ];
        let first = score_all(&patient, &patterns).unwrap();
        let second = score_all(&patient, &patterns).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rank_sorts_descending_and_ties_keep_registration_order() {
        let scores = vec![
            DiseaseScore { disease: "Low".into(), percent: 20.0 },
            DiseaseScore { disease: "First of tie".into(), percent: 60.0 },
            DiseaseScore { disease: "Second of tie".into(), percent: 60.0 },
            DiseaseScore { disease: "High".into(), percent: 90.0 },
        ];
        let ranked = rank(scores);
        let order: Vec<&str> = ranked.iter().map(|s| s.disease.as_str()).collect();
        assert_eq!(order, ["High", "First of tie", "Second of tie", "Low"]);
    }
}
