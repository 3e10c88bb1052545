//! Symptom triage: per-symptom severity, cluster correlation, and the
//! overall significance line.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sanara_core::models::record::{PatientRecord, Symptom};

const DIABETES_RELATED: [Symptom; 4] = [
    Symptom::FrequentUrination,
    Symptom::IncreasedThirst,
    Symptom::BlurredVision,
    Symptom::Fatigue,
];

const HYPERTENSION_RELATED: [Symptom; 2] = [Symptom::Headache, Symptom::Dizziness];

const CARDIAC: [Symptom; 2] = [Symptom::ChestPain, Symptom::ShortnessOfBreath];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomSeverity {
    Mild,
    Moderate,
    Urgent,
}

impl SymptomSeverity {
    pub fn for_symptom(symptom: Symptom) -> SymptomSeverity {
        match symptom {
            Symptom::ChestPain | Symptom::ShortnessOfBreath => SymptomSeverity::Urgent,
            Symptom::Headache | Symptom::Dizziness | Symptom::BlurredVision => {
                SymptomSeverity::Moderate
            }
            _ => SymptomSeverity::Mild,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomSeverity::Mild => "mild",
            SymptomSeverity::Moderate => "moderate",
            SymptomSeverity::Urgent => "urgent",
        }
    }
}

/// Names the symptom clusters present: ≥2 diabetes-related symptoms, or
/// any hypertension-related or cardiac symptom.
pub fn correlation(symptoms: &[Symptom]) -> String {
    if symptoms.is_empty() {
        return "No symptoms reported".to_string();
    }

    let count = |subset: &[Symptom]| subset.iter().filter(|s| symptoms.contains(s)).count();

    let mut clusters = Vec::new();
    let diabetes = count(&DIABETES_RELATED);
    if diabetes >= 2 {
        clusters.push(format!("{diabetes} diabetes-related symptoms"));
    }
    let hypertension = count(&HYPERTENSION_RELATED);
    if hypertension >= 1 {
        clusters.push(format!("{hypertension} hypertension-related symptom(s)"));
    }
    let cardiac = count(&CARDIAC);
    if cardiac >= 1 {
        clusters.push(format!("{cardiac} cardiac symptom(s)"));
    }

    if clusters.is_empty() {
        "Non-specific symptom pattern".to_string()
    } else {
        clusters.join("; ")
    }
}

pub fn significance(symptoms: &[Symptom]) -> &'static str {
    if symptoms
        .iter()
        .any(|s| matches!(s, Symptom::ChestPain | Symptom::ShortnessOfBreath))
    {
        "URGENT: Cardiac symptoms require immediate evaluation to rule out acute coronary syndrome"
    } else if symptoms.len() >= 4 {
        "Multiple symptoms suggest significant disease burden"
    } else if symptoms.len() >= 2 {
        "Several symptoms may indicate underlying metabolic/cardiovascular dysfunction"
    } else {
        "Mild symptom burden requiring monitoring"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportedSymptom {
    pub symptom: Symptom,
    pub severity: SymptomSeverity,
}

/// Triage view over a record's reported symptoms, in first-reported order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomReview {
    pub reported: Vec<ReportedSymptom>,
    pub urgent: Vec<Symptom>,
    pub correlation: String,
    pub significance: String,
}

impl SymptomReview {
    pub fn for_record(record: &PatientRecord) -> SymptomReview {
        let reported = record
            .symptoms
            .iter()
            .map(|&symptom| ReportedSymptom {
                symptom,
                severity: SymptomSeverity::for_symptom(symptom),
            })
            .collect();
        let urgent = record
            .symptoms
            .iter()
            .copied()
            .filter(|&s| SymptomSeverity::for_symptom(s) == SymptomSeverity::Urgent)
            .collect();

        SymptomReview {
            reported,
            urgent,
            correlation: correlation(&record.symptoms),
            significance: significance(&record.symptoms).to_string(),
        }
    }
}
