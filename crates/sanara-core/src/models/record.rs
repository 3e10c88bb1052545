use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::FieldViolation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// The closed vocabulary of reportable symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    ChestPain,
    ShortnessOfBreath,
    Headache,
    Dizziness,
    BlurredVision,
    FrequentUrination,
    IncreasedThirst,
    Fatigue,
}

impl Symptom {
    /// Parse a wire code. Codes outside the vocabulary yield `None` so that
    /// callers can drop them instead of failing the whole record.
    pub fn from_code(code: &str) -> Option<Symptom> {
        match code {
            "chest_pain" => Some(Symptom::ChestPain),
            "shortness_of_breath" => Some(Symptom::ShortnessOfBreath),
            "headache" => Some(Symptom::Headache),
            "dizziness" => Some(Symptom::Dizziness),
            "blurred_vision" => Some(Symptom::BlurredVision),
            "frequent_urination" => Some(Symptom::FrequentUrination),
            "increased_thirst" => Some(Symptom::IncreasedThirst),
            "fatigue" => Some(Symptom::Fatigue),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Symptom::ChestPain => "chest_pain",
            Symptom::ShortnessOfBreath => "shortness_of_breath",
            Symptom::Headache => "headache",
            Symptom::Dizziness => "dizziness",
            Symptom::BlurredVision => "blurred_vision",
            Symptom::FrequentUrination => "frequent_urination",
            Symptom::IncreasedThirst => "increased_thirst",
            Symptom::Fatigue => "fatigue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::ChestPain => "Chest Pain",
            Symptom::ShortnessOfBreath => "Shortness of Breath",
            Symptom::Headache => "Headache",
            Symptom::Dizziness => "Dizziness",
            Symptom::BlurredVision => "Blurred Vision",
            Symptom::FrequentUrination => "Frequent Urination",
            Symptom::IncreasedThirst => "Increased Thirst",
            Symptom::Fatigue => "Fatigue",
        }
    }
}

/// One screening's worth of patient data, immutable for the duration of an
/// analysis. Vitals and labs use the units the wire contract specifies
/// (mmHg, mg/dL); `symptoms` holds distinct codes in first-reported order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub age: u8,
    pub gender: Gender,
    pub bmi: f64,
    pub systolic: u16,
    pub diastolic: u16,
    pub glucose: u16,
    pub total_cholesterol: u16,
    pub ldl: u16,
    pub hdl: u16,
    pub triglycerides: u16,
    /// Unknown codes are dropped and duplicates collapsed on deserialization;
    /// the rules only ever see vocabulary symptoms.
    #[serde(deserialize_with = "deserialize_symptoms")]
    pub symptoms: Vec<Symptom>,
}

impl PatientRecord {
    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    /// Range-check every bounded field, collecting all violations rather
    /// than stopping at the first. The engine assumes this has been run;
    /// it never re-checks.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        check_range("age", f64::from(self.age), 18.0, 120.0, &mut violations);
        check_range("bmi", self.bmi, 10.0, 60.0, &mut violations);
        check_range("systolic", f64::from(self.systolic), 70.0, 250.0, &mut violations);
        check_range("diastolic", f64::from(self.diastolic), 40.0, 150.0, &mut violations);
        check_range("glucose", f64::from(self.glucose), 50.0, 400.0, &mut violations);
        check_range(
            "total_cholesterol",
            f64::from(self.total_cholesterol),
            100.0,
            400.0,
            &mut violations,
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64, out: &mut Vec<FieldViolation>) {
    if value < min || value > max {
        out.push(FieldViolation {
            field: field.to_string(),
            value,
            min,
            max,
            message: format!("{field} value {value} is outside expected range [{min}, {max}]"),
        });
    }
}

fn deserialize_symptoms<'de, D>(deserializer: D) -> Result<Vec<Symptom>, D::Error>
where
    D: Deserializer<'de>,
{
    let codes = Vec::<String>::deserialize(deserializer)?;
    let mut symptoms = Vec::new();
    for code in &codes {
        if let Some(symptom) = Symptom::from_code(code) {
            if !symptoms.contains(&symptom) {
                symptoms.push(symptom);
            }
        }
    }
    Ok(symptoms)
}
