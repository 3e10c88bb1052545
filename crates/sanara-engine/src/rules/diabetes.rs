use sanara_core::models::assessment::{Condition, ConditionAssessment, Confidence};
use sanara_core::models::record::{PatientRecord, Symptom};

use crate::rules::{confidence_for, distinct_symptoms, ConditionRule};
use crate::thresholds::ClinicalThresholds;

const CARDINAL_SYMPTOMS: [Symptom; 4] = [
    Symptom::FrequentUrination,
    Symptom::IncreasedThirst,
    Symptom::BlurredVision,
    Symptom::Fatigue,
];

/// Type 2 diabetes risk. Fasting glucose carries the most weight; metabolic
/// context (BMI, triglycerides, HDL), age, and the cardinal symptom cluster
/// fill out the score.
pub struct DiabetesRule;

impl ConditionRule for DiabetesRule {
    fn condition(&self) -> Condition {
        Condition::DiabetesRisk
    }

    fn assess(
        &self,
        record: &PatientRecord,
        thresholds: &ClinicalThresholds,
    ) -> Option<ConditionAssessment> {
        let mut factors = Vec::new();
        let mut score: u32 = 0;

        if record.glucose >= thresholds.glucose.diabetes {
            factors.push(format!(
                "Fasting glucose {} mg/dL meets diagnostic criteria for diabetes (≥126 mg/dL)",
                record.glucose
            ));
            score += 3;
        } else if record.glucose >= thresholds.glucose.prediabetes {
            factors.push(format!(
                "Fasting glucose {} mg/dL indicates prediabetes (100-125 mg/dL)",
                record.glucose
            ));
            score += 2;
        }

        if record.bmi >= thresholds.bmi.obese {
            factors.push(format!(
                "BMI {} indicates obesity (≥30), a major risk factor for type 2 diabetes",
                record.bmi
            ));
            score += 2;
        } else if record.bmi >= thresholds.bmi.overweight {
            factors.push(format!(
                "BMI {} indicates overweight status (25-29.9), increasing diabetes risk",
                record.bmi
            ));
            score += 1;
        }

        if record.age >= 45 {
            factors.push(format!(
                "Age {} years increases diabetes risk (≥45 years)",
                record.age
            ));
            score += 1;
        }

        if record.triglycerides >= thresholds.lipids.triglycerides_high {
            factors.push(format!(
                "Elevated triglycerides {} mg/dL suggest insulin resistance (≥200 mg/dL)",
                record.triglycerides
            ));
            score += 1;
        }

        if record.hdl < thresholds.hdl_floor(record.gender) {
            factors.push(format!(
                "Low HDL {} mg/dL associated with metabolic syndrome",
                record.hdl
            ));
            score += 1;
        }

        let cardinal = distinct_symptoms(record, &CARDINAL_SYMPTOMS);
        if cardinal >= 2 {
            factors.push(format!(
                "Classic diabetes symptoms present: {cardinal} of 4 cardinal symptoms"
            ));
            score += 1;
        }

        if score == 0 {
            return None;
        }

        let confidence = confidence_for(score, 5, 3);
        let reasoning = match confidence {
            Confidence::High => {
                "Multiple strong clinical indicators present, including glucose levels meeting \
                 diagnostic criteria. Clinical evaluation recommended urgently."
            }
            Confidence::Medium => {
                "Several risk factors identified suggesting elevated diabetes risk. Further \
                 diagnostic testing recommended to confirm or rule out diabetes."
            }
            Confidence::Low => {
                "Some risk factors present. Consider screening and lifestyle modification \
                 counseling."
            }
        };

        Some(ConditionAssessment {
            condition: self.condition(),
            score,
            confidence,
            factors,
            reasoning: reasoning.to_string(),
        })
    }
}
