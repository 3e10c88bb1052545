use sanara_core::models::assessment::{Condition, ConditionAssessment, Confidence};
use sanara_core::models::record::{PatientRecord, Symptom};

use crate::rules::{confidence_for, distinct_symptoms, ConditionRule};
use crate::thresholds::ClinicalThresholds;

const ASSOCIATED_SYMPTOMS: [Symptom; 3] =
    [Symptom::Headache, Symptom::Dizziness, Symptom::ChestPain];

/// Hypertension. The blood pressure reading contributes exactly one band,
/// checked in descending severity; age, obesity, and associated symptoms
/// add to it.
pub struct HypertensionRule;

impl ConditionRule for HypertensionRule {
    fn condition(&self) -> Condition {
        Condition::Hypertension
    }

    fn assess(
        &self,
        record: &PatientRecord,
        thresholds: &ClinicalThresholds,
    ) -> Option<ConditionAssessment> {
        let mut factors = Vec::new();
        let mut score: u32 = 0;

        let bp = &thresholds.blood_pressure;
        if record.systolic >= bp.crisis_systolic || record.diastolic >= bp.crisis_diastolic {
            factors.push(format!(
                "Blood pressure {}/{} mmHg indicates hypertensive crisis (≥180/120)",
                record.systolic, record.diastolic
            ));
            score += 3;
        } else if record.systolic >= bp.stage2_systolic || record.diastolic >= bp.stage2_diastolic
        {
            factors.push(format!(
                "Blood pressure {}/{} mmHg indicates Stage 2 hypertension (≥140/90)",
                record.systolic, record.diastolic
            ));
            score += 2;
        } else if record.systolic >= bp.stage1_systolic {
            factors.push(format!(
                "Blood pressure {}/{} mmHg indicates Stage 1 hypertension (130-139 systolic)",
                record.systolic, record.diastolic
            ));
            score += 1;
        }

        if record.age >= 55 {
            factors.push(format!(
                "Age {} years is a significant risk factor for hypertension",
                record.age
            ));
            score += 1;
        }

        if record.bmi >= thresholds.bmi.obese {
            factors.push(format!(
                "Obesity (BMI {}) strongly associated with hypertension",
                record.bmi
            ));
            score += 1;
        }

        if distinct_symptoms(record, &ASSOCIATED_SYMPTOMS) >= 1 {
            factors.push("Symptoms consistent with hypertension present".to_string());
            score += 1;
        }

        if score == 0 {
            return None;
        }

        let confidence = confidence_for(score, 4, 2);
        let reasoning = match confidence {
            Confidence::High => {
                "Blood pressure readings meet diagnostic criteria with additional risk factors. \
                 Requires clinical management and possible pharmacotherapy."
            }
            Confidence::Medium => {
                "Elevated blood pressure with risk factors present. Repeat measurements and \
                 lifestyle modifications recommended."
            }
            Confidence::Low => {
                "Borderline blood pressure elevation. Monitor regularly and address modifiable \
                 risk factors."
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
