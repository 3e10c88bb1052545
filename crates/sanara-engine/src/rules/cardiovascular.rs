use sanara_core::models::assessment::{Condition, ConditionAssessment, Confidence};
use sanara_core::models::record::{Gender, PatientRecord, Symptom};

use crate::rules::{confidence_for, distinct_symptoms, ConditionRule};
use crate::thresholds::ClinicalThresholds;

const CARDIAC_SYMPTOMS: [Symptom; 2] = [Symptom::ChestPain, Symptom::ShortnessOfBreath];

/// Combined cardiovascular risk. Four major-risk-factor flags each add
/// weight and bump a counter; sex/age and cardiac symptoms add weight only.
/// Gated: no finding unless at least two major flags are up, whatever the
/// score says.
pub struct CardiovascularRule;

impl ConditionRule for CardiovascularRule {
    fn condition(&self) -> Condition {
        Condition::CardiovascularRisk
    }

    fn assess(
        &self,
        record: &PatientRecord,
        thresholds: &ClinicalThresholds,
    ) -> Option<ConditionAssessment> {
        let mut factors = Vec::new();
        let mut score: u32 = 0;
        let mut risk_factors = 0;

        let bp = &thresholds.blood_pressure;
        let lipids = &thresholds.lipids;

        if record.systolic >= bp.stage1_systolic || record.diastolic >= bp.stage1_diastolic {
            factors.push("Hypertension present".to_string());
            risk_factors += 1;
            score += 2;
        }

        if record.ldl >= lipids.ldl_high || record.total_cholesterol >= lipids.total_high {
            factors.push("Dyslipidemia present".to_string());
            risk_factors += 1;
            score += 2;
        }

        if record.glucose >= thresholds.glucose.prediabetes {
            factors.push("Diabetes or prediabetes present".to_string());
            risk_factors += 1;
            score += 2;
        }

        if record.bmi >= thresholds.bmi.obese {
            factors.push("Obesity present (BMI ≥30)".to_string());
            risk_factors += 1;
            score += 1;
        }

        match record.gender {
            Gender::Male if record.age >= 55 => {
                factors.push("Male age ≥55 years".to_string());
                score += 1;
            }
            Gender::Female if record.age >= 65 => {
                factors.push("Female age ≥65 years".to_string());
                score += 1;
            }
            _ => {}
        }

        if distinct_symptoms(record, &CARDIAC_SYMPTOMS) >= 1 {
            factors.push("Cardiovascular symptoms present".to_string());
            score += 2;
        }

        if risk_factors < 2 {
            return None;
        }

        let confidence = confidence_for(score, 6, 4);
        let reasoning = match confidence {
            Confidence::High => {
                "Multiple major cardiovascular risk factors present indicating elevated 10-year \
                 ASCVD risk. Comprehensive risk reduction strategy recommended including \
                 lifestyle modification and possible pharmacotherapy."
            }
            Confidence::Medium => {
                "Several cardiovascular risk factors identified. Calculate formal ASCVD risk \
                 score and implement preventive measures."
            }
            Confidence::Low => {
                "Some cardiovascular risk factors present. Address modifiable factors through \
                 lifestyle changes."
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
