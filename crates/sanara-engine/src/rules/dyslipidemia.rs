use sanara_core::models::assessment::{Condition, ConditionAssessment, Confidence};
use sanara_core::models::record::PatientRecord;

use crate::rules::{confidence_for, ConditionRule};
use crate::thresholds::ClinicalThresholds;

/// Dyslipidemia. Every lipid analyte is banded independently; within each
/// analyte only the most severe band fires.
pub struct DyslipidemiaRule;

impl ConditionRule for DyslipidemiaRule {
    fn condition(&self) -> Condition {
        Condition::Dyslipidemia
    }

    fn assess(
        &self,
        record: &PatientRecord,
        thresholds: &ClinicalThresholds,
    ) -> Option<ConditionAssessment> {
        let mut factors = Vec::new();
        let mut score: u32 = 0;

        let lipids = &thresholds.lipids;
        if record.total_cholesterol >= lipids.total_high {
            factors.push(format!(
                "Total cholesterol {} mg/dL is high (≥240 mg/dL)",
                record.total_cholesterol
            ));
            score += 2;
        } else if record.total_cholesterol >= lipids.total_borderline {
            factors.push(format!(
                "Total cholesterol {} mg/dL is borderline high (200-239 mg/dL)",
                record.total_cholesterol
            ));
            score += 1;
        }

        if record.ldl >= lipids.ldl_very_high {
            factors.push(format!(
                "LDL cholesterol {} mg/dL is very high (≥190 mg/dL)",
                record.ldl
            ));
            score += 3;
        } else if record.ldl >= lipids.ldl_high {
            factors.push(format!(
                "LDL cholesterol {} mg/dL is high (160-189 mg/dL)",
                record.ldl
            ));
            score += 2;
        } else if record.ldl >= lipids.ldl_borderline {
            factors.push(format!(
                "LDL cholesterol {} mg/dL is borderline high (130-159 mg/dL)",
                record.ldl
            ));
            score += 1;
        }

        if record.hdl < thresholds.hdl_floor(record.gender) {
            factors.push(format!(
                "HDL cholesterol {} mg/dL is low (cardiovascular risk factor)",
                record.hdl
            ));
            score += 2;
        }

        if record.triglycerides >= lipids.triglycerides_very_high {
            factors.push(format!(
                "Triglycerides {} mg/dL are very high (≥500 mg/dL, pancreatitis risk)",
                record.triglycerides
            ));
            score += 2;
        } else if record.triglycerides >= lipids.triglycerides_high {
            factors.push(format!(
                "Triglycerides {} mg/dL are high (≥200 mg/dL)",
                record.triglycerides
            ));
            score += 1;
        } else if record.triglycerides >= lipids.triglycerides_borderline {
            factors.push(format!(
                "Triglycerides {} mg/dL are borderline high (150-199 mg/dL)",
                record.triglycerides
            ));
            score += 1;
        }

        if score == 0 {
            return None;
        }

        let confidence = confidence_for(score, 5, 3);
        let reasoning = match confidence {
            Confidence::High => {
                "Multiple lipid abnormalities present indicating significant dyslipidemia. \
                 Requires therapeutic lifestyle changes and possible pharmacotherapy."
            }
            Confidence::Medium => {
                "Lipid panel shows abnormalities requiring attention. Lifestyle modifications \
                 and follow-up testing recommended."
            }
            Confidence::Low => {
                "Mild lipid abnormalities detected. Consider dietary counseling and repeat \
                 testing."
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
