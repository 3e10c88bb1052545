//! The condition assessors.
//!
//! Each rule walks a fixed, ordered checklist for one condition. Every
//! criterion met appends one factor string and adds its weight to the score;
//! the score then maps onto a confidence tier through rule-specific
//! breakpoints. A rule that finds nothing returns `None` rather than a
//! zero-score finding.

pub mod cardiovascular;
pub mod diabetes;
pub mod dyslipidemia;
pub mod hypertension;

use sanara_core::models::assessment::{Condition, ConditionAssessment, Confidence};
use sanara_core::models::record::{PatientRecord, Symptom};

use crate::thresholds::ClinicalThresholds;

/// Trait implemented by each condition assessor.
pub trait ConditionRule: Send + Sync {
    /// The condition this rule screens for.
    fn condition(&self) -> Condition;

    /// Score the record, or `None` when nothing supports the condition.
    fn assess(
        &self,
        record: &PatientRecord,
        thresholds: &ClinicalThresholds,
    ) -> Option<ConditionAssessment>;
}

/// All assessors, in canonical evaluation order. The prioritizer's tie-break
/// depends on results being collected in this order.
pub fn all() -> Vec<Box<dyn ConditionRule>> {
    vec![
        Box::new(diabetes::DiabetesRule),
        Box::new(hypertension::HypertensionRule),
        Box::new(dyslipidemia::DyslipidemiaRule),
        Box::new(cardiovascular::CardiovascularRule),
    ]
}

/// Map a score onto a tier given the rule's breakpoints.
pub(crate) fn confidence_for(score: u32, high_at: u32, medium_at: u32) -> Confidence {
    if score >= high_at {
        Confidence::High
    } else if score >= medium_at {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// How many of `subset` the record reports. Distinct by construction since
/// the subsets never repeat a symptom.
pub(crate) fn distinct_symptoms(record: &PatientRecord, subset: &[Symptom]) -> usize {
    subset.iter().filter(|s| record.has_symptom(**s)).count()
}
