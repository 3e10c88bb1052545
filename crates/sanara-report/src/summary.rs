//! Narrative synopsis plus the per-condition priority and evidence labels.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sanara_core::models::assessment::{ConditionAssessment, Confidence};
use sanara_core::models::record::PatientRecord;

/// Builds the prose summary of one screening. Three shapes: clean bill,
/// a single finding, or a multi-condition review that names the High then
/// Medium confidence findings.
pub fn clinical_synopsis(record: &PatientRecord, conditions: &[ConditionAssessment]) -> String {
    let mut synopsis = format!(
        "Comprehensive clinical analysis performed for {}-year-old {} patient with ",
        record.age,
        record.gender.as_str()
    );

    match conditions {
        [] => {
            synopsis.push_str(
                "no significant health risks identified based on current vital signs and \
                 laboratory values. Patient demonstrates stable metabolic and cardiovascular \
                 parameters within acceptable clinical ranges. Recommendations include \
                 continuation of routine health maintenance with periodic screening as per \
                 age-appropriate guidelines. Emphasis should be placed on preventive care \
                 strategies including healthy lifestyle habits, regular physical activity, \
                 and balanced nutrition to maintain current health status.",
            );
        }
        [only] => {
            let plural = if only.factors.len() > 1 { "s" } else { "" };
            synopsis.push_str(&format!(
                "one significant area of clinical concern identified: {} ({} confidence). ",
                only.condition.label(),
                only.confidence.as_str()
            ));
            synopsis.push_str(&format!(
                "Risk assessment reveals {} contributing factor{plural} warranting targeted \
                 intervention. ",
                only.factors.len()
            ));
            synopsis.push_str(
                "Recommend focused diagnostic workup to confirm findings, followed by \
                 implementation of evidence-based treatment protocol. Regular follow-up \
                 appointments advised to monitor response to interventions and adjust \
                 management strategy as clinically indicated.",
            );
        }
        _ => {
            synopsis.push_str(&format!(
                "{} distinct areas requiring clinical attention and comprehensive risk \
                 factor management. ",
                conditions.len()
            ));

            let labels_at = |confidence: Confidence| -> Vec<&'static str> {
                conditions
                    .iter()
                    .filter(|a| a.confidence == confidence)
                    .map(|a| a.condition.label())
                    .collect()
            };

            let high = labels_at(Confidence::High);
            if !high.is_empty() {
                synopsis.push_str(&format!(
                    "High-priority conditions identified include: {}. ",
                    high.join(", ")
                ));
                synopsis.push_str(
                    "These findings meet or approach diagnostic thresholds and require \
                     immediate clinical attention. ",
                );
            }

            let medium = labels_at(Confidence::Medium);
            if !medium.is_empty() {
                synopsis.push_str(&format!(
                    "Additionally, moderate-risk conditions include: {}. ",
                    medium.join(", ")
                ));
            }

            synopsis.push_str(
                "Comprehensive risk factor management approach strongly recommended \
                 utilizing multidisciplinary care coordination. Treatment strategy should \
                 address all identified conditions simultaneously to maximize therapeutic \
                 benefit and minimize cardiovascular event risk. Patient education \
                 regarding disease processes, treatment adherence, and lifestyle \
                 modifications essential for optimal outcomes.",
            );
        }
    }

    synopsis
}

/// Strength-of-evidence grade derived from a finding's raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvidenceLevel {
    Suggestive,
    Moderate,
    Strong,
    VeryStrong,
}

impl EvidenceLevel {
    pub fn for_score(score: u32) -> EvidenceLevel {
        if score >= 6 {
            EvidenceLevel::VeryStrong
        } else if score >= 5 {
            EvidenceLevel::Strong
        } else if score >= 3 {
            EvidenceLevel::Moderate
        } else {
            EvidenceLevel::Suggestive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EvidenceLevel::Suggestive => "Suggestive Evidence",
            EvidenceLevel::Moderate => "Moderate Evidence",
            EvidenceLevel::Strong => "Strong Evidence",
            EvidenceLevel::VeryStrong => "Very Strong Evidence",
        }
    }
}

/// Display priority for one finding, finer-grained than the confidence
/// tier alone: the score splits each of the High and Medium tiers in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityIndicator {
    Mild,
    MildModerate,
    Moderate,
    High,
    Critical,
}

impl SeverityIndicator {
    pub fn for_assessment(assessment: &ConditionAssessment) -> SeverityIndicator {
        match assessment.confidence {
            Confidence::High if assessment.score >= 5 => SeverityIndicator::Critical,
            Confidence::High => SeverityIndicator::High,
            Confidence::Medium if assessment.score >= 4 => SeverityIndicator::Moderate,
            Confidence::Medium => SeverityIndicator::MildModerate,
            Confidence::Low => SeverityIndicator::Mild,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityIndicator::Mild => "Mild Priority",
            SeverityIndicator::MildModerate => "Mild-Moderate Priority",
            SeverityIndicator::Moderate => "Moderate Priority",
            SeverityIndicator::High => "High Priority",
            SeverityIndicator::Critical => "Critical Priority",
        }
    }
}
