use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The conditions the screening rules can surface. Closed set: the
/// knowledge base maps every variant exhaustively, so adding one is a
/// compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    DiabetesRisk,
    Hypertension,
    Dyslipidemia,
    CardiovascularRisk,
}

impl Condition {
    /// Canonical assessor evaluation order. Ranking ties beyond confidence
    /// and score keep this order.
    pub const ALL: [Condition; 4] = [
        Condition::DiabetesRisk,
        Condition::Hypertension,
        Condition::Dyslipidemia,
        Condition::CardiovascularRisk,
    ];

    /// Position in `ALL`, for enum-indexed tables.
    pub const fn index(self) -> usize {
        match self {
            Condition::DiabetesRisk => 0,
            Condition::Hypertension => 1,
            Condition::Dyslipidemia => 2,
            Condition::CardiovascularRisk => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::DiabetesRisk => "Type 2 Diabetes Risk",
            Condition::Hypertension => "Hypertension",
            Condition::Dyslipidemia => "Dyslipidemia",
            Condition::CardiovascularRisk => "Combined Cardiovascular Risk",
        }
    }
}

/// How certain a rule is about its finding, derived from the score through
/// rule-specific breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Priority weight used when ranking conditions.
    pub fn weight(&self) -> u8 {
        match self {
            Confidence::Low => 1,
            Confidence::Medium => 2,
            Confidence::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

/// One triggered rule's finding: the weighted score, the confidence tier it
/// maps to, one factor string per met criterion (in the rule's fixed
/// evaluation order), and the canned reasoning for the tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionAssessment {
    pub condition: Condition,
    pub score: u32,
    pub confidence: Confidence,
    pub factors: Vec<String>,
    pub reasoning: String,
}
