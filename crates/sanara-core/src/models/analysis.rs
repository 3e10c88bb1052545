use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::ConditionAssessment;
use crate::models::plan::{CarePathway, DiagnosticTest};
use crate::models::risk::OverallRisk;

/// Everything one analysis pass produces. Always fully populated: empty
/// vectors are valid, fields are never absent. Recomputed fresh per record,
/// nothing is carried between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    /// Surfaced conditions in priority order.
    pub conditions: Vec<ConditionAssessment>,
    /// Deduplicated recommended tests, first-seen order.
    pub diagnostic_tests: Vec<DiagnosticTest>,
    /// One pathway per surfaced condition, same relative order.
    pub care_pathways: Vec<CarePathway>,
    pub overall_risk: OverallRisk,
}
