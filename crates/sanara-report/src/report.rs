//! Report assembly: the engine's pure analysis output wrapped with the
//! interpretive layers and stamped for delivery.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use sanara_core::models::analysis::AnalysisResult;
use sanara_core::models::assessment::ConditionAssessment;
use sanara_core::models::plan::DiagnosticTest;
use sanara_core::models::record::PatientRecord;
use sanara_core::models::risk::OverallRisk;

use crate::bands::VitalsBreakdown;
use crate::pathways::PathwayDetail;
use crate::profiles::{self, ConditionProfile};
use crate::summary::{self, EvidenceLevel, SeverityIndicator};
use crate::symptoms::SymptomReview;

/// One ranked finding enriched with its presentation annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionDetail {
    pub assessment: ConditionAssessment,
    pub severity: SeverityIndicator,
    pub evidence: EvidenceLevel,
    pub profile: ConditionProfile,
}

/// The full screening report handed to the UI. Rank order from the
/// analysis is preserved in `conditions` and `care_plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub generated_at: Timestamp,
    pub engine_version: String,
    pub synopsis: String,
    pub vitals: VitalsBreakdown,
    pub symptoms: SymptomReview,
    pub conditions: Vec<ConditionDetail>,
    pub care_plan: Vec<PathwayDetail>,
    pub diagnostic_tests: Vec<DiagnosticTest>,
    pub overall_risk: OverallRisk,
}

/// Assemble the report for one screening. The analysis itself is pure;
/// the id and timestamp are drawn here, at the presentation boundary.
pub fn build_report(record: &PatientRecord, analysis: AnalysisResult) -> AnalysisReport {
    let synopsis = summary::clinical_synopsis(record, &analysis.conditions);

    let conditions = analysis
        .conditions
        .into_iter()
        .map(|assessment| ConditionDetail {
            severity: SeverityIndicator::for_assessment(&assessment),
            evidence: EvidenceLevel::for_score(assessment.score),
            profile: profiles::for_condition(assessment.condition),
            assessment,
        })
        .collect();

    let care_plan = analysis
        .care_pathways
        .into_iter()
        .map(PathwayDetail::from_pathway)
        .collect();

    AnalysisReport {
        id: Uuid::new_v4(),
        generated_at: Timestamp::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        synopsis,
        vitals: VitalsBreakdown::for_record(record),
        symptoms: SymptomReview::for_record(record),
        conditions,
        care_plan,
        diagnostic_tests: analysis.diagnostic_tests,
        overall_risk: analysis.overall_risk,
    }
}
