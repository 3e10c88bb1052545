//! sanara-engine
//!
//! Rule-scoring and prioritization engine for the Sanara screening system.
//! Four independent condition assessors score a patient record against a
//! clinical threshold table; the findings are ranked, matched to diagnostic
//! tests and care pathways, and rolled up into an overall risk grade. One
//! analysis is a pure function of the record and the engine's tables.

pub mod knowledge;
pub mod priority;
pub mod risk;
pub mod rules;
pub mod thresholds;

use sanara_core::models::analysis::AnalysisResult;
use sanara_core::models::record::PatientRecord;

use knowledge::KnowledgeBase;
use thresholds::ClinicalThresholds;

/// The screening engine: a threshold table plus a knowledge base, both
/// fixed at construction. One engine serves any number of records.
pub struct Engine {
    thresholds: ClinicalThresholds,
    knowledge: KnowledgeBase,
}

impl Engine {
    /// Engine over the guideline thresholds and the standard knowledge base.
    pub fn new() -> Self {
        Self {
            thresholds: ClinicalThresholds::default(),
            knowledge: KnowledgeBase::standard(),
        }
    }

    /// Engine over custom tables.
    pub fn with_tables(thresholds: ClinicalThresholds, knowledge: KnowledgeBase) -> Self {
        Self {
            thresholds,
            knowledge,
        }
    }

    /// Run every assessor over the record and assemble the result bundle.
    /// Assessor outputs are collected in canonical order before ranking;
    /// the prioritizer's tie-break depends on it.
    pub fn analyze(&self, record: &PatientRecord) -> AnalysisResult {
        let mut assessments = Vec::new();
        for rule in rules::all() {
            if let Some(assessment) = rule.assess(record, &self.thresholds) {
                assessments.push(assessment);
            }
        }

        let conditions = priority::rank(assessments);
        let diagnostic_tests = self.knowledge.resolve_tests(&conditions);
        let care_pathways = self.knowledge.resolve_pathways(&conditions);
        let overall_risk = risk::overall_risk(&conditions);

        tracing::info!(
            conditions = conditions.len(),
            tests = diagnostic_tests.len(),
            risk = overall_risk.level.as_str(),
            "analysis complete"
        );

        AnalysisResult {
            conditions,
            diagnostic_tests,
            care_pathways,
            overall_risk,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot analysis over the standard tables.
pub fn analyze(record: &PatientRecord) -> AnalysisResult {
    Engine::new().analyze(record)
}
