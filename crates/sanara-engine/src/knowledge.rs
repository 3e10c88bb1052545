//! Static clinical reference content and its resolver.
//!
//! Each condition maps to an ordered test list (name, purpose, intrinsic
//! priority tier) and one care pathway. Lookup is enum-indexed, so the
//! mapping stays exhaustive by construction.

use std::sync::LazyLock;

use sanara_core::models::assessment::{Condition, ConditionAssessment, Confidence};
use sanara_core::models::plan::{CarePathway, DiagnosticTest, TestPriority};

/// Reference content for one condition.
#[derive(Debug, Clone)]
pub struct ConditionKnowledge {
    pub tests: Vec<DiagnosticTest>,
    pub pathway: CarePathway,
}

/// The per-condition reference table. A plain value like the threshold
/// table: tests can inject a custom one through `Engine::with_tables`.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: [ConditionKnowledge; 4],
}

impl KnowledgeBase {
    /// Build from one entry per condition, in `Condition::ALL` order.
    pub fn new(entries: [ConditionKnowledge; 4]) -> Self {
        Self { entries }
    }

    /// The standard clinical table.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    pub fn entry(&self, condition: Condition) -> &ConditionKnowledge {
        &self.entries[condition.index()]
    }

    /// Concatenate the ranked conditions' tests, appending each name only
    /// the first time it appears. When any ranked condition is High
    /// confidence, every intrinsically routine test is escalated to urgent;
    /// urgent and followup tiers are never altered. The escalation is
    /// deliberately global across conditions.
    pub fn resolve_tests(&self, ranked: &[ConditionAssessment]) -> Vec<DiagnosticTest> {
        let escalate = ranked.iter().any(|a| a.confidence == Confidence::High);
        let mut tests: Vec<DiagnosticTest> = Vec::new();

        for assessment in ranked {
            for test in &self.entry(assessment.condition).tests {
                if tests.iter().any(|seen| seen.name == test.name) {
                    continue;
                }
                let mut resolved = test.clone();
                if escalate && resolved.priority == TestPriority::Routine {
                    resolved.priority = TestPriority::Urgent;
                }
                tests.push(resolved);
            }
        }
        tests
    }

    /// One pathway per ranked condition, same relative order, no dedup.
    pub fn resolve_pathways(&self, ranked: &[ConditionAssessment]) -> Vec<CarePathway> {
        ranked
            .iter()
            .map(|a| self.entry(a.condition).pathway.clone())
            .collect()
    }
}

fn test(name: &str, purpose: &str, priority: TestPriority) -> DiagnosticTest {
    DiagnosticTest {
        name: name.to_string(),
        purpose: purpose.to_string(),
        priority,
    }
}

fn pathway(condition: Condition, label: &str, steps: &[&str]) -> CarePathway {
    CarePathway {
        condition,
        label: label.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

static STANDARD: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    use TestPriority::{Followup, Routine, Urgent};

    KnowledgeBase::new([
        ConditionKnowledge {
            tests: vec![
                test(
                    "Hemoglobin A1C (HbA1c) - 3-month average glucose",
                    "Gold standard for diabetes diagnosis and glycemic control",
                    Urgent,
                ),
                test(
                    "Oral Glucose Tolerance Test (OGTT)",
                    "Confirms impaired glucose tolerance and diabetes",
                    Routine,
                ),
                test(
                    "Random plasma glucose test",
                    "Quick screening for hyperglycemia",
                    Routine,
                ),
                test(
                    "Lipid panel (comprehensive metabolic assessment)",
                    "Comprehensive cholesterol and triglyceride analysis",
                    Routine,
                ),
                test(
                    "Urinalysis for glycosuria and microalbuminuria",
                    "Screen for diabetic kidney disease",
                    Followup,
                ),
            ],
            pathway: pathway(
                Condition::DiabetesRisk,
                "Type 2 Diabetes Management",
                &[
                    "Lifestyle Modification: Medical nutrition therapy with registered dietitian, \
                     target weight loss of 5-10% if overweight",
                    "Physical Activity: Recommend 150 minutes/week of moderate-intensity aerobic \
                     activity plus resistance training",
                    "Self-Monitoring: Blood glucose monitoring education and log review",
                    "Diabetes Self-Management Education and Support (DSMES) program enrollment",
                    "Regular follow-up: HbA1c monitoring every 3 months if above target, assess \
                     for complications",
                    "Consider referral to endocrinology if glucose remains uncontrolled or \
                     complex case",
                ],
            ),
        },
        ConditionKnowledge {
            tests: vec![
                test(
                    "Ambulatory Blood Pressure Monitoring (24-hour)",
                    "Confirms hypertension diagnosis",
                    Urgent,
                ),
                test(
                    "Electrocardiogram (ECG) to assess cardiac effects",
                    "Detects hypertensive heart disease or ischemia",
                    Urgent,
                ),
                test(
                    "Echocardiogram if end-organ damage suspected",
                    "Cardiac structure and function assessment",
                    Routine,
                ),
                test(
                    "Basic metabolic panel (electrolytes, creatinine)",
                    "Assess kidney function before medications",
                    Routine,
                ),
                test(
                    "Urinalysis to assess renal function",
                    "Screen for proteinuria",
                    Followup,
                ),
                test(
                    "Lipid panel for cardiovascular risk assessment",
                    "Standard dyslipidemia screening",
                    Routine,
                ),
            ],
            pathway: pathway(
                Condition::Hypertension,
                "Hypertension Management",
                &[
                    "Lifestyle Modifications: DASH diet, sodium restriction (<2300mg/day), \
                     weight loss if BMI ≥25",
                    "Home Blood Pressure Monitoring: Train patient on proper technique, target \
                     <130/80 mmHg",
                    "Physical Activity: Aerobic exercise 90-150 minutes/week, resistance \
                     training 2-3 days/week",
                    "Limit alcohol intake: ≤2 drinks/day for men, ≤1 drink/day for women",
                    "Stress management and adequate sleep (7-9 hours/night)",
                    "Follow-up schedule: Monthly until BP controlled, then every 3-6 months",
                    "Consider cardiovascular risk calculator and assess for end-organ damage",
                ],
            ),
        },
        ConditionKnowledge {
            tests: vec![
                test(
                    "Comprehensive lipid panel (fasting)",
                    "Complete cholesterol analysis",
                    Routine,
                ),
                test(
                    "Apolipoprotein B (ApoB) levels",
                    "Advanced marker of atherogenic particles",
                    Followup,
                ),
                test(
                    "Lipoprotein(a) [Lp(a)] if family history present",
                    "Genetic cardiovascular risk factor",
                    Followup,
                ),
                test(
                    "High-sensitivity C-reactive protein (hs-CRP)",
                    "Inflammatory biomarker for CV risk",
                    Followup,
                ),
                test(
                    "Thyroid function tests (TSH) to rule out secondary causes",
                    "Exclude thyroid disorders",
                    Routine,
                ),
                test(
                    "Liver function tests before considering statin therapy",
                    "Baseline hepatic function",
                    Routine,
                ),
            ],
            pathway: pathway(
                Condition::Dyslipidemia,
                "Dyslipidemia Management",
                &[
                    "Therapeutic Lifestyle Changes (TLC): Reduce saturated fat (<7% of \
                     calories), eliminate trans fats",
                    "Increase dietary fiber (10-25g soluble fiber daily) and plant \
                     stanols/sterols",
                    "Weight management if overweight: 5-10% weight reduction improves lipid \
                     profile",
                    "Regular aerobic exercise: 30-40 minutes of moderate-high intensity, 3-4 \
                     days/week",
                    "Calculate 10-year ASCVD risk score to guide treatment intensity",
                    "Follow-up lipid panel in 4-12 weeks after lifestyle changes or therapy \
                     initiation",
                    "Consider referral to lipid specialist if LDL ≥190 mg/dL or familial \
                     hyperlipidemia suspected",
                ],
            ),
        },
        ConditionKnowledge {
            tests: vec![
                test(
                    "Coronary artery calcium (CAC) score",
                    "Quantify coronary atherosclerosis",
                    Routine,
                ),
                test(
                    "Carotid intima-media thickness (CIMT)",
                    "Measure subclinical atherosclerosis",
                    Followup,
                ),
                test(
                    "Ankle-brachial index (ABI)",
                    "Screen for peripheral artery disease",
                    Followup,
                ),
                test(
                    "High-sensitivity troponin if symptoms present",
                    "Rule out acute coronary syndrome",
                    Urgent,
                ),
                test(
                    "Exercise stress test or stress echocardiography",
                    "Assess for inducible myocardial ischemia",
                    Routine,
                ),
                test(
                    "Comprehensive metabolic panel",
                    "Broad organ function screening",
                    Routine,
                ),
            ],
            pathway: pathway(
                Condition::CardiovascularRisk,
                "Comprehensive Cardiovascular Risk Reduction",
                &[
                    "Calculate formal 10-year ASCVD risk score using pooled cohort equations",
                    "Multi-faceted risk factor management: Address all identified modifiable \
                     risk factors simultaneously",
                    "Consider low-dose aspirin for primary prevention in select high-risk \
                     patients (discuss benefits/risks)",
                    "Smoking cessation counseling if applicable (single most important \
                     modifiable risk factor)",
                    "Comprehensive dietary intervention: Mediterranean or DASH diet pattern",
                    "Structured exercise program with cardiac rehabilitation referral if \
                     appropriate",
                    "Regular monitoring: Follow-up every 3-6 months with reassessment of all \
                     risk factors",
                    "Consider cardiology referral if symptoms present or very high risk (≥20% \
                     10-year ASCVD risk)",
                ],
            ),
        },
    ])
});
