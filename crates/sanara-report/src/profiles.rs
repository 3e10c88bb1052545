//! Static background narrative for each condition the rules can surface.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sanara_core::models::assessment::Condition;

/// Disease mechanism, expected complications, action timeline, and
/// treatment prognosis for one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionProfile {
    pub reasoning: String,
    pub pathophysiology: String,
    pub complications: String,
    pub timeline: String,
    pub prognosis: String,
}

/// Look up the profile for a condition. Total over the enum.
pub fn for_condition(condition: Condition) -> ConditionProfile {
    PROFILES[condition.index()].clone()
}

fn profile(
    reasoning: &str,
    pathophysiology: &str,
    complications: &str,
    timeline: &str,
    prognosis: &str,
) -> ConditionProfile {
    ConditionProfile {
        reasoning: reasoning.to_string(),
        pathophysiology: pathophysiology.to_string(),
        complications: complications.to_string(),
        timeline: timeline.to_string(),
        prognosis: prognosis.to_string(),
    }
}

// Indexed by Condition::index().
static PROFILES: LazyLock<[ConditionProfile; 4]> = LazyLock::new(|| {
    [
        profile(
            "Chronic hyperglycemia results from insulin resistance and/or beta-cell \
             dysfunction, leading to impaired glucose uptake by peripheral tissues.",
            "Progressive deterioration of pancreatic beta-cell function combined with \
             peripheral insulin resistance leads to sustained hyperglycemia.",
            "Microvascular (retinopathy, nephropathy, neuropathy) and macrovascular \
             (coronary artery disease, stroke, peripheral artery disease) complications. \
             Risk of diabetic ketoacidosis in uncontrolled cases.",
            "Initiate diagnostic workup within 1-2 weeks. Early intervention critical to \
             prevent progression and complications.",
            "With proper management including lifestyle modification, glucose monitoring, \
             and pharmacotherapy: HbA1c reduction of 1-2% achievable, 25-40% reduction in \
             microvascular complications, improved quality of life and life expectancy.",
        ),
        profile(
            "Sustained elevation in arterial blood pressure increases cardiac workload \
             and vascular stress, promoting atherosclerosis and end-organ damage.",
            "Multifactorial etiology including increased peripheral vascular resistance, \
             sodium retention, sympathetic nervous system activation, and \
             renin-angiotensin-aldosterone system dysregulation.",
            "Left ventricular hypertrophy, heart failure, stroke, chronic kidney disease, \
             retinopathy, aortic dissection, and increased cardiovascular mortality.",
            "Repeat measurements to confirm diagnosis. If confirmed Stage 2 HTN, initiate \
             treatment within 1 month. Hypertensive crisis requires immediate intervention.",
            "Target BP <130/80 achievable in 80-90% of patients with appropriate therapy. \
             Each 10 mmHg reduction in systolic BP reduces cardiovascular events by 20%, \
             stroke by 27%, heart failure by 28%.",
        ),
        profile(
            "Elevated atherogenic lipoproteins (LDL, VLDL) and/or reduced protective HDL \
             cholesterol accelerate atherosclerotic plaque formation in arterial walls.",
            "Imbalance between lipid production, transport, and clearance leads to lipid \
             accumulation in arterial intima, inflammatory response, and plaque development.",
            "Atherosclerotic cardiovascular disease including myocardial infarction, \
             ischemic stroke, peripheral artery disease. Very high triglycerides \
             (>500 mg/dL) increase acute pancreatitis risk.",
            "Confirm with fasting lipid panel. If LDL ≥190 mg/dL or multiple risk factors \
             present, initiate therapy within 1-2 months.",
            "Each 39 mg/dL (1 mmol/L) LDL reduction decreases major cardiovascular events \
             by 22%. High-intensity statins achieve 30-50% LDL reduction. Benefits \
             increase with duration of therapy.",
        ),
        profile(
            "Multiple concurrent cardiovascular risk factors have synergistic effects, \
             exponentially increasing risk of major adverse cardiovascular events (MACE).",
            "Clustering of metabolic abnormalities (hypertension, dyslipidemia, insulin \
             resistance, obesity) creates pro-inflammatory, pro-thrombotic state \
             accelerating atherosclerosis.",
            "Coronary artery disease, myocardial infarction, stroke, heart failure, \
             chronic kidney disease, peripheral artery disease, and premature \
             cardiovascular mortality.",
            "Calculate formal 10-year ASCVD risk score. High-risk patients (≥20%) require \
             aggressive multi-factorial intervention within 1 month.",
            "Comprehensive risk factor management reduces cardiovascular events by 30-50%. \
             Early intervention and sustained treatment adherence critical for optimal \
             outcomes. Lifestyle modifications provide additive benefit to pharmacotherapy.",
        ),
    ]
});
