//! Care-pathway annotation: what kind of work each step is and when it
//! should happen.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sanara_core::models::assessment::Condition;
use sanara_core::models::plan::CarePathway;

/// Kind of work a pathway step asks of the care team, inferred from the
/// step's wording. First matching keyword group wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepCategory {
    Lifestyle,
    Monitoring,
    Referral,
    Education,
    Clinical,
}

impl StepCategory {
    pub fn classify(step: &str) -> StepCategory {
        let step = step.to_lowercase();
        if ["lifestyle", "diet", "exercise", "nutrition"]
            .iter()
            .any(|kw| step.contains(kw))
        {
            StepCategory::Lifestyle
        } else if step.contains("monitor") || step.contains("follow-up") {
            StepCategory::Monitoring
        } else if step.contains("referral") || step.contains("specialist") {
            StepCategory::Referral
        } else if step.contains("education") || step.contains("train") {
            StepCategory::Education
        } else {
            StepCategory::Clinical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepCategory::Lifestyle => "Lifestyle",
            StepCategory::Monitoring => "Monitoring",
            StepCategory::Referral => "Referral",
            StepCategory::Education => "Education",
            StepCategory::Clinical => "Clinical",
        }
    }
}

/// Scheduling horizon from the step's position in its pathway: the first
/// ~30% of steps are immediate, the next ~40% short-term, the rest ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepTiming {
    Immediate,
    ShortTerm,
    Ongoing,
}

impl StepTiming {
    pub fn for_position(index: usize, total: usize) -> StepTiming {
        let fraction = index as f64 / total as f64;
        if fraction < 0.3 {
            StepTiming::Immediate
        } else if fraction < 0.7 {
            StepTiming::ShortTerm
        } else {
            StepTiming::Ongoing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepTiming::Immediate => "Immediate (1-2 weeks)",
            StepTiming::ShortTerm => "Short-term (1-3 months)",
            StepTiming::Ongoing => "Ongoing maintenance",
        }
    }
}

/// One pathway step with its presentation annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PathwayStep {
    pub text: String,
    pub category: StepCategory,
    pub timing: StepTiming,
}

/// A care pathway annotated step by step for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PathwayDetail {
    pub condition: Condition,
    pub label: String,
    pub steps: Vec<PathwayStep>,
}

impl PathwayDetail {
    pub fn from_pathway(pathway: CarePathway) -> PathwayDetail {
        let total = pathway.steps.len();
        let steps = pathway
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, text)| PathwayStep {
                category: StepCategory::classify(&text),
                timing: StepTiming::for_position(index, total),
                text,
            })
            .collect();

        PathwayDetail {
            condition: pathway.condition,
            label: pathway.label,
            steps,
        }
    }
}
