use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::Condition;

/// Recommended timing for a diagnostic test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestPriority {
    Urgent,
    Routine,
    Followup,
}

impl TestPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestPriority::Urgent => "urgent",
            TestPriority::Routine => "routine",
            TestPriority::Followup => "followup",
        }
    }
}

/// A diagnostic test recommended for a surfaced condition. `priority` is
/// the resolved tier: the resolver may escalate the knowledge base's
/// intrinsic `routine` tier to `urgent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticTest {
    pub name: String,
    pub purpose: String,
    pub priority: TestPriority,
}

/// The ordered management plan attached to one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePathway {
    pub condition: Condition,
    pub label: String,
    pub steps: Vec<String>,
}
