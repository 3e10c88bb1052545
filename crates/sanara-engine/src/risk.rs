use sanara_core::models::assessment::{ConditionAssessment, Confidence};
use sanara_core::models::risk::{OverallRisk, RiskLevel};

/// Roll the ranked condition list up into one overall grade. Branches are
/// checked in order, first match wins.
pub fn overall_risk(ranked: &[ConditionAssessment]) -> OverallRisk {
    if ranked.is_empty() {
        return OverallRisk {
            level: RiskLevel::Low,
            message: "No significant health risks identified based on current data. Patient \
                      presents with stable metabolic and cardiovascular parameters within \
                      acceptable clinical ranges."
                .to_string(),
        };
    }

    let high = count(ranked, Confidence::High);
    let medium = count(ranked, Confidence::Medium);

    if high >= 2 {
        OverallRisk {
            level: RiskLevel::High,
            message: "Multiple high-confidence conditions detected requiring immediate clinical \
                      attention. Comprehensive evaluation and coordinated multidisciplinary \
                      management strategy recommended to address compounding risk factors and \
                      prevent disease progression."
                .to_string(),
        }
    } else if high >= 1 {
        OverallRisk {
            level: RiskLevel::High,
            message: "At least one high-priority condition identified meeting diagnostic \
                      criteria. Urgent clinical assessment, confirmatory testing, and \
                      initiation of evidence-based treatment protocol strongly recommended."
                .to_string(),
        }
    } else if medium >= 2 {
        OverallRisk {
            level: RiskLevel::Medium,
            message: "Multiple moderate-risk conditions identified. Follow-up diagnostic \
                      testing recommended within 1-2 weeks to confirm findings. Early \
                      intervention with lifestyle modifications and possible pharmacotherapy \
                      may prevent progression to more severe disease states."
                .to_string(),
        }
    } else {
        OverallRisk {
            level: RiskLevel::Low,
            message: "Some health indicators warrant clinical attention and monitoring. \
                      Preventive measures including lifestyle modifications, regular follow-up, \
                      and risk factor management recommended to maintain optimal health status."
                .to_string(),
        }
    }
}

fn count(ranked: &[ConditionAssessment], tier: Confidence) -> usize {
    ranked.iter().filter(|a| a.confidence == tier).count()
}
