use sanara_core::models::assessment::ConditionAssessment;

/// Order findings by descending confidence weight, ties by descending
/// score. The sort is stable, so full ties keep the canonical assessor
/// order the input was collected in. Assessments are moved, never altered.
pub fn rank(mut assessments: Vec<ConditionAssessment>) -> Vec<ConditionAssessment> {
    assessments.sort_by(|a, b| {
        b.confidence
            .weight()
            .cmp(&a.confidence.weight())
            .then_with(|| b.score.cmp(&a.score))
    });
    assessments
}
