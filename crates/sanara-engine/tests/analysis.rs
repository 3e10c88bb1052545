use sanara_core::models::assessment::{Condition, ConditionAssessment, Confidence};
use sanara_core::models::plan::{CarePathway, DiagnosticTest, TestPriority};
use sanara_core::models::record::{Gender, PatientRecord, Symptom};
use sanara_core::models::risk::RiskLevel;
use sanara_engine::knowledge::{ConditionKnowledge, KnowledgeBase};
use sanara_engine::{analyze, priority, risk};

fn normal_record() -> PatientRecord {
    PatientRecord {
        age: 22,
        gender: Gender::Male,
        bmi: 21.0,
        systolic: 105,
        diastolic: 68,
        glucose: 85,
        total_cholesterol: 160,
        ldl: 90,
        hdl: 60,
        triglycerides: 100,
        symptoms: vec![],
    }
}

fn high_risk_record() -> PatientRecord {
    PatientRecord {
        age: 50,
        gender: Gender::Male,
        bmi: 31.0,
        systolic: 145,
        diastolic: 92,
        glucose: 130,
        total_cholesterol: 250,
        ldl: 170,
        hdl: 35,
        triglycerides: 220,
        symptoms: vec![],
    }
}

fn moderate_record() -> PatientRecord {
    PatientRecord {
        age: 50,
        gender: Gender::Male,
        bmi: 27.0,
        systolic: 132,
        diastolic: 78,
        glucose: 104,
        total_cholesterol: 210,
        ldl: 135,
        hdl: 55,
        triglycerides: 160,
        symptoms: vec![Symptom::Headache],
    }
}

fn assessment(condition: Condition, score: u32, confidence: Confidence) -> ConditionAssessment {
    ConditionAssessment {
        condition,
        score,
        confidence,
        factors: vec![],
        reasoning: String::new(),
    }
}

#[test]
fn unremarkable_record_yields_an_empty_low_result() {
    let result = analyze(&normal_record());

    assert!(result.conditions.is_empty());
    assert!(result.diagnostic_tests.is_empty());
    assert!(result.care_pathways.is_empty());
    assert_eq!(result.overall_risk.level, RiskLevel::Low);
    assert!(result
        .overall_risk
        .message
        .contains("No significant health risks"));
}

#[test]
fn high_risk_record_surfaces_all_four_conditions_ranked() {
    let result = analyze(&high_risk_record());

    let summary: Vec<(Condition, u32, Confidence)> = result
        .conditions
        .iter()
        .map(|a| (a.condition, a.score, a.confidence))
        .collect();

    assert_eq!(
        summary,
        vec![
            (Condition::DiabetesRisk, 8, Confidence::High),
            (Condition::Dyslipidemia, 7, Confidence::High),
            (Condition::CardiovascularRisk, 7, Confidence::High),
            (Condition::Hypertension, 3, Confidence::Medium),
        ]
    );
    assert_eq!(result.overall_risk.level, RiskLevel::High);
    assert!(result.overall_risk.message.contains("Multiple high-confidence"));
}

#[test]
fn analysis_is_deterministic() {
    let record = high_risk_record();
    assert_eq!(analyze(&record), analyze(&record));
}

#[test]
fn ranked_list_is_sorted_by_weight_then_score() {
    for record in [normal_record(), moderate_record(), high_risk_record()] {
        let result = analyze(&record);
        for pair in result.conditions.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.confidence.weight() >= b.confidence.weight());
            if a.confidence == b.confidence {
                assert!(a.score >= b.score);
            }
        }
    }
}

#[test]
fn equal_confidence_and_score_keep_assessor_order() {
    let ranked = priority::rank(vec![
        assessment(Condition::Dyslipidemia, 3, Confidence::Medium),
        assessment(Condition::CardiovascularRisk, 3, Confidence::Medium),
    ]);

    assert_eq!(ranked[0].condition, Condition::Dyslipidemia);
    assert_eq!(ranked[1].condition, Condition::CardiovascularRisk);
}

#[test]
fn confidence_weight_outranks_raw_score() {
    let ranked = priority::rank(vec![
        assessment(Condition::DiabetesRisk, 9, Confidence::Low),
        assessment(Condition::Hypertension, 2, Confidence::High),
    ]);

    assert_eq!(ranked[0].condition, Condition::Hypertension);
}

#[test]
fn diagnostic_tests_are_unique_and_escalated_under_high_confidence() {
    let result = analyze(&high_risk_record());

    for (i, test) in result.diagnostic_tests.iter().enumerate() {
        assert!(!result.diagnostic_tests[i + 1..]
            .iter()
            .any(|other| other.name == test.name));
        assert_ne!(test.priority, TestPriority::Routine);
    }

    let by_name = |name: &str| {
        result
            .diagnostic_tests
            .iter()
            .find(|t| t.name == name)
            .unwrap()
    };

    // Intrinsically routine tests come out urgent; urgent and followup
    // tiers pass through untouched.
    assert_eq!(
        by_name("Oral Glucose Tolerance Test (OGTT)").priority,
        TestPriority::Urgent
    );
    assert_eq!(
        by_name("Hemoglobin A1C (HbA1c) - 3-month average glucose").priority,
        TestPriority::Urgent
    );
    assert_eq!(
        by_name("Urinalysis for glycosuria and microalbuminuria").priority,
        TestPriority::Followup
    );
}

#[test]
fn routine_tier_survives_when_nothing_is_high_confidence() {
    let result = analyze(&moderate_record());

    assert!(result
        .conditions
        .iter()
        .all(|a| a.confidence != Confidence::High));
    let ogtt = result
        .diagnostic_tests
        .iter()
        .find(|t| t.name == "Oral Glucose Tolerance Test (OGTT)")
        .unwrap();
    assert_eq!(ogtt.priority, TestPriority::Routine);
}

#[test]
fn one_pathway_per_condition_in_rank_order() {
    let result = analyze(&high_risk_record());

    assert_eq!(result.care_pathways.len(), result.conditions.len());
    for (pathway, condition) in result.care_pathways.iter().zip(&result.conditions) {
        assert_eq!(pathway.condition, condition.condition);
    }
    assert_eq!(result.care_pathways[0].label, "Type 2 Diabetes Management");
}

#[test]
fn test_dedup_keeps_the_first_occurrence() {
    let shared = "Fasting metabolic panel";
    let entry = |tests: Vec<DiagnosticTest>, condition: Condition| ConditionKnowledge {
        tests,
        pathway: CarePathway {
            condition,
            label: String::new(),
            steps: vec![],
        },
    };
    let knowledge = KnowledgeBase::new([
        entry(
            vec![DiagnosticTest {
                name: shared.to_string(),
                purpose: "Screens glucose handling".to_string(),
                priority: TestPriority::Routine,
            }],
            Condition::DiabetesRisk,
        ),
        entry(
            vec![DiagnosticTest {
                name: shared.to_string(),
                purpose: "Baseline before medication".to_string(),
                priority: TestPriority::Followup,
            }],
            Condition::Hypertension,
        ),
        entry(vec![], Condition::Dyslipidemia),
        entry(vec![], Condition::CardiovascularRisk),
    ]);

    let ranked = vec![
        assessment(Condition::DiabetesRisk, 4, Confidence::Medium),
        assessment(Condition::Hypertension, 2, Confidence::Medium),
    ];
    let tests = knowledge.resolve_tests(&ranked);

    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].purpose, "Screens glucose handling");
    assert_eq!(tests[0].priority, TestPriority::Routine);
}

#[test]
fn escalation_is_global_across_conditions() {
    let knowledge = KnowledgeBase::standard();
    let ranked = vec![
        assessment(Condition::DiabetesRisk, 6, Confidence::High),
        assessment(Condition::Hypertension, 2, Confidence::Medium),
    ];

    let tests = knowledge.resolve_tests(&ranked);
    let echo = tests
        .iter()
        .find(|t| t.name == "Echocardiogram if end-organ damage suspected")
        .unwrap();

    // The High condition is the diabetes one, yet the hypertension entry's
    // routine test is escalated too.
    assert_eq!(echo.priority, TestPriority::Urgent);
}

#[test]
fn zero_conditions_grade_low() {
    let overall = risk::overall_risk(&[]);
    assert_eq!(overall.level, RiskLevel::Low);
    assert!(overall.message.contains("No significant health risks"));
}

#[test]
fn high_confidence_branches_pick_distinct_messages() {
    let two_high = risk::overall_risk(&[
        assessment(Condition::DiabetesRisk, 6, Confidence::High),
        assessment(Condition::Dyslipidemia, 5, Confidence::High),
    ]);
    assert_eq!(two_high.level, RiskLevel::High);
    assert!(two_high.message.contains("Multiple high-confidence"));

    let one_high = risk::overall_risk(&[assessment(
        Condition::DiabetesRisk,
        6,
        Confidence::High,
    )]);
    assert_eq!(one_high.level, RiskLevel::High);
    assert!(one_high.message.contains("At least one high-priority"));
}

#[test]
fn medium_and_fallback_branches() {
    let two_medium = risk::overall_risk(&[
        assessment(Condition::DiabetesRisk, 4, Confidence::Medium),
        assessment(Condition::Hypertension, 2, Confidence::Medium),
    ]);
    assert_eq!(two_medium.level, RiskLevel::Medium);
    assert!(two_medium.message.contains("Multiple moderate-risk"));

    let single_medium = risk::overall_risk(&[assessment(
        Condition::Hypertension,
        2,
        Confidence::Medium,
    )]);
    assert_eq!(single_medium.level, RiskLevel::Low);
    assert!(single_medium.message.contains("warrant clinical attention"));
}
