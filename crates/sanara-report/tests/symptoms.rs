use sanara_core::models::record::{Gender, PatientRecord, Symptom};
use sanara_report::symptoms::{self, SymptomReview, SymptomSeverity};

fn record_with(symptoms: Vec<Symptom>) -> PatientRecord {
    PatientRecord {
        age: 40,
        gender: Gender::Male,
        bmi: 22.0,
        systolic: 110,
        diastolic: 70,
        glucose: 90,
        total_cholesterol: 170,
        ldl: 95,
        hdl: 55,
        triglycerides: 110,
        symptoms,
    }
}

#[test]
fn cardiac_symptoms_triage_as_urgent() {
    assert_eq!(
        SymptomSeverity::for_symptom(Symptom::ChestPain),
        SymptomSeverity::Urgent
    );
    assert_eq!(
        SymptomSeverity::for_symptom(Symptom::ShortnessOfBreath),
        SymptomSeverity::Urgent
    );
    assert_eq!(
        SymptomSeverity::for_symptom(Symptom::Headache),
        SymptomSeverity::Moderate
    );
    assert_eq!(
        SymptomSeverity::for_symptom(Symptom::BlurredVision),
        SymptomSeverity::Moderate
    );
    assert_eq!(
        SymptomSeverity::for_symptom(Symptom::Fatigue),
        SymptomSeverity::Mild
    );
}

#[test]
fn no_symptoms_reads_as_none_reported() {
    assert_eq!(symptoms::correlation(&[]), "No symptoms reported");
    assert_eq!(
        symptoms::significance(&[]),
        "Mild symptom burden requiring monitoring"
    );
}

#[test]
fn one_diabetes_symptom_is_not_a_cluster() {
    assert_eq!(
        symptoms::correlation(&[Symptom::Fatigue]),
        "Non-specific symptom pattern"
    );
}

#[test]
fn two_diabetes_symptoms_form_a_cluster() {
    let reported = [Symptom::FrequentUrination, Symptom::IncreasedThirst];
    assert_eq!(
        symptoms::correlation(&reported),
        "2 diabetes-related symptoms"
    );
    assert_eq!(
        symptoms::significance(&reported),
        "Several symptoms may indicate underlying metabolic/cardiovascular dysfunction"
    );
}

#[test]
fn clusters_join_in_fixed_order() {
    let reported = [
        Symptom::ChestPain,
        Symptom::Headache,
        Symptom::FrequentUrination,
        Symptom::Fatigue,
    ];
    assert_eq!(
        symptoms::correlation(&reported),
        "2 diabetes-related symptoms; 1 hypertension-related symptom(s); 1 cardiac symptom(s)"
    );
}

#[test]
fn any_cardiac_symptom_dominates_significance() {
    assert_eq!(
        symptoms::significance(&[Symptom::ShortnessOfBreath]),
        "URGENT: Cardiac symptoms require immediate evaluation to rule out acute coronary syndrome"
    );
}

#[test]
fn four_noncardiac_symptoms_read_as_disease_burden() {
    let reported = [
        Symptom::Headache,
        Symptom::Dizziness,
        Symptom::Fatigue,
        Symptom::BlurredVision,
    ];
    assert_eq!(
        symptoms::significance(&reported),
        "Multiple symptoms suggest significant disease burden"
    );
}

#[test]
fn review_collects_urgent_symptoms_in_reported_order() {
    let record = record_with(vec![
        Symptom::Headache,
        Symptom::ChestPain,
        Symptom::ShortnessOfBreath,
    ]);
    let review = SymptomReview::for_record(&record);

    assert_eq!(review.reported.len(), 3);
    assert_eq!(review.reported[0].severity, SymptomSeverity::Moderate);
    assert_eq!(
        review.urgent,
        vec![Symptom::ChestPain, Symptom::ShortnessOfBreath]
    );
    assert!(review.significance.starts_with("URGENT:"));
}

#[test]
fn review_of_an_asymptomatic_record_is_empty() {
    let review = SymptomReview::for_record(&record_with(vec![]));

    assert!(review.reported.is_empty());
    assert!(review.urgent.is_empty());
    assert_eq!(review.correlation, "No symptoms reported");
}
