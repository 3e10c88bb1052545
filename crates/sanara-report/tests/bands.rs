use sanara_core::models::record::{Gender, PatientRecord};
use sanara_report::bands::{
    BmiBand, BpBand, GlucoseBand, HdlBand, LdlBand, LipidPanel, TotalCholesterolBand,
    TriglycerideBand, VitalsBreakdown,
};

fn base_record() -> PatientRecord {
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
        symptoms: vec![],
    }
}

#[test]
fn bmi_bands_switch_at_the_published_cuts() {
    assert_eq!(BmiBand::classify(18.4), BmiBand::Underweight);
    assert_eq!(BmiBand::classify(18.5), BmiBand::Normal);
    assert_eq!(BmiBand::classify(24.9), BmiBand::Normal);
    assert_eq!(BmiBand::classify(25.0), BmiBand::Overweight);
    assert_eq!(BmiBand::classify(29.9), BmiBand::Overweight);
    assert_eq!(BmiBand::classify(30.0), BmiBand::ObeseClass1);
    assert_eq!(BmiBand::classify(34.9), BmiBand::ObeseClass1);
    assert_eq!(BmiBand::classify(35.0), BmiBand::ObeseClass2);
    assert_eq!(BmiBand::classify(35.0).label(), "Obese Class II+");
}

#[test]
fn either_bp_measurement_can_raise_the_band() {
    assert_eq!(BpBand::classify(119, 79), BpBand::Normal);
    assert_eq!(BpBand::classify(120, 79), BpBand::Elevated);
    assert_eq!(BpBand::classify(129, 79), BpBand::Elevated);
    assert_eq!(BpBand::classify(130, 79), BpBand::Stage1);
    assert_eq!(BpBand::classify(125, 80), BpBand::Stage1);
    assert_eq!(BpBand::classify(139, 89), BpBand::Stage1);
    assert_eq!(BpBand::classify(140, 79), BpBand::Stage2);
    assert_eq!(BpBand::classify(125, 90), BpBand::Stage2);
    assert_eq!(BpBand::classify(180, 79), BpBand::Crisis);
    assert_eq!(BpBand::classify(125, 120), BpBand::Crisis);
}

#[test]
fn diastolic_only_elevation_is_not_the_elevated_band() {
    // 110/85 skips Elevated entirely: the Elevated band is systolic-defined,
    // but a diastolic of 85 already meets the Stage 1 cut.
    assert_eq!(BpBand::classify(110, 85), BpBand::Stage1);
}

#[test]
fn glucose_bands_split_at_100_and_126() {
    assert_eq!(GlucoseBand::classify(99), GlucoseBand::Normal);
    assert_eq!(GlucoseBand::classify(100), GlucoseBand::Prediabetes);
    assert_eq!(GlucoseBand::classify(125), GlucoseBand::Prediabetes);
    assert_eq!(GlucoseBand::classify(126), GlucoseBand::DiabetesRange);
}

#[test]
fn total_cholesterol_bands() {
    assert_eq!(TotalCholesterolBand::classify(199), TotalCholesterolBand::Desirable);
    assert_eq!(TotalCholesterolBand::classify(200), TotalCholesterolBand::Borderline);
    assert_eq!(TotalCholesterolBand::classify(239), TotalCholesterolBand::Borderline);
    assert_eq!(TotalCholesterolBand::classify(240), TotalCholesterolBand::High);
}

#[test]
fn ldl_bands_cover_all_five_ranges() {
    assert_eq!(LdlBand::classify(99), LdlBand::Optimal);
    assert_eq!(LdlBand::classify(100), LdlBand::NearOptimal);
    assert_eq!(LdlBand::classify(129), LdlBand::NearOptimal);
    assert_eq!(LdlBand::classify(130), LdlBand::BorderlineHigh);
    assert_eq!(LdlBand::classify(159), LdlBand::BorderlineHigh);
    assert_eq!(LdlBand::classify(160), LdlBand::High);
    assert_eq!(LdlBand::classify(189), LdlBand::High);
    assert_eq!(LdlBand::classify(190), LdlBand::VeryHigh);
}

#[test]
fn hdl_low_cut_depends_on_sex() {
    assert_eq!(HdlBand::classify(39, Gender::Male), HdlBand::Low);
    assert_eq!(HdlBand::classify(40, Gender::Male), HdlBand::Acceptable);
    assert_eq!(HdlBand::classify(49, Gender::Female), HdlBand::Low);
    assert_eq!(HdlBand::classify(50, Gender::Female), HdlBand::Acceptable);
    assert_eq!(HdlBand::classify(60, Gender::Male), HdlBand::Protective);
    assert_eq!(HdlBand::classify(60, Gender::Female), HdlBand::Protective);
}

#[test]
fn protective_hdl_displays_as_high() {
    assert_eq!(HdlBand::Protective.label(), "High");
    assert_eq!(HdlBand::Protective.interpretation(), "Protective");
}

#[test]
fn triglyceride_bands() {
    assert_eq!(TriglycerideBand::classify(149), TriglycerideBand::Normal);
    assert_eq!(TriglycerideBand::classify(150), TriglycerideBand::Borderline);
    assert_eq!(TriglycerideBand::classify(199), TriglycerideBand::Borderline);
    assert_eq!(TriglycerideBand::classify(200), TriglycerideBand::High);
    assert_eq!(TriglycerideBand::classify(499), TriglycerideBand::High);
    assert_eq!(TriglycerideBand::classify(500), TriglycerideBand::VeryHigh);
}

#[test]
fn clean_panel_reads_favorable() {
    let panel = LipidPanel::for_record(&base_record());

    assert_eq!(panel.abnormalities, 0);
    assert_eq!(panel.assessment, "Favorable lipid profile");
    assert_eq!(
        panel.recommendation,
        "Continue healthy lifestyle. Repeat in 5 years."
    );
}

#[test]
fn borderline_values_do_not_count_as_abnormalities() {
    // Borderline bands (total 200-239, LDL 130-159, trig 150-199) read as
    // findings but only the high cuts count toward the abnormality tally.
    let record = PatientRecord {
        total_cholesterol: 210,
        ldl: 135,
        triglycerides: 160,
        ..base_record()
    };
    let panel = LipidPanel::for_record(&record);

    assert_eq!(panel.total_cholesterol, TotalCholesterolBand::Borderline);
    assert_eq!(panel.ldl, LdlBand::BorderlineHigh);
    assert_eq!(panel.triglycerides, TriglycerideBand::Borderline);
    assert_eq!(panel.abnormalities, 0);
}

#[test]
fn single_abnormality_asks_for_a_recheck() {
    let record = PatientRecord {
        ldl: 160,
        ..base_record()
    };
    let panel = LipidPanel::for_record(&record);

    assert_eq!(panel.abnormalities, 1);
    assert_eq!(panel.assessment, "Single lipid abnormality");
    assert_eq!(
        panel.recommendation,
        "Lifestyle changes recommended. Recheck in 3-6 months."
    );
}

#[test]
fn multiple_abnormalities_suggest_statin_therapy() {
    let record = PatientRecord {
        total_cholesterol: 250,
        ldl: 170,
        hdl: 35,
        triglycerides: 220,
        ..base_record()
    };
    let panel = LipidPanel::for_record(&record);

    assert_eq!(panel.abnormalities, 4);
    assert_eq!(panel.assessment, "Multiple lipid abnormalities");
    assert_eq!(
        panel.recommendation,
        "Comprehensive management required. Consider statin therapy."
    );
}

#[test]
fn low_hdl_counts_by_the_female_floor() {
    let record = PatientRecord {
        gender: Gender::Female,
        hdl: 45,
        ..base_record()
    };
    let panel = LipidPanel::for_record(&record);

    assert_eq!(panel.hdl, HdlBand::Low);
    assert_eq!(panel.abnormalities, 1);
}

#[test]
fn vitals_breakdown_bands_every_measurement() {
    let record = PatientRecord {
        bmi: 31.0,
        systolic: 145,
        diastolic: 92,
        glucose: 130,
        total_cholesterol: 250,
        ldl: 170,
        hdl: 35,
        triglycerides: 220,
        ..base_record()
    };
    let vitals = VitalsBreakdown::for_record(&record);

    assert_eq!(vitals.bmi, BmiBand::ObeseClass1);
    assert_eq!(vitals.blood_pressure, BpBand::Stage2);
    assert_eq!(vitals.glucose, GlucoseBand::DiabetesRange);
    assert_eq!(vitals.lipids.abnormalities, 4);
}
