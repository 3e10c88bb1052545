//! Reference-range banding for the raw vitals and labs.
//!
//! These bands are display vocabulary only. The scoring rules read their
//! cut-offs from `ClinicalThresholds` in the engine crate; the bands here
//! restate the standard reference ranges for the report and stay fixed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sanara_core::models::record::{Gender, PatientRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
}

impl BmiBand {
    pub fn classify(bmi: f64) -> BmiBand {
        if bmi < 18.5 {
            BmiBand::Underweight
        } else if bmi < 25.0 {
            BmiBand::Normal
        } else if bmi < 30.0 {
            BmiBand::Overweight
        } else if bmi < 35.0 {
            BmiBand::ObeseClass1
        } else {
            BmiBand::ObeseClass2
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal",
            BmiBand::Overweight => "Overweight",
            BmiBand::ObeseClass1 => "Obese Class I",
            BmiBand::ObeseClass2 => "Obese Class II+",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Below healthy weight",
            BmiBand::Normal => "Healthy weight",
            BmiBand::Overweight => "Above healthy weight",
            BmiBand::ObeseClass1 => "Moderate obesity",
            BmiBand::ObeseClass2 => "Severe obesity",
        }
    }

    pub fn clinical_impact(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "May require nutritional assessment",
            BmiBand::Normal => "Maintain current weight",
            BmiBand::Overweight => "5-10% weight loss recommended",
            BmiBand::ObeseClass1 => "Intensive lifestyle intervention needed",
            BmiBand::ObeseClass2 => "Consider bariatric evaluation",
        }
    }
}

/// Combined blood-pressure classification. Either measurement alone can
/// pull the reading into a higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BpBand {
    Normal,
    Elevated,
    Stage1,
    Stage2,
    Crisis,
}

impl BpBand {
    pub fn classify(systolic: u16, diastolic: u16) -> BpBand {
        if systolic >= 180 || diastolic >= 120 {
            BpBand::Crisis
        } else if systolic >= 140 || diastolic >= 90 {
            BpBand::Stage2
        } else if systolic >= 130 || diastolic >= 80 {
            BpBand::Stage1
        } else if systolic >= 120 {
            BpBand::Elevated
        } else {
            BpBand::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BpBand::Normal => "Normal",
            BpBand::Elevated => "Elevated",
            BpBand::Stage1 => "Stage 1 Hypertension",
            BpBand::Stage2 => "Stage 2 Hypertension",
            BpBand::Crisis => "Hypertensive Crisis",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            BpBand::Normal => "Continue healthy habits",
            BpBand::Elevated => "Lifestyle modifications",
            BpBand::Stage1 => "Lifestyle modifications + consider medication",
            BpBand::Stage2 => "Pharmacotherapy indicated",
            BpBand::Crisis => "Emergency evaluation required",
        }
    }

    pub fn significance(&self) -> &'static str {
        match self {
            BpBand::Normal => "Optimal cardiovascular health",
            BpBand::Elevated => "Monitor regularly",
            BpBand::Stage1 => "Increased risk",
            BpBand::Stage2 => "Elevated cardiovascular risk",
            BpBand::Crisis => "Risk of acute end-organ damage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GlucoseBand {
    Normal,
    Prediabetes,
    DiabetesRange,
}

impl GlucoseBand {
    pub fn classify(glucose: u16) -> GlucoseBand {
        if glucose < 100 {
            GlucoseBand::Normal
        } else if glucose < 126 {
            GlucoseBand::Prediabetes
        } else {
            GlucoseBand::DiabetesRange
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GlucoseBand::Normal => "Normal",
            GlucoseBand::Prediabetes => "Prediabetes",
            GlucoseBand::DiabetesRange => "Diabetes Range",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            GlucoseBand::Normal => "Healthy glucose",
            GlucoseBand::Prediabetes => "Impaired fasting glucose",
            GlucoseBand::DiabetesRange => "Meets diagnostic threshold",
        }
    }

    pub fn clinical_impact(&self) -> &'static str {
        match self {
            GlucoseBand::Normal => "Maintain current lifestyle",
            GlucoseBand::Prediabetes => "Lifestyle intervention can prevent diabetes",
            GlucoseBand::DiabetesRange => "Requires confirmation and management",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TotalCholesterolBand {
    Desirable,
    Borderline,
    High,
}

impl TotalCholesterolBand {
    pub fn classify(total_cholesterol: u16) -> TotalCholesterolBand {
        if total_cholesterol < 200 {
            TotalCholesterolBand::Desirable
        } else if total_cholesterol < 240 {
            TotalCholesterolBand::Borderline
        } else {
            TotalCholesterolBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TotalCholesterolBand::Desirable => "Desirable",
            TotalCholesterolBand::Borderline => "Borderline",
            TotalCholesterolBand::High => "High",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            TotalCholesterolBand::Desirable => "Optimal",
            TotalCholesterolBand::Borderline => "Moderate risk",
            TotalCholesterolBand::High => "Elevated risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LdlBand {
    Optimal,
    NearOptimal,
    BorderlineHigh,
    High,
    VeryHigh,
}

impl LdlBand {
    pub fn classify(ldl: u16) -> LdlBand {
        if ldl < 100 {
            LdlBand::Optimal
        } else if ldl < 130 {
            LdlBand::NearOptimal
        } else if ldl < 160 {
            LdlBand::BorderlineHigh
        } else if ldl < 190 {
            LdlBand::High
        } else {
            LdlBand::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LdlBand::Optimal => "Optimal",
            LdlBand::NearOptimal => "Near Optimal",
            LdlBand::BorderlineHigh => "Borderline High",
            LdlBand::High => "High",
            LdlBand::VeryHigh => "Very High",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            LdlBand::Optimal => "Ideal level",
            LdlBand::NearOptimal => "Acceptable",
            LdlBand::BorderlineHigh => "Lifestyle changes recommended",
            LdlBand::High => "Medication likely needed",
            LdlBand::VeryHigh => "Statin therapy recommended",
        }
    }
}

/// HDL reads inversely: high is protective, low is the risk factor. The
/// low cut-off is sex-specific (male <40, female <50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HdlBand {
    Low,
    Acceptable,
    Protective,
}

impl HdlBand {
    pub fn classify(hdl: u16, gender: Gender) -> HdlBand {
        if hdl < hdl_floor(gender) {
            HdlBand::Low
        } else if hdl >= 60 {
            HdlBand::Protective
        } else {
            HdlBand::Acceptable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HdlBand::Low => "Low",
            HdlBand::Acceptable => "Acceptable",
            HdlBand::Protective => "High",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            HdlBand::Low => "Risk factor",
            HdlBand::Acceptable => "Adequate",
            HdlBand::Protective => "Protective",
        }
    }

    pub fn clinical_note(&self) -> &'static str {
        match self {
            HdlBand::Low => "Low HDL increases cardiovascular risk",
            HdlBand::Acceptable => "Within normal range",
            HdlBand::Protective => "Excellent cardioprotection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriglycerideBand {
    Normal,
    Borderline,
    High,
    VeryHigh,
}

impl TriglycerideBand {
    pub fn classify(triglycerides: u16) -> TriglycerideBand {
        if triglycerides < 150 {
            TriglycerideBand::Normal
        } else if triglycerides < 200 {
            TriglycerideBand::Borderline
        } else if triglycerides < 500 {
            TriglycerideBand::High
        } else {
            TriglycerideBand::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TriglycerideBand::Normal => "Normal",
            TriglycerideBand::Borderline => "Borderline",
            TriglycerideBand::High => "High",
            TriglycerideBand::VeryHigh => "Very High",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            TriglycerideBand::Normal => "Optimal",
            TriglycerideBand::Borderline => "Lifestyle modifications",
            TriglycerideBand::High => "Increased risk",
            TriglycerideBand::VeryHigh => "Pancreatitis risk",
        }
    }
}

/// The four lipid analytes banded together, with an overall call based on
/// how many sit in their abnormal range (total ≥240, LDL ≥160, HDL below
/// the sex-specific floor, triglycerides ≥200).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LipidPanel {
    pub total_cholesterol: TotalCholesterolBand,
    pub ldl: LdlBand,
    pub hdl: HdlBand,
    pub triglycerides: TriglycerideBand,
    pub abnormalities: u8,
    pub assessment: String,
    pub recommendation: String,
}

impl LipidPanel {
    pub fn for_record(record: &PatientRecord) -> LipidPanel {
        let abnormalities = [
            record.total_cholesterol >= 240,
            record.ldl >= 160,
            record.hdl < hdl_floor(record.gender),
            record.triglycerides >= 200,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count() as u8;

        let (assessment, recommendation) = match abnormalities {
            0 => (
                "Favorable lipid profile",
                "Continue healthy lifestyle. Repeat in 5 years.",
            ),
            1 => (
                "Single lipid abnormality",
                "Lifestyle changes recommended. Recheck in 3-6 months.",
            ),
            _ => (
                "Multiple lipid abnormalities",
                "Comprehensive management required. Consider statin therapy.",
            ),
        };

        LipidPanel {
            total_cholesterol: TotalCholesterolBand::classify(record.total_cholesterol),
            ldl: LdlBand::classify(record.ldl),
            hdl: HdlBand::classify(record.hdl, record.gender),
            triglycerides: TriglycerideBand::classify(record.triglycerides),
            abnormalities,
            assessment: assessment.to_string(),
            recommendation: recommendation.to_string(),
        }
    }
}

/// Every vital and lab banded, ready for the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsBreakdown {
    pub bmi: BmiBand,
    pub blood_pressure: BpBand,
    pub glucose: GlucoseBand,
    pub lipids: LipidPanel,
}

impl VitalsBreakdown {
    pub fn for_record(record: &PatientRecord) -> VitalsBreakdown {
        VitalsBreakdown {
            bmi: BmiBand::classify(record.bmi),
            blood_pressure: BpBand::classify(record.systolic, record.diastolic),
            glucose: GlucoseBand::classify(record.glucose),
            lipids: LipidPanel::for_record(record),
        }
    }
}

fn hdl_floor(gender: Gender) -> u16 {
    match gender {
        Gender::Male => 40,
        Gender::Female => 50,
    }
}
