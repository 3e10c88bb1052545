use serde::{Deserialize, Serialize};

use sanara_core::models::record::Gender;

/// Revision tag for the cut-point table shipped by `Default`.
pub const GUIDELINE_VERSION: &str = "2024.1";

/// Blood pressure stage cut-points, mmHg. A reading is in a stage when
/// either component reaches that stage's cut-point, except the Stage 1
/// screening band which is systolic-only (the diastolic cut-point feeds the
/// cardiovascular risk-factor flag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureThresholds {
    pub stage1_systolic: u16,
    pub stage1_diastolic: u16,
    pub stage2_systolic: u16,
    pub stage2_diastolic: u16,
    pub crisis_systolic: u16,
    pub crisis_diastolic: u16,
}

/// Fasting glucose cut-points, mg/dL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlucoseThresholds {
    pub prediabetes: u16,
    pub diabetes: u16,
}

/// Lipid panel cut-points, mg/dL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LipidThresholds {
    pub total_borderline: u16,
    pub total_high: u16,
    pub ldl_borderline: u16,
    pub ldl_high: u16,
    pub ldl_very_high: u16,
    pub hdl_low_male: u16,
    pub hdl_low_female: u16,
    pub triglycerides_borderline: u16,
    pub triglycerides_high: u16,
    pub triglycerides_very_high: u16,
}

/// BMI class cut-points, kg/m².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiThresholds {
    pub overweight: f64,
    pub obese: f64,
}

/// The clinical cut-point table every assessor reads. A plain value:
/// inject a modified copy to re-tune the rules, the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalThresholds {
    pub blood_pressure: BloodPressureThresholds,
    pub glucose: GlucoseThresholds,
    pub lipids: LipidThresholds,
    pub bmi: BmiThresholds,
}

impl Default for ClinicalThresholds {
    fn default() -> Self {
        Self {
            blood_pressure: BloodPressureThresholds {
                stage1_systolic: 130,
                stage1_diastolic: 80,
                stage2_systolic: 140,
                stage2_diastolic: 90,
                crisis_systolic: 180,
                crisis_diastolic: 120,
            },
            glucose: GlucoseThresholds {
                prediabetes: 100,
                diabetes: 126,
            },
            lipids: LipidThresholds {
                total_borderline: 200,
                total_high: 240,
                ldl_borderline: 130,
                ldl_high: 160,
                ldl_very_high: 190,
                hdl_low_male: 40,
                hdl_low_female: 50,
                triglycerides_borderline: 150,
                triglycerides_high: 200,
                triglycerides_very_high: 500,
            },
            bmi: BmiThresholds {
                overweight: 25.0,
                obese: 30.0,
            },
        }
    }
}

impl ClinicalThresholds {
    /// Sex-specific HDL floor; below it the low-HDL criteria fire.
    pub fn hdl_floor(&self, gender: Gender) -> u16 {
        match gender {
            Gender::Male => self.lipids.hdl_low_male,
            Gender::Female => self.lipids.hdl_low_female,
        }
    }
}
