//! Composite risk scoring.
//!
//! Four independent sub-scores (age, heart rate, blood pressure, BMI) are
//! summed and clamped to 0..=100:
//!
//! | Dimension      | Bands                                                        |
//! |----------------|--------------------------------------------------------------|
//! | Age            | <30: 5, <40: 10, <50: 15, <60: 20, <70: 25, else 30           |
//! | Heart rate     | <50: 15, <60: 8, ≤100: 0, ≤120: 12, else 25                   |
//! | Blood pressure | optimal: 0, <130/<80: 5, <140 or <90: 15, <180 or <120: 25, else 35 |
//! | BMI            | <18.5: 10, <25: 0, <30: 10, <35: 20, else 30                  |

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{
    RiskAssessment, RiskDimension, RiskFactor, RiskLevel, UserProfile, VitalSnapshot,
};

/// Upper bound of the composite score.
pub const MAX_RISK_SCORE: u32 = 100;

/// Fixed lifestyle recommendations attached to every assessment.
///
/// These do not vary with the risk level.
pub const GENERAL_RECOMMENDATIONS: [&str; 5] = [
    "Monitor vital signs regularly",
    "Maintain a balanced diet",
    "Exercise regularly as appropriate for your condition",
    "Consider consulting with healthcare professionals",
    "Manage stress through relaxation techniques",
];

/// Complete input set for one scoring run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskInputs {
    pub age_years: u32,
    pub heart_rate_bpm: f64,
    pub systolic_mmhg: f64,
    pub diastolic_mmhg: f64,
    pub bmi: f64,
}

impl RiskInputs {
    /// Gather inputs from the profile and current vitals.
    ///
    /// Returns `None` unless every input is present.
    pub fn gather(profile: Option<&UserProfile>, vitals: &VitalSnapshot) -> Option<Self> {
        let profile = profile?;
        let bp = vitals.blood_pressure?;
        Some(Self {
            age_years: profile.age_years,
            heart_rate_bpm: vitals.heart_rate_bpm?,
            systolic_mmhg: bp.systolic_mmhg,
            diastolic_mmhg: bp.diastolic_mmhg,
            bmi: vitals.bmi()?,
        })
    }
}

pub fn age_score(age_years: u32) -> u32 {
    match age_years {
        0..=29 => 5,
        30..=39 => 10,
        40..=49 => 15,
        50..=59 => 20,
        60..=69 => 25,
        _ => 30,
    }
}

pub fn heart_rate_score(bpm: f64) -> u32 {
    if bpm < 50.0 {
        15
    } else if bpm < 60.0 {
        8
    } else if bpm <= 100.0 {
        0
    } else if bpm <= 120.0 {
        12
    } else {
        25
    }
}

pub fn blood_pressure_score(systolic: f64, diastolic: f64) -> u32 {
    if systolic < 120.0 && diastolic < 80.0 {
        0
    } else if systolic < 130.0 && diastolic < 80.0 {
        5
    } else if systolic < 140.0 || diastolic < 90.0 {
        15
    } else if systolic < 180.0 || diastolic < 120.0 {
        25
    } else {
        35
    }
}

pub fn bmi_score(bmi: f64) -> u32 {
    if bmi < 18.5 {
        10
    } else if bmi < 25.0 {
        0
    } else if bmi < 30.0 {
        10
    } else if bmi < 35.0 {
        20
    } else {
        30
    }
}

fn age_factor(age_years: u32) -> RiskFactor {
    let score = age_score(age_years);
    let band = match score {
        s if s < 15 => "Low",
        s if s < 25 => "Moderate",
        _ => "High",
    };
    RiskFactor::new(
        RiskDimension::Age,
        score,
        format!("Age {} - {} age-related risk", age_years, band),
    )
}

fn heart_rate_factor(bpm: f64) -> RiskFactor {
    let score = heart_rate_score(bpm);
    let band = match score {
        0 => "Normal",
        s if s < 15 => "Mild concern",
        _ => "Significant concern",
    };
    RiskFactor::new(
        RiskDimension::HeartRate,
        score,
        format!("{} BPM - {}", bpm, band),
    )
}

fn blood_pressure_factor(systolic: f64, diastolic: f64) -> RiskFactor {
    let score = blood_pressure_score(systolic, diastolic);
    let band = match score {
        0 => "Normal",
        s if s < 10 => "Elevated",
        s if s < 20 => "High",
        _ => "Very High",
    };
    RiskFactor::new(
        RiskDimension::BloodPressure,
        score,
        format!("{}/{} mmHg - {}", systolic, diastolic, band),
    )
}

fn bmi_factor(bmi: f64) -> RiskFactor {
    let score = bmi_score(bmi);
    let band = match score {
        0 => "Normal",
        s if s < 15 => "Overweight",
        _ => "Obese",
    };
    RiskFactor::new(RiskDimension::Bmi, score, format!("BMI {} - {}", bmi, band))
}

/// Score a complete input set.
pub fn assess(inputs: &RiskInputs) -> RiskAssessment {
    let factors = vec![
        age_factor(inputs.age_years),
        heart_rate_factor(inputs.heart_rate_bpm),
        blood_pressure_factor(inputs.systolic_mmhg, inputs.diastolic_mmhg),
        bmi_factor(inputs.bmi),
    ];

    let total: u32 = factors.iter().map(|f| f.score).sum();
    let risk_score = total.min(MAX_RISK_SCORE);
    let level = RiskLevel::from_score(risk_score);

    debug!(
        "Scored risk {} ({:?}) from factors {:?}",
        risk_score,
        level,
        factors.iter().map(|f| f.score).collect::<Vec<_>>()
    );

    RiskAssessment {
        risk_score,
        factors,
        recommendations: GENERAL_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
        risk_level: level.into(),
    }
}

/// Score a profile and vitals, or `None` when any input is missing.
pub fn score_risk(profile: Option<&UserProfile>, vitals: &VitalSnapshot) -> Option<RiskAssessment> {
    match RiskInputs::gather(profile, vitals) {
        Some(inputs) => Some(assess(&inputs)),
        None => {
            debug!("Skipping risk scoring: inputs incomplete");
            None
        }
    }
}
