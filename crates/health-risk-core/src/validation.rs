//! Input validation boundary.
//!
//! Readings and profiles are checked against physiological bounds before they
//! reach the engine. The engine itself assumes validated input.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::models::{UserProfile, VitalReading};

pub const HEART_RATE_BPM: RangeInclusive<f64> = 40.0..=200.0;
pub const SYSTOLIC_MMHG: RangeInclusive<f64> = 70.0..=250.0;
pub const DIASTOLIC_MMHG: RangeInclusive<f64> = 40.0..=150.0;
pub const WEIGHT_KG: RangeInclusive<f64> = 20.0..=300.0;
pub const HEIGHT_CM: RangeInclusive<f64> = 100.0..=250.0;
pub const AGE_YEARS: RangeInclusive<u32> = 1..=120;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} out of range: {value} (expected {min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

fn check(field: &'static str, value: f64, range: &RangeInclusive<f64>) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if !range.contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Check a reading is within physiological bounds.
pub fn validate_reading(reading: &VitalReading) -> ValidationResult<()> {
    match *reading {
        VitalReading::HeartRate { bpm } => check("heart rate", bpm, &HEART_RATE_BPM),
        VitalReading::BloodPressure {
            systolic_mmhg,
            diastolic_mmhg,
        } => {
            check("systolic pressure", systolic_mmhg, &SYSTOLIC_MMHG)?;
            check("diastolic pressure", diastolic_mmhg, &DIASTOLIC_MMHG)
        }
        VitalReading::Body {
            weight_kg,
            height_cm,
        } => {
            check("weight", weight_kg, &WEIGHT_KG)?;
            check("height", height_cm, &HEIGHT_CM)
        }
    }
}

/// Check a profile's age and optional height.
pub fn validate_profile(profile: &UserProfile) -> ValidationResult<()> {
    if !AGE_YEARS.contains(&profile.age_years) {
        return Err(ValidationError::OutOfRange {
            field: "age",
            value: profile.age_years as f64,
            min: *AGE_YEARS.start() as f64,
            max: *AGE_YEARS.end() as f64,
        });
    }
    if let Some(height) = profile.height_cm {
        check("height", height, &HEIGHT_CM)?;
    }
    Ok(())
}
