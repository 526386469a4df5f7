//! Vital sign models.

use serde::{Deserialize, Serialize};

/// Which kind of vital a reading carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    Bmi,
}

/// A single vital-sign submission.
///
/// Readings are never edited; a later submission of the same kind replaces
/// the earlier one in a [`VitalSnapshot`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VitalReading {
    HeartRate { bpm: f64 },
    BloodPressure { systolic_mmhg: f64, diastolic_mmhg: f64 },
    Body { weight_kg: f64, height_cm: f64 },
}

impl VitalReading {
    /// Kind of this reading.
    pub fn kind(&self) -> VitalKind {
        match self {
            VitalReading::HeartRate { .. } => VitalKind::HeartRate,
            VitalReading::BloodPressure { .. } => VitalKind::BloodPressure,
            VitalReading::Body { .. } => VitalKind::Bmi,
        }
    }
}

/// Systolic/diastolic pair in mmHg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BloodPressure {
    pub systolic_mmhg: f64,
    pub diastolic_mmhg: f64,
}

impl BloodPressure {
    pub fn new(systolic_mmhg: f64, diastolic_mmhg: f64) -> Self {
        Self {
            systolic_mmhg,
            diastolic_mmhg,
        }
    }
}

impl std::fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.systolic_mmhg, self.diastolic_mmhg)
    }
}

/// Weight and height with the derived BMI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyMeasurement {
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Body mass index, rounded to one decimal
    pub bmi: f64,
}

impl BodyMeasurement {
    /// Record a measurement, deriving the BMI.
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            bmi: calculate_bmi(weight_kg, height_cm),
        }
    }
}

/// BMI = weight / height², height in meters, rounded to one decimal.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / (height_m * height_m) * 10.0).round() / 10.0
}

/// The current value of every vital slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VitalSnapshot {
    pub heart_rate_bpm: Option<f64>,
    pub blood_pressure: Option<BloodPressure>,
    pub body: Option<BodyMeasurement>,
}

impl VitalSnapshot {
    /// Empty snapshot with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot this reading belongs to.
    pub fn record(&mut self, reading: VitalReading) {
        match reading {
            VitalReading::HeartRate { bpm } => self.heart_rate_bpm = Some(bpm),
            VitalReading::BloodPressure {
                systolic_mmhg,
                diastolic_mmhg,
            } => self.blood_pressure = Some(BloodPressure::new(systolic_mmhg, diastolic_mmhg)),
            VitalReading::Body {
                weight_kg,
                height_cm,
            } => self.body = Some(BodyMeasurement::new(weight_kg, height_cm)),
        }
    }

    /// Builder-style [`record`](Self::record).
    pub fn with(mut self, reading: VitalReading) -> Self {
        self.record(reading);
        self
    }

    /// Current BMI, if a body measurement has been recorded.
    pub fn bmi(&self) -> Option<f64> {
        self.body.map(|b| b.bmi)
    }

    /// Whether all vitals needed for scoring are present.
    pub fn is_complete(&self) -> bool {
        self.heart_rate_bpm.is_some() && self.blood_pressure.is_some() && self.body.is_some()
    }
}
