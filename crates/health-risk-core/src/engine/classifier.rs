//! Qualitative status labels for individual vitals.
//!
//! Each band is checked in order and the first satisfied predicate wins.

use serde::{Deserialize, Serialize};

use crate::models::{BloodPressure, VitalReading, VitalSnapshot};

/// Display severity of a vital status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Nothing recorded
    Unset,
    /// Below range, not alarming
    Info,
    Good,
    Caution,
    Warning,
    Danger,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unset => "unset",
            Severity::Info => "info",
            Severity::Good => "good",
            Severity::Caution => "caution",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Critical => "critical",
        }
    }

    /// Color token for display.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Unset => "muted",
            Severity::Info => "blue",
            Severity::Good => "green",
            Severity::Caution => "yellow",
            Severity::Warning => "orange",
            Severity::Danger => "red",
            Severity::Critical => "dark-red",
        }
    }
}

/// Label plus severity for one vital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitalStatus {
    pub label: String,
    pub severity: Severity,
}

impl VitalStatus {
    fn new(label: &str, severity: Severity) -> Self {
        Self {
            label: label.to_string(),
            severity,
        }
    }

    /// Status for a vital that has not been recorded.
    pub fn unset() -> Self {
        Self::new("Not recorded", Severity::Unset)
    }

    pub fn is_unset(&self) -> bool {
        self.severity == Severity::Unset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartRateBand {
    Bradycardia,
    Normal,
    Elevated,
    Tachycardia,
}

impl HeartRateBand {
    pub fn classify(bpm: f64) -> Self {
        if bpm < 50.0 {
            HeartRateBand::Bradycardia
        } else if bpm <= 100.0 {
            HeartRateBand::Normal
        } else if bpm <= 120.0 {
            HeartRateBand::Elevated
        } else {
            HeartRateBand::Tachycardia
        }
    }

    pub fn status(&self) -> VitalStatus {
        match self {
            HeartRateBand::Bradycardia => VitalStatus::new("Bradycardia (Low)", Severity::Warning),
            HeartRateBand::Normal => VitalStatus::new("Normal range", Severity::Good),
            HeartRateBand::Elevated => VitalStatus::new("Elevated", Severity::Caution),
            HeartRateBand::Tachycardia => VitalStatus::new("Tachycardia (High)", Severity::Danger),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloodPressureBand {
    Low,
    Optimal,
    Normal,
    Stage1High,
    Stage2High,
    Crisis,
}

impl BloodPressureBand {
    pub fn classify(bp: BloodPressure) -> Self {
        let (sys, dia) = (bp.systolic_mmhg, bp.diastolic_mmhg);
        if sys < 90.0 || dia < 60.0 {
            BloodPressureBand::Low
        } else if sys < 120.0 && dia < 80.0 {
            BloodPressureBand::Optimal
        } else if sys < 130.0 && dia < 90.0 {
            BloodPressureBand::Normal
        } else if sys < 140.0 || dia < 100.0 {
            BloodPressureBand::Stage1High
        } else if sys < 180.0 || dia < 120.0 {
            BloodPressureBand::Stage2High
        } else {
            BloodPressureBand::Crisis
        }
    }

    pub fn status(&self) -> VitalStatus {
        match self {
            BloodPressureBand::Low => VitalStatus::new("Low (Hypotension)", Severity::Info),
            BloodPressureBand::Optimal => VitalStatus::new("Optimal", Severity::Good),
            BloodPressureBand::Normal => VitalStatus::new("Normal", Severity::Good),
            BloodPressureBand::Stage1High => VitalStatus::new("Stage 1 High", Severity::Caution),
            BloodPressureBand::Stage2High => VitalStatus::new("Stage 2 High", Severity::Warning),
            BloodPressureBand::Crisis => VitalStatus::new("Crisis (Very High)", Severity::Danger),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseI,
    ObeseII,
    ObeseIII,
}

impl BmiBand {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiBand::SeverelyUnderweight
        } else if bmi < 18.5 {
            BmiBand::Underweight
        } else if bmi < 25.0 {
            BmiBand::Normal
        } else if bmi < 30.0 {
            BmiBand::Overweight
        } else if bmi < 35.0 {
            BmiBand::ObeseI
        } else if bmi < 40.0 {
            BmiBand::ObeseII
        } else {
            BmiBand::ObeseIII
        }
    }

    pub fn status(&self) -> VitalStatus {
        match self {
            BmiBand::SeverelyUnderweight => VitalStatus::new("Severely Underweight", Severity::Danger),
            BmiBand::Underweight => VitalStatus::new("Underweight", Severity::Info),
            BmiBand::Normal => VitalStatus::new("Normal", Severity::Good),
            BmiBand::Overweight => VitalStatus::new("Overweight", Severity::Caution),
            BmiBand::ObeseI => VitalStatus::new("Obese Class I", Severity::Warning),
            BmiBand::ObeseII => VitalStatus::new("Obese Class II", Severity::Danger),
            BmiBand::ObeseIII => VitalStatus::new("Obese Class III", Severity::Critical),
        }
    }
}

/// Heart rate status, or unset.
pub fn classify_heart_rate(bpm: Option<f64>) -> VitalStatus {
    bpm.map(|v| HeartRateBand::classify(v).status())
        .unwrap_or_else(VitalStatus::unset)
}

/// Blood pressure status, or unset.
pub fn classify_blood_pressure(bp: Option<BloodPressure>) -> VitalStatus {
    bp.map(|v| BloodPressureBand::classify(v).status())
        .unwrap_or_else(VitalStatus::unset)
}

/// BMI status, or unset.
pub fn classify_bmi(bmi: Option<f64>) -> VitalStatus {
    bmi.map(|v| BmiBand::classify(v).status())
        .unwrap_or_else(VitalStatus::unset)
}

/// Classify a single reading.
pub fn classify_vital(reading: &VitalReading) -> VitalStatus {
    match *reading {
        VitalReading::HeartRate { bpm } => classify_heart_rate(Some(bpm)),
        VitalReading::BloodPressure {
            systolic_mmhg,
            diastolic_mmhg,
        } => classify_blood_pressure(Some(BloodPressure::new(systolic_mmhg, diastolic_mmhg))),
        VitalReading::Body {
            weight_kg,
            height_cm,
        } => classify_bmi(Some(crate::models::calculate_bmi(weight_kg, height_cm))),
    }
}

/// Status of every vital slot in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitalSummary {
    pub heart_rate: VitalStatus,
    pub blood_pressure: VitalStatus,
    pub bmi: VitalStatus,
}

impl VitalSummary {
    pub fn of(snapshot: &VitalSnapshot) -> Self {
        Self {
            heart_rate: classify_heart_rate(snapshot.heart_rate_bpm),
            blood_pressure: classify_blood_pressure(snapshot.blood_pressure),
            bmi: classify_bmi(snapshot.bmi()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_heart_rate_boundaries() {
        assert_eq!(HeartRateBand::classify(49.0), HeartRateBand::Bradycardia);
        assert_eq!(HeartRateBand::classify(50.0), HeartRateBand::Normal);
        assert_eq!(HeartRateBand::classify(100.0), HeartRateBand::Normal);
        assert_eq!(HeartRateBand::classify(101.0), HeartRateBand::Elevated);
        assert_eq!(HeartRateBand::classify(120.0), HeartRateBand::Elevated);
        assert_eq!(HeartRateBand::classify(121.0), HeartRateBand::Tachycardia);
    }

    #[test]
    fn test_blood_pressure_priority_order() {
        let band = |s, d| BloodPressureBand::classify(BloodPressure::new(s, d));

        // Low wins over everything, even with a high systolic
        assert_eq!(band(150.0, 55.0), BloodPressureBand::Low);
        assert_eq!(band(85.0, 70.0), BloodPressureBand::Low);
        assert_eq!(band(115.0, 75.0), BloodPressureBand::Optimal);
        assert_eq!(band(120.0, 79.0), BloodPressureBand::Normal);
        assert_eq!(band(125.0, 85.0), BloodPressureBand::Normal);
        assert_eq!(band(150.0, 95.0), BloodPressureBand::Stage1High);
        assert_eq!(band(135.0, 110.0), BloodPressureBand::Stage1High);
        assert_eq!(band(150.0, 105.0), BloodPressureBand::Stage2High);
        assert_eq!(band(185.0, 110.0), BloodPressureBand::Stage2High);
        assert_eq!(band(180.0, 120.0), BloodPressureBand::Crisis);
    }

    #[test]
    fn test_bmi_boundaries() {
        assert_eq!(BmiBand::classify(15.9), BmiBand::SeverelyUnderweight);
        assert_eq!(BmiBand::classify(16.0), BmiBand::Underweight);
        assert_eq!(BmiBand::classify(18.5), BmiBand::Normal);
        assert_eq!(BmiBand::classify(25.0), BmiBand::Overweight);
        assert_eq!(BmiBand::classify(30.0), BmiBand::ObeseI);
        assert_eq!(BmiBand::classify(35.0), BmiBand::ObeseII);
        assert_eq!(BmiBand::classify(40.0), BmiBand::ObeseIII);
    }

    #[test]
    fn test_unset_status() {
        let status = classify_heart_rate(None);
        assert!(status.is_unset());
        assert_eq!(status.severity.color(), "muted");
        assert!(classify_blood_pressure(None).is_unset());
        assert!(classify_bmi(None).is_unset());
    }

    #[test]
    fn test_classify_body_reading_uses_bmi() {
        let status = classify_vital(&VitalReading::Body {
            weight_kg: 100.0,
            height_cm: 150.0,
        });
        // 44.4
        assert_eq!(status.label, "Obese Class III");
    }

    #[test]
    fn test_summary_of_partial_snapshot() {
        let snapshot = VitalSnapshot::new().with(VitalReading::HeartRate { bpm: 130.0 });
        let summary = VitalSummary::of(&snapshot);
        assert_eq!(summary.heart_rate.label, "Tachycardia (High)");
        assert!(summary.blood_pressure.is_unset());
        assert!(summary.bmi.is_unset());
    }

    proptest! {
        #[test]
        fn heart_rate_normal_iff_in_range(bpm in 0u32..300) {
            let band = HeartRateBand::classify(bpm as f64);
            prop_assert_eq!(band == HeartRateBand::Normal, (50..=100).contains(&bpm));
        }
    }
}
