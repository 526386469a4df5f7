//! Risk assessment models.

use serde::{Deserialize, Serialize};

/// A scored dimension of the composite risk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    Age,
    HeartRate,
    BloodPressure,
    Bmi,
}

impl RiskDimension {
    /// Display label used as the factor name.
    pub fn label(&self) -> &'static str {
        match self {
            RiskDimension::Age => "Age Risk",
            RiskDimension::HeartRate => "Heart Rate",
            RiskDimension::BloodPressure => "Blood Pressure",
            RiskDimension::Bmi => "BMI",
        }
    }
}

/// One contribution to the composite score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskFactor {
    /// Factor label (e.g. "Blood Pressure")
    pub factor: String,
    /// Dimension this factor scores
    pub dimension: RiskDimension,
    /// Sub-score contributed to the total
    pub score: u32,
    /// Human-readable band description
    pub description: String,
}

impl RiskFactor {
    pub fn new(dimension: RiskDimension, score: u32, description: String) -> Self {
        Self {
            factor: dimension.label().to_string(),
            dimension,
            score,
            description,
        }
    }

    /// Whether this factor counts toward specialist matching.
    pub fn is_high_risk(&self, threshold: u32) -> bool {
        self.score > threshold
    }
}

/// Discrete risk level derived from the clamped score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Map a clamped score to its level: ≤20, ≤40, ≤60, above.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=20 => RiskLevel::Low,
            21..=40 => RiskLevel::Moderate,
            41..=60 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::VeryHigh => "Very High Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Your health metrics indicate low risk",
            RiskLevel::Moderate => "Some risk factors present",
            RiskLevel::High => "Multiple risk factors detected",
            RiskLevel::VeryHigh => "Significant health risks identified",
        }
    }

    /// Display color token.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Moderate => "yellow",
            RiskLevel::High => "orange",
            RiskLevel::VeryHigh => "red",
        }
    }
}

/// Risk level with its display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskLevelInfo {
    pub level: RiskLevel,
    pub label: String,
    pub description: String,
}

impl From<RiskLevel> for RiskLevelInfo {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            description: level.description().to_string(),
        }
    }
}

/// A complete risk assessment.
///
/// Only ever produced from a full input set; there is no partial assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Composite score clamped to 0..=100
    pub risk_score: u32,
    /// One factor per scored dimension, in scoring order
    pub factors: Vec<RiskFactor>,
    /// Lifestyle and monitoring recommendations
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevelInfo,
}

impl RiskAssessment {
    /// Sum of all factor scores before clamping.
    pub fn raw_total(&self) -> u32 {
        self.factors.iter().map(|f| f.score).sum()
    }

    /// Factors whose score exceeds the threshold.
    pub fn high_risk_factors(&self, threshold: u32) -> impl Iterator<Item = &RiskFactor> {
        self.factors.iter().filter(move |f| f.is_high_risk(threshold))
    }
}

/// An assessment as persisted, tied to the inputs it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredAssessment {
    /// Unique ID of this computation
    pub assessment_id: String,
    /// SHA-256 hex of the scoring inputs
    pub input_fingerprint: String,
    /// RFC 3339 timestamp
    pub assessed_at: String,
    pub assessment: RiskAssessment,
}

impl StoredAssessment {
    /// Wrap a freshly computed assessment.
    pub fn new(assessment: RiskAssessment, input_fingerprint: String) -> Self {
        Self {
            assessment_id: uuid::Uuid::new_v4().to_string(),
            input_fingerprint,
            assessed_at: chrono::Utc::now().to_rfc3339(),
            assessment,
        }
    }

    /// Whether this assessment was computed from inputs with this fingerprint.
    pub fn matches(&self, fingerprint: &str) -> bool {
        self.input_fingerprint == fingerprint
    }
}

/// Assessment lifecycle as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentState {
    /// Never assessed, or inputs incomplete
    Unassessed,
    /// Current with respect to the inputs
    Assessed(StoredAssessment),
    /// Inputs changed since this assessment was computed
    Stale(StoredAssessment),
}

impl AssessmentState {
    /// The assessment, only if current.
    pub fn current(&self) -> Option<&StoredAssessment> {
        match self {
            AssessmentState::Assessed(stored) => Some(stored),
            _ => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, AssessmentState::Stale(_))
    }

    /// Move an assessed state to stale. Other states are unchanged.
    pub fn invalidate(self) -> Self {
        match self {
            AssessmentState::Assessed(stored) => AssessmentState::Stale(stored),
            other => other,
        }
    }
}
