//! Health Risk Core Library
//!
//! Local-first health risk scoring and care recommendation engine.
//!
//! # Architecture
//!
//! ```text
//! Profile ──────────────┬──────────────────────────────► Care Recommendation
//!                       │                                 (age group × gender)
//! Vitals → Validation → │ → Classification (status labels)
//!                       │
//!                       └─► Risk Scoring ──► Specialist Matching
//!                               │
//!                   [STORE: risk_{user} + input fingerprint]
//!                               │
//!                     input change → Stale → refresh
//! ```
//!
//! # Core Principle
//!
//! **A stale assessment is never shown as current.** Any change to the scoring
//! inputs invalidates the stored assessment until it is recomputed.
//!
//! # Modules
//!
//! - [`models`]: Domain types (UserProfile, VitalSnapshot, RiskAssessment, etc.)
//! - [`engine`]: Classifier, scoring, care recommender and doctor matcher
//! - [`catalog`]: Versioned care and specialist data tables
//! - [`validation`]: Physiological bounds for readings and profiles
//! - [`store`]: Key-value persistence (SQLite or in-memory)
//! - [`dashboard`]: Per-user session with assessment lifecycle
//! - [`config`]: Engine configuration

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use catalog::{CareCatalog, SpecialistCatalog};
pub use config::EngineConfig;
pub use dashboard::PatientDashboard;
pub use engine::{HealthEngine, VitalStatus, VitalSummary};
pub use models::{
    AssessmentState, CareProfile, Gender, RiskAssessment, RiskFactor, RiskLevel,
    SpecialistEntry, StoredAssessment, UserProfile, VitalReading, VitalSnapshot,
};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HealthRiskError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<store::StoreError> for HealthRiskError {
    fn from(e: store::StoreError) -> Self {
        HealthRiskError::StorageError(e.to_string())
    }
}

impl From<validation::ValidationError> for HealthRiskError {
    fn from(e: validation::ValidationError) -> Self {
        HealthRiskError::InvalidInput(e.to_string())
    }
}

impl From<catalog::CatalogError> for HealthRiskError {
    fn from(e: catalog::CatalogError) -> Self {
        HealthRiskError::ConfigurationError(e.to_string())
    }
}

impl From<config::ConfigError> for HealthRiskError {
    fn from(e: config::ConfigError) -> Self {
        HealthRiskError::ConfigurationError(e.to_string())
    }
}

impl From<dashboard::DashboardError> for HealthRiskError {
    fn from(e: dashboard::DashboardError) -> Self {
        match e {
            dashboard::DashboardError::Validation(e) => e.into(),
            dashboard::DashboardError::Store(e) => e.into(),
            dashboard::DashboardError::Json(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for HealthRiskError {
    fn from(e: serde_json::Error) -> Self {
        HealthRiskError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for HealthRiskError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        HealthRiskError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

fn engine_from_json(config_json: Option<String>) -> Result<HealthEngine, HealthRiskError> {
    let config = match config_json {
        Some(json) => EngineConfig::from_json(&json)?,
        None => EngineConfig::default(),
    };
    Ok(HealthEngine::from_config(config)?)
}

/// Open or create a user's dashboard at the given path.
///
/// `config_json` overrides the default engine configuration.
#[uniffi::export]
pub fn open_dashboard(
    path: String,
    user_id: String,
    config_json: Option<String>,
) -> Result<Arc<HealthRiskCore>, HealthRiskError> {
    let store = SqliteStore::open(&path)?;
    let dashboard = PatientDashboard::load(store, &user_id, engine_from_json(config_json)?)?;
    Ok(Arc::new(HealthRiskCore {
        dashboard: Mutex::new(dashboard),
    }))
}

/// Create an in-memory dashboard (for testing).
#[uniffi::export]
pub fn open_dashboard_in_memory(user_id: String) -> Result<Arc<HealthRiskCore>, HealthRiskError> {
    let store = SqliteStore::open_in_memory()?;
    let dashboard = PatientDashboard::load(store, &user_id, HealthEngine::default())?;
    Ok(Arc::new(HealthRiskCore {
        dashboard: Mutex::new(dashboard),
    }))
}

/// Score a complete input set without touching storage.
#[uniffi::export]
pub fn score_snapshot(
    age_years: u32,
    gender: String,
    heart_rate_bpm: f64,
    systolic_mmhg: f64,
    diastolic_mmhg: f64,
    weight_kg: f64,
    height_cm: f64,
) -> Result<FfiRiskScore, HealthRiskError> {
    let profile = UserProfile::new(age_years, parse_gender(&gender)?);
    validation::validate_profile(&profile)?;

    let readings = [
        VitalReading::HeartRate { bpm: heart_rate_bpm },
        VitalReading::BloodPressure {
            systolic_mmhg,
            diastolic_mmhg,
        },
        VitalReading::Body {
            weight_kg,
            height_cm,
        },
    ];
    let mut vitals = VitalSnapshot::new();
    for reading in readings {
        validation::validate_reading(&reading)?;
        vitals.record(reading);
    }

    engine::score_risk(Some(&profile), &vitals)
        .map(FfiRiskScore::from)
        .ok_or_else(|| HealthRiskError::InvalidInput("incomplete inputs".into()))
}

fn parse_gender(value: &str) -> Result<Gender, HealthRiskError> {
    Gender::parse(value)
        .ok_or_else(|| HealthRiskError::InvalidInput(format!("unknown gender: {}", value)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe dashboard wrapper for FFI.
#[derive(uniffi::Object)]
pub struct HealthRiskCore {
    dashboard: Mutex<PatientDashboard<SqliteStore>>,
}

#[uniffi::export]
impl HealthRiskCore {
    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// Replace the user's profile.
    pub fn update_profile(
        &self,
        age_years: u32,
        gender: String,
        height_cm: Option<f64>,
    ) -> Result<(), HealthRiskError> {
        let mut dashboard = self.dashboard.lock()?;
        let profile = UserProfile {
            age_years,
            gender: parse_gender(&gender)?,
            height_cm,
        };
        dashboard.update_profile(profile)?;
        Ok(())
    }

    /// Get the user's profile.
    pub fn get_profile(&self) -> Result<Option<FfiProfile>, HealthRiskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.profile().map(FfiProfile::from))
    }

    // =========================================================================
    // Vital Operations
    // =========================================================================

    /// Record a heart rate reading.
    pub fn record_heart_rate(&self, bpm: f64) -> Result<FfiVitalStatus, HealthRiskError> {
        let mut dashboard = self.dashboard.lock()?;
        let status = dashboard.record_vital(VitalReading::HeartRate { bpm })?;
        Ok(status.into())
    }

    /// Record a blood pressure reading.
    pub fn record_blood_pressure(
        &self,
        systolic_mmhg: f64,
        diastolic_mmhg: f64,
    ) -> Result<FfiVitalStatus, HealthRiskError> {
        let mut dashboard = self.dashboard.lock()?;
        let status = dashboard.record_vital(VitalReading::BloodPressure {
            systolic_mmhg,
            diastolic_mmhg,
        })?;
        Ok(status.into())
    }

    /// Record weight and height. The BMI is derived.
    pub fn record_body_measurement(
        &self,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<FfiVitalStatus, HealthRiskError> {
        let mut dashboard = self.dashboard.lock()?;
        let status = dashboard.record_vital(VitalReading::Body {
            weight_kg,
            height_cm,
        })?;
        Ok(status.into())
    }

    /// Status labels for all vitals.
    pub fn get_vital_summary(&self) -> Result<FfiVitalSummary, HealthRiskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.vital_summary().into())
    }

    // =========================================================================
    // Assessment Operations
    // =========================================================================

    /// Recompute the assessment. `None` while inputs are incomplete.
    pub fn refresh_assessment(&self) -> Result<Option<FfiRiskAssessment>, HealthRiskError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.refresh()?;
        Ok(dashboard.state().current().map(FfiRiskAssessment::from))
    }

    /// The current assessment; `None` when unassessed or stale.
    pub fn get_assessment(&self) -> Result<Option<FfiRiskAssessment>, HealthRiskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.state().current().map(FfiRiskAssessment::from))
    }

    /// Where the assessment is in its lifecycle.
    pub fn get_assessment_status(&self) -> Result<FfiAssessmentStatus, HealthRiskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.state().into())
    }

    /// Specialists for the current assessment.
    pub fn get_recommended_doctors(&self) -> Result<Vec<FfiSpecialist>, HealthRiskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard
            .recommended_doctors()
            .into_iter()
            .map(|s| s.into())
            .collect())
    }

    // =========================================================================
    // Care Operations
    // =========================================================================

    /// Care profile for the user's age and gender.
    pub fn get_care_profile(&self) -> Result<Option<FfiCareProfile>, HealthRiskError> {
        let dashboard = self.dashboard.lock()?;
        let Some(profile) = dashboard.care_profile() else {
            return Ok(None);
        };
        let vaccines = dashboard
            .vaccines()
            .statuses(&profile)
            .into_iter()
            .map(|s| s.into())
            .collect();
        Ok(Some(FfiCareProfile {
            age_group_label: profile.age_group_label,
            vaccines,
            healthcare_measures: profile
                .healthcare_measures
                .into_iter()
                .map(|m| FfiCareItem {
                    category: m.category,
                    items: m.measures,
                    priority: m.priority.as_str().to_string(),
                })
                .collect(),
            medication_advice: profile
                .medication_advice
                .into_iter()
                .map(|m| FfiCareItem {
                    category: m.category,
                    items: m.advice,
                    priority: m.priority.as_str().to_string(),
                })
                .collect(),
        }))
    }

    /// Flip a vaccine's completion. Returns the new state.
    pub fn toggle_vaccine(&self, name: String) -> Result<bool, HealthRiskError> {
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.toggle_vaccine(&name)?)
    }

    /// Completed over recommended vaccines.
    pub fn get_vaccine_progress(&self) -> Result<Option<FfiVaccineProgress>, HealthRiskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.vaccine_progress().map(|p| FfiVaccineProgress {
            completed: p.completed as u32,
            total: p.total as u32,
        }))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProfile {
    pub age_years: u32,
    pub gender: String,
    pub height_cm: Option<f64>,
}

impl From<&UserProfile> for FfiProfile {
    fn from(profile: &UserProfile) -> Self {
        Self {
            age_years: profile.age_years,
            gender: profile.gender.as_str().to_string(),
            height_cm: profile.height_cm,
        }
    }
}

/// FFI-safe vital status.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVitalStatus {
    pub label: String,
    pub severity: String,
    pub color: String,
}

impl From<VitalStatus> for FfiVitalStatus {
    fn from(status: VitalStatus) -> Self {
        Self {
            severity: status.severity.as_str().to_string(),
            color: status.severity.color().to_string(),
            label: status.label,
        }
    }
}

/// FFI-safe vital summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVitalSummary {
    pub heart_rate: FfiVitalStatus,
    pub blood_pressure: FfiVitalStatus,
    pub bmi: FfiVitalStatus,
}

impl From<VitalSummary> for FfiVitalSummary {
    fn from(summary: VitalSummary) -> Self {
        Self {
            heart_rate: summary.heart_rate.into(),
            blood_pressure: summary.blood_pressure.into(),
            bmi: summary.bmi.into(),
        }
    }
}

/// FFI-safe risk factor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRiskFactor {
    pub factor: String,
    pub score: u32,
    pub description: String,
}

impl From<&RiskFactor> for FfiRiskFactor {
    fn from(factor: &RiskFactor) -> Self {
        Self {
            factor: factor.factor.clone(),
            score: factor.score,
            description: factor.description.clone(),
        }
    }
}

/// FFI-safe score without lifecycle metadata.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRiskScore {
    pub risk_score: u32,
    pub level_label: String,
    pub level_description: String,
    pub level_color: String,
    pub factors: Vec<FfiRiskFactor>,
    pub recommendations: Vec<String>,
}

impl From<RiskAssessment> for FfiRiskScore {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            risk_score: assessment.risk_score,
            level_color: assessment.risk_level.level.color().to_string(),
            level_label: assessment.risk_level.label,
            level_description: assessment.risk_level.description,
            factors: assessment.factors.iter().map(FfiRiskFactor::from).collect(),
            recommendations: assessment.recommendations,
        }
    }
}

/// FFI-safe stored assessment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRiskAssessment {
    pub assessment_id: String,
    pub assessed_at: String,
    pub score: FfiRiskScore,
}

impl From<&StoredAssessment> for FfiRiskAssessment {
    fn from(stored: &StoredAssessment) -> Self {
        Self {
            assessment_id: stored.assessment_id.clone(),
            assessed_at: stored.assessed_at.clone(),
            score: stored.assessment.clone().into(),
        }
    }
}

/// FFI-safe assessment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiAssessmentStatus {
    Unassessed,
    Assessed,
    Stale,
}

impl From<&AssessmentState> for FfiAssessmentStatus {
    fn from(state: &AssessmentState) -> Self {
        match state {
            AssessmentState::Unassessed => FfiAssessmentStatus::Unassessed,
            AssessmentState::Assessed(_) => FfiAssessmentStatus::Assessed,
            AssessmentState::Stale(_) => FfiAssessmentStatus::Stale,
        }
    }
}

/// FFI-safe specialist recommendation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSpecialist {
    pub id: String,
    pub specialty: String,
    pub doctor_name: String,
    pub hospital: String,
    pub experience_years: u32,
    pub rating: f64,
    pub consultation_fee: u32,
    pub available_slots: u32,
    pub is_online: bool,
    pub reason: String,
}

impl From<SpecialistEntry> for FfiSpecialist {
    fn from(entry: SpecialistEntry) -> Self {
        Self {
            id: entry.id,
            specialty: entry.specialty,
            doctor_name: entry.doctor_name,
            hospital: entry.hospital,
            experience_years: entry.experience_years,
            rating: entry.rating,
            consultation_fee: entry.consultation_fee,
            available_slots: entry.available_slots,
            is_online: entry.is_online,
            reason: entry.reason,
        }
    }
}

/// FFI-safe vaccine with completion flag.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVaccine {
    pub name: String,
    pub description: String,
    pub age_range: String,
    pub priority: String,
    pub schedule: String,
    pub completed: bool,
}

impl From<dashboard::VaccineStatus> for FfiVaccine {
    fn from(status: dashboard::VaccineStatus) -> Self {
        let vaccine = status.vaccine;
        Self {
            priority: vaccine.priority.as_str().to_string(),
            name: vaccine.name,
            description: vaccine.description,
            age_range: vaccine.age_range,
            schedule: vaccine.schedule,
            completed: status.completed,
        }
    }
}

/// FFI-safe healthcare measure or medication advice group.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCareItem {
    pub category: String,
    pub items: Vec<String>,
    pub priority: String,
}

/// FFI-safe care profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCareProfile {
    pub age_group_label: String,
    pub vaccines: Vec<FfiVaccine>,
    pub healthcare_measures: Vec<FfiCareItem>,
    pub medication_advice: Vec<FfiCareItem>,
}

/// FFI-safe vaccine progress.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVaccineProgress {
    pub completed: u32,
    pub total: u32,
}
