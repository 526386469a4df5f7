//! Health risk engine.
//!
//! Pipeline: Vitals + Profile → Classification → Risk Scoring → Specialist Matching,
//! with care recommendations keyed independently on age and gender.

mod care;
mod classifier;
mod fingerprint;
mod matcher;
mod scoring;

pub use care::*;
pub use classifier::*;
pub use fingerprint::*;
pub use matcher::*;
pub use scoring::*;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::catalog::{CareCatalog, SpecialistCatalog};
use crate::config::{ConfigResult, EngineConfig};
use crate::models::{CareProfile, Gender, RiskAssessment, SpecialistEntry, UserProfile, VitalSnapshot};

pub(crate) fn default_care_catalog() -> &'static CareCatalog {
    static CATALOG: OnceLock<CareCatalog> = OnceLock::new();
    CATALOG.get_or_init(CareCatalog::default)
}

/// Everything the engine derives from one profile/vitals snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub vitals: VitalSummary,
    pub assessment: Option<RiskAssessment>,
    pub care: Option<CareProfile>,
    pub doctors: Vec<SpecialistEntry>,
}

/// Engine that owns its catalogs and configuration.
#[derive(Debug, Clone)]
pub struct HealthEngine {
    care_catalog: CareCatalog,
    specialist_catalog: SpecialistCatalog,
    config: EngineConfig,
}

impl Default for HealthEngine {
    fn default() -> Self {
        Self::new(
            CareCatalog::default(),
            SpecialistCatalog::default(),
            EngineConfig::default(),
        )
    }
}

impl HealthEngine {
    /// Create an engine from explicit catalogs.
    pub fn new(
        care_catalog: CareCatalog,
        specialist_catalog: SpecialistCatalog,
        config: EngineConfig,
    ) -> Self {
        Self {
            care_catalog,
            specialist_catalog,
            config,
        }
    }

    /// Create an engine, loading any catalogs the config points at.
    pub fn from_config(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        let care_catalog = match &config.care_catalog_path {
            Some(path) => CareCatalog::from_path(path)?,
            None => CareCatalog::default(),
        };
        let specialist_catalog = match &config.specialist_catalog_path {
            Some(path) => SpecialistCatalog::from_path(path)?,
            None => SpecialistCatalog::default(),
        };
        Ok(Self::new(care_catalog, specialist_catalog, config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn care_catalog(&self) -> &CareCatalog {
        &self.care_catalog
    }

    pub fn specialist_catalog(&self) -> &SpecialistCatalog {
        &self.specialist_catalog
    }

    /// Score a profile and vitals; `None` when any input is missing.
    pub fn score(&self, profile: Option<&UserProfile>, vitals: &VitalSnapshot) -> Option<RiskAssessment> {
        score_risk(profile, vitals)
    }

    /// Care profile for an age and gender.
    pub fn recommend_care(&self, age_years: u32, gender: Gender) -> CareProfile {
        CareRecommender::new(&self.care_catalog).recommend(age_years, gender)
    }

    /// Specialist recommendations for an assessment.
    pub fn match_doctors(&self, assessment: &RiskAssessment) -> Vec<SpecialistEntry> {
        DoctorMatcher::new(&self.specialist_catalog)
            .with_threshold(self.config.high_risk_threshold)
            .match_doctors(assessment, self.config.max_doctor_results)
    }

    /// Run the full pipeline over one snapshot.
    pub fn evaluate(&self, profile: Option<&UserProfile>, vitals: &VitalSnapshot) -> Evaluation {
        let assessment = self.score(profile, vitals);
        let doctors = assessment
            .as_ref()
            .map(|a| self.match_doctors(a))
            .unwrap_or_default();
        Evaluation {
            vitals: VitalSummary::of(vitals),
            care: profile.map(|p| self.recommend_care(p.age_years, p.gender)),
            assessment,
            doctors,
        }
    }
}
