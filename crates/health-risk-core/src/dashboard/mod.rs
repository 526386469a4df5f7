//! Patient dashboard session.
//!
//! Holds one user's profile, vitals and completed vaccines, persists them
//! through a [`KeyValueStore`], and owns the assessment lifecycle:
//!
//! ```text
//! Unassessed ──refresh──► Assessed ──input change──► Stale ──refresh──► Assessed
//! ```
//!
//! A stale assessment is never reported as current.

mod vaccines;

pub use vaccines::*;

use log::{info, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::engine::{
    assess, classify_vital, fingerprint_inputs, HealthEngine, RiskInputs, VitalStatus,
    VitalSummary,
};
use crate::models::{
    AssessmentState, CareProfile, RiskAssessment, SpecialistEntry, StoredAssessment, UserProfile,
    VaccineProgress, VitalReading, VitalSnapshot,
};
use crate::store::{KeyValueStore, KeyValueStoreExt, StoreError, StoreKey};
use crate::validation::{validate_profile, validate_reading, ValidationError};

/// Dashboard errors.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// One user's dashboard state.
pub struct PatientDashboard<S: KeyValueStore> {
    store: S,
    user_id: String,
    engine: HealthEngine,
    profile: Option<UserProfile>,
    vitals: VitalSnapshot,
    vaccines: VaccinationTracker,
    state: AssessmentState,
}

impl<S: KeyValueStore> PatientDashboard<S> {
    /// Load a user's dashboard from the store.
    ///
    /// A persisted assessment whose inputs no longer match the persisted
    /// profile and vitals is loaded as stale.
    pub fn load(store: S, user_id: &str, engine: HealthEngine) -> DashboardResult<Self> {
        let profile = load_or_discard::<UserProfile, _>(&store, StoreKey::Profile, user_id)?
            .and_then(|profile| match validate_profile(&profile) {
                Ok(()) => Some(profile),
                Err(e) => {
                    warn!("Discarding invalid profile for {}: {}", user_id, e);
                    None
                }
            });
        let vitals = load_or_discard::<VitalSnapshot, _>(&store, StoreKey::Vitals, user_id)?
            .unwrap_or_default();
        let vaccines = load_or_discard::<VaccinationTracker, _>(&store, StoreKey::Vaccines, user_id)?
            .unwrap_or_default();
        let saved = load_or_discard::<StoredAssessment, _>(&store, StoreKey::Risk, user_id)?;

        let mut dashboard = Self {
            store,
            user_id: user_id.to_string(),
            engine,
            profile,
            vitals,
            vaccines,
            state: AssessmentState::Unassessed,
        };

        if let Some(stored) = saved {
            let fingerprint = dashboard.current_fingerprint()?;
            dashboard.state = match fingerprint {
                Some(fp) if stored.matches(&fp) => AssessmentState::Assessed(stored),
                _ => {
                    info!("Loaded assessment for {} is stale", dashboard.user_id);
                    AssessmentState::Stale(stored)
                }
            };
        }

        if dashboard.engine.config().auto_refresh && dashboard.state.current().is_none() {
            dashboard.refresh()?;
        }

        Ok(dashboard)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn vitals(&self) -> &VitalSnapshot {
        &self.vitals
    }

    pub fn engine(&self) -> &HealthEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// The current assessment; `None` when unassessed or stale.
    pub fn assessment(&self) -> Option<&RiskAssessment> {
        self.state.current().map(|s| &s.assessment)
    }

    /// Record a validated vital reading, superseding the previous one.
    ///
    /// The assessment is marked stale before anything is written, so a failed
    /// write can never leave it reported as current.
    pub fn record_vital(&mut self, reading: VitalReading) -> DashboardResult<VitalStatus> {
        validate_reading(&reading)?;

        let mut vitals = self.vitals.clone();
        vitals.record(reading);

        // Body measurements carry the current height.
        let profile = match (reading, &self.profile) {
            (VitalReading::Body { height_cm, .. }, Some(current))
                if current.height_cm != Some(height_cm) =>
            {
                Some(current.clone().with_height(height_cm))
            }
            _ => None,
        };

        self.mark_stale();

        self.store
            .set_json(&StoreKey::Vitals.for_user(&self.user_id), &vitals)?;
        self.vitals = vitals;

        if let Some(profile) = profile {
            self.store
                .set_json(&StoreKey::Profile.for_user(&self.user_id), &profile)?;
            self.profile = Some(profile);
        }

        self.inputs_changed()?;
        Ok(classify_vital(&reading))
    }

    /// Replace the profile.
    pub fn update_profile(&mut self, profile: UserProfile) -> DashboardResult<()> {
        validate_profile(&profile)?;
        self.mark_stale();
        self.store
            .set_json(&StoreKey::Profile.for_user(&self.user_id), &profile)?;
        self.profile = Some(profile);
        self.inputs_changed()
    }

    /// Recompute the assessment from the current inputs.
    ///
    /// Returns `None` and leaves the state untouched when inputs are incomplete.
    pub fn refresh(&mut self) -> DashboardResult<Option<&RiskAssessment>> {
        let Some(inputs) = self.current_inputs() else {
            return Ok(None);
        };

        let stored = StoredAssessment::new(assess(&inputs), fingerprint_inputs(&inputs)?);
        self.store
            .set_json(&StoreKey::Risk.for_user(&self.user_id), &stored)?;
        info!(
            "Stored assessment {} for {} (score {})",
            stored.assessment_id, self.user_id, stored.assessment.risk_score
        );

        self.state = AssessmentState::Assessed(stored);
        Ok(self.assessment())
    }

    /// Care profile for the current age and gender.
    pub fn care_profile(&self) -> Option<CareProfile> {
        self.profile
            .as_ref()
            .map(|p| self.engine.recommend_care(p.age_years, p.gender))
    }

    /// Specialist recommendations for the current assessment.
    pub fn recommended_doctors(&self) -> Vec<SpecialistEntry> {
        self.assessment()
            .map(|a| self.engine.match_doctors(a))
            .unwrap_or_default()
    }

    /// Status labels for every vital slot.
    pub fn vital_summary(&self) -> VitalSummary {
        VitalSummary::of(&self.vitals)
    }

    /// Flip a vaccine's completion and persist it. Returns the new state.
    pub fn toggle_vaccine(&mut self, name: &str) -> DashboardResult<bool> {
        let completed = self.vaccines.toggle(name);
        self.store
            .set_json(&StoreKey::Vaccines.for_user(&self.user_id), &self.vaccines)?;
        Ok(completed)
    }

    pub fn vaccines(&self) -> &VaccinationTracker {
        &self.vaccines
    }

    /// Recommended vaccines with completion flags.
    pub fn vaccine_statuses(&self) -> Vec<VaccineStatus> {
        self.care_profile()
            .map(|p| self.vaccines.statuses(&p))
            .unwrap_or_default()
    }

    /// Completion progress over the recommended vaccines.
    pub fn vaccine_progress(&self) -> Option<VaccineProgress> {
        self.care_profile().map(|p| self.vaccines.progress(&p))
    }

    fn current_inputs(&self) -> Option<RiskInputs> {
        RiskInputs::gather(self.profile.as_ref(), &self.vitals)
    }

    fn current_fingerprint(&self) -> DashboardResult<Option<String>> {
        match self.current_inputs() {
            Some(inputs) => Ok(Some(fingerprint_inputs(&inputs)?)),
            None => Ok(None),
        }
    }

    fn mark_stale(&mut self) {
        let state = std::mem::replace(&mut self.state, AssessmentState::Unassessed);
        self.state = state.invalidate();
        if self.state.is_stale() {
            info!("Assessment for {} marked stale", self.user_id);
        }
    }

    /// Drop the persisted assessment after an input change.
    fn inputs_changed(&mut self) -> DashboardResult<()> {
        self.store.remove(&StoreKey::Risk.for_user(&self.user_id))?;

        if self.engine.config().auto_refresh {
            self.refresh()?;
        }
        Ok(())
    }
}

/// Read a persisted value, discarding it if it no longer deserializes.
fn load_or_discard<T, S>(store: &S, key: StoreKey, user_id: &str) -> DashboardResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let key = key.for_user(user_id);
    let Some(value) = store.get(&key)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!("Discarding unreadable {}: {}", key, e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::catalog::{CareCatalog, SpecialistCatalog};
    use crate::models::{Gender, RiskLevel};
    use crate::store::MemoryStore;
    use serde_json::json;
    use serde_json::Value;
    use std::cell::Cell;

    /// Memory store that refuses writes once its allowance runs out.
    #[derive(Default)]
    struct FailingWrites {
        inner: MemoryStore,
        writes_left: Cell<Option<usize>>,
    }

    impl FailingWrites {
        fn allow_writes(&self, count: usize) {
            self.writes_left.set(Some(count));
        }
    }

    impl KeyValueStore for FailingWrites {
        fn get(&self, key: &str) -> crate::store::StoreResult<Option<Value>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: Value) -> crate::store::StoreResult<()> {
            match self.writes_left.get() {
                Some(0) => return Err(StoreError::Poisoned("write refused".into())),
                Some(n) => self.writes_left.set(Some(n - 1)),
                None => {}
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> crate::store::StoreResult<bool> {
            self.inner.remove(key)
        }
    }

    fn dashboard() -> PatientDashboard<MemoryStore> {
        PatientDashboard::load(MemoryStore::new(), "u1", HealthEngine::default()).unwrap()
    }

    fn fill<S: KeyValueStore>(d: &mut PatientDashboard<S>) {
        d.update_profile(UserProfile::new(45, Gender::Male)).unwrap();
        d.record_vital(VitalReading::HeartRate { bpm: 72.0 }).unwrap();
        d.record_vital(VitalReading::BloodPressure {
            systolic_mmhg: 150.0,
            diastolic_mmhg: 95.0,
        })
        .unwrap();
        d.record_vital(VitalReading::Body {
            weight_kg: 80.0,
            height_cm: 175.0,
        })
        .unwrap();
    }

    #[test]
    fn test_unassessed_until_complete() {
        let mut d = dashboard();
        d.update_profile(UserProfile::new(45, Gender::Male)).unwrap();
        d.record_vital(VitalReading::HeartRate { bpm: 72.0 }).unwrap();

        assert!(d.refresh().unwrap().is_none());
        assert_eq!(d.state(), &AssessmentState::Unassessed);
        assert!(d.recommended_doctors().is_empty());
    }

    #[test]
    fn test_refresh_then_stale_then_refresh() {
        let mut d = dashboard();
        fill(&mut d);

        let score = d.refresh().unwrap().unwrap().risk_score;
        assert_eq!(score, 50);
        assert!(d.store().get("risk_u1").unwrap().is_some());

        d.record_vital(VitalReading::HeartRate { bpm: 130.0 }).unwrap();
        assert!(d.state().is_stale());
        assert!(d.assessment().is_none());
        assert!(d.store().get("risk_u1").unwrap().is_none());

        let refreshed = d.refresh().unwrap().unwrap();
        assert_eq!(refreshed.risk_score, 75);
        assert_eq!(refreshed.risk_level.level, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_invalid_reading_changes_nothing() {
        let mut d = dashboard();
        fill(&mut d);
        d.refresh().unwrap();

        let result = d.record_vital(VitalReading::HeartRate { bpm: 300.0 });
        assert!(matches!(result, Err(DashboardError::Validation(_))));
        assert_eq!(d.vitals().heart_rate_bpm, Some(72.0));
        assert!(d.assessment().is_some());
    }

    #[test]
    fn test_body_reading_updates_profile_height() {
        let mut d = dashboard();
        fill(&mut d);
        assert_eq!(d.profile().unwrap().height_cm, Some(175.0));

        let saved = d.store().get("profile_u1").unwrap().unwrap();
        assert_eq!(saved["height_cm"], json!(175.0));
    }

    #[test]
    fn test_auto_refresh() {
        let engine = HealthEngine::new(
            CareCatalog::default(),
            SpecialistCatalog::default(),
            EngineConfig {
                auto_refresh: true,
                ..EngineConfig::default()
            },
        );
        let mut d = PatientDashboard::load(MemoryStore::new(), "u1", engine).unwrap();
        fill(&mut d);
        assert_eq!(d.assessment().unwrap().risk_score, 50);

        d.update_profile(UserProfile::new(25, Gender::Male).with_height(175.0))
            .unwrap();
        // 5 + 0 + 25 + 10
        assert_eq!(d.assessment().unwrap().risk_score, 40);
    }

    #[test]
    fn test_reload_restores_assessment() {
        let store = MemoryStore::new();
        {
            let mut d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
            fill(&mut d);
            d.refresh().unwrap();
        }

        let d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
        assert_eq!(d.assessment().unwrap().risk_score, 50);
        assert_eq!(d.recommended_doctors().len(), 2);
    }

    #[test]
    fn test_reload_with_changed_inputs_is_stale() {
        let store = MemoryStore::new();
        {
            let mut d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
            fill(&mut d);
            d.refresh().unwrap();
        }

        // Another writer changed the vitals without clearing the assessment.
        let mut vitals: VitalSnapshot = store.get_json("vitals_u1").unwrap().unwrap();
        vitals.record(VitalReading::HeartRate { bpm: 55.0 });
        store.set_json("vitals_u1", &vitals).unwrap();

        let d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
        assert!(d.state().is_stale());
        assert!(d.assessment().is_none());
    }

    #[test]
    fn test_corrupt_entry_discarded() {
        let store = MemoryStore::new();
        store.set("profile_u1", json!({"age_years": "forty"})).unwrap();

        let d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
        assert!(d.profile().is_none());
    }

    #[test]
    fn test_vaccine_toggle_persists() {
        let store = MemoryStore::new();
        {
            let mut d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
            d.update_profile(UserProfile::new(70, Gender::Female)).unwrap();
            assert!(d.toggle_vaccine("COVID-19").unwrap());
        }

        let d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
        assert!(d.vaccines().is_completed("COVID-19"));
        let progress = d.vaccine_progress().unwrap();
        assert_eq!((progress.completed, progress.total), (1, 5));
    }

    #[test]
    fn test_failed_vitals_write_leaves_assessment_stale() {
        let store = FailingWrites::default();
        let mut d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
        fill(&mut d);
        assert_eq!(d.refresh().unwrap().unwrap().risk_score, 50);

        store.allow_writes(0);
        let result = d.record_vital(VitalReading::HeartRate { bpm: 130.0 });
        assert!(matches!(result, Err(DashboardError::Store(_))));
        assert!(d.state().is_stale());
        assert!(d.assessment().is_none());
        assert_eq!(d.vitals().heart_rate_bpm, Some(72.0));

        store.writes_left.set(None);
        d.record_vital(VitalReading::HeartRate { bpm: 130.0 }).unwrap();
        assert_eq!(d.refresh().unwrap().unwrap().risk_score, 75);
    }

    #[test]
    fn test_failed_profile_write_keeps_old_height() {
        let store = FailingWrites::default();
        let mut d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
        fill(&mut d);
        d.refresh().unwrap();

        // Vitals write succeeds, the profile height write does not.
        store.allow_writes(1);
        let result = d.record_vital(VitalReading::Body {
            weight_kg: 90.0,
            height_cm: 180.0,
        });
        assert!(matches!(result, Err(DashboardError::Store(_))));
        assert!(d.assessment().is_none());
        assert_eq!(d.vitals().body.unwrap().height_cm, 180.0);
        assert_eq!(d.profile().unwrap().height_cm, Some(175.0));
    }

    #[test]
    fn test_out_of_range_profile_discarded_on_load() {
        let store = MemoryStore::new();
        store
            .set(
                "profile_u1",
                json!({"age_years": 500, "gender": "male", "height_cm": null}),
            )
            .unwrap();

        let d = PatientDashboard::load(&store, "u1", HealthEngine::default()).unwrap();
        assert!(d.profile().is_none());
        assert!(d.care_profile().is_none());
    }
}
