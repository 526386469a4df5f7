//! Specialist catalog models.

use serde::{Deserialize, Serialize};

use super::{RiskDimension, RiskFactor};

/// When a specialist is recommended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SpecialistTrigger {
    /// Factor label contains this text (case-insensitive)
    FactorContains(String),
    /// Factor scores this dimension
    Dimension(RiskDimension),
}

impl SpecialistTrigger {
    /// Check whether a factor satisfies this trigger.
    pub fn matches(&self, factor: &RiskFactor) -> bool {
        match self {
            SpecialistTrigger::FactorContains(text) => factor
                .factor
                .to_lowercase()
                .contains(&text.to_lowercase()),
            SpecialistTrigger::Dimension(dimension) => factor.dimension == *dimension,
        }
    }
}

/// A single doctor/specialty entry in the specialist catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialistEntry {
    /// Stable identifier
    pub id: String,
    /// Specialty (e.g. "Cardiologist")
    pub specialty: String,
    /// Doctor name
    pub doctor_name: String,
    pub hospital: String,
    pub experience_years: u32,
    /// Rating out of 5
    pub rating: f64,
    pub consultation_fee: u32,
    pub available_slots: u32,
    pub is_online: bool,
    /// Reason shown to the patient when this entry is recommended
    pub reason: String,
    /// Triggers; an entry with no triggers is never matched by risk factors
    #[serde(default)]
    pub triggers: Vec<SpecialistTrigger>,
}

impl SpecialistEntry {
    /// Create an entry with required fields.
    pub fn new(id: String, specialty: String, doctor_name: String) -> Self {
        Self {
            id,
            specialty,
            doctor_name,
            hospital: String::new(),
            experience_years: 0,
            rating: 0.0,
            consultation_fee: 0,
            available_slots: 0,
            is_online: false,
            reason: String::new(),
            triggers: Vec::new(),
        }
    }

    /// Builder-style trigger addition.
    pub fn with_trigger(mut self, trigger: SpecialistTrigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Whether any trigger matches any of the given factors.
    pub fn is_triggered_by<'a, I>(&self, factors: I) -> bool
    where
        I: IntoIterator<Item = &'a RiskFactor>,
    {
        factors
            .into_iter()
            .any(|factor| self.triggers.iter().any(|t| t.matches(factor)))
    }
}
