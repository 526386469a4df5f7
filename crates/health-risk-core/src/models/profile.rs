//! User profile models.

use serde::{Deserialize, Serialize};

/// Self-reported gender used for care recommendations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a gender string (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    /// Wire name of this gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// The care catalog branch this gender selects.
    ///
    /// Only the female branch carries sex-specific content of its own; male and
    /// other both select the default branch.
    pub fn care_branch(&self) -> CareBranch {
        match self {
            Gender::Female => CareBranch::FemaleSpecific,
            Gender::Male | Gender::Other => CareBranch::DefaultSpecific,
        }
    }
}

/// Branch of a gender-sensitive care catalog entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CareBranch {
    FemaleSpecific,
    DefaultSpecific,
}

/// Demographic profile required before scoring or recommendations can run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in whole years (1..=120)
    pub age_years: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters, filled in by profile edits or body measurements
    pub height_cm: Option<f64>,
}

impl UserProfile {
    /// Create a profile without a recorded height.
    pub fn new(age_years: u32, gender: Gender) -> Self {
        Self {
            age_years,
            gender,
            height_cm: None,
        }
    }

    /// Builder-style height setter.
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }
}
