//! Vaccine completion tracking.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{CareProfile, Vaccine, VaccineProgress};

/// Set of vaccine names the user has marked completed.
///
/// Owned by the user, independent of which care profile is current.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct VaccinationTracker {
    completed: BTreeSet<String>,
}

/// A recommended vaccine with the user's completion flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaccineStatus {
    pub vaccine: Vaccine,
    pub completed: bool,
}

impl VaccinationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a vaccine's completion. Returns the new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.completed.remove(name) {
            false
        } else {
            self.completed.insert(name.to_string());
            true
        }
    }

    pub fn is_completed(&self, name: &str) -> bool {
        self.completed.contains(name)
    }

    /// Progress over the vaccines recommended in a profile.
    ///
    /// Names completed for other brackets are not counted.
    pub fn progress(&self, profile: &CareProfile) -> VaccineProgress {
        VaccineProgress {
            completed: profile
                .vaccines
                .iter()
                .filter(|v| self.is_completed(&v.name))
                .count(),
            total: profile.vaccines.len(),
        }
    }

    /// Pair each recommended vaccine with its completion flag.
    pub fn statuses(&self, profile: &CareProfile) -> Vec<VaccineStatus> {
        profile
            .vaccines
            .iter()
            .map(|v| VaccineStatus {
                vaccine: v.clone(),
                completed: self.is_completed(&v.name),
            })
            .collect()
    }
}
