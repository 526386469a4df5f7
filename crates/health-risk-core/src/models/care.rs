//! Preventive care models.

use serde::{Deserialize, Serialize};

/// Age partitions, half-open and ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Infant,
    Child,
    Adolescent,
    YoungAdult,
    MiddleAged,
    Elderly,
}

impl AgeGroup {
    /// Every group in age order.
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Infant,
        AgeGroup::Child,
        AgeGroup::Adolescent,
        AgeGroup::YoungAdult,
        AgeGroup::MiddleAged,
        AgeGroup::Elderly,
    ];

    /// Select the partition for an age: [0,2) [2,12) [12,18) [18,40) [40,65) [65,∞).
    pub fn from_age(age_years: u32) -> Self {
        match age_years {
            0..=1 => AgeGroup::Infant,
            2..=11 => AgeGroup::Child,
            12..=17 => AgeGroup::Adolescent,
            18..=39 => AgeGroup::YoungAdult,
            40..=64 => AgeGroup::MiddleAged,
            _ => AgeGroup::Elderly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Infant => "Infant (0-2 years)",
            AgeGroup::Child => "Child (2-12 years)",
            AgeGroup::Adolescent => "Adolescent (12-18 years)",
            AgeGroup::YoungAdult => "Young Adult (18-40 years)",
            AgeGroup::MiddleAged => "Middle-aged Adult (40-65 years)",
            AgeGroup::Elderly => "Elderly (65+ years)",
        }
    }
}

/// Recommendation priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A recommended vaccine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vaccine {
    /// Vaccine name, also the key for completion tracking
    pub name: String,
    pub description: String,
    /// When to administer (e.g. "6, 10, 14 weeks")
    pub age_range: String,
    pub priority: Priority,
    /// Dosing schedule (e.g. "3 doses")
    pub schedule: String,
}

impl Vaccine {
    pub fn new(
        name: &str,
        description: &str,
        age_range: &str,
        priority: Priority,
        schedule: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            age_range: age_range.to_string(),
            priority,
            schedule: schedule.to_string(),
        }
    }
}

/// A group of healthcare measures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthcareMeasure {
    pub category: String,
    pub measures: Vec<String>,
    pub priority: Priority,
}

impl HealthcareMeasure {
    pub fn new(category: &str, measures: &[&str], priority: Priority) -> Self {
        Self {
            category: category.to_string(),
            measures: measures.iter().map(|m| m.to_string()).collect(),
            priority,
        }
    }
}

/// A group of medication advice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationAdvice {
    pub category: String,
    pub advice: Vec<String>,
    pub priority: Priority,
}

impl MedicationAdvice {
    pub fn new(category: &str, advice: &[&str], priority: Priority) -> Self {
        Self {
            category: category.to_string(),
            advice: advice.iter().map(|a| a.to_string()).collect(),
            priority,
        }
    }
}

/// The care bundle for one age/gender bracket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareProfile {
    pub age_group: AgeGroup,
    pub age_group_label: String,
    pub vaccines: Vec<Vaccine>,
    pub healthcare_measures: Vec<HealthcareMeasure>,
    pub medication_advice: Vec<MedicationAdvice>,
}

impl CareProfile {
    /// Whether any measure group has this category.
    pub fn has_measure_category(&self, category: &str) -> bool {
        self.healthcare_measures
            .iter()
            .any(|m| m.category == category)
    }

    /// Whether any measure mentions this text (case-insensitive).
    pub fn mentions_measure(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.healthcare_measures
            .iter()
            .flat_map(|m| m.measures.iter())
            .any(|m| m.to_lowercase().contains(&needle))
    }

    /// Look up a vaccine by name.
    pub fn vaccine(&self, name: &str) -> Option<&Vaccine> {
        self.vaccines.iter().find(|v| v.name == name)
    }
}

/// Completion progress over a care profile's vaccines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaccineProgress {
    pub completed: usize,
    pub total: usize,
}

impl VaccineProgress {
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::Infant);
        assert_eq!(AgeGroup::from_age(1), AgeGroup::Infant);
        assert_eq!(AgeGroup::from_age(2), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(11), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::Adolescent);
        assert_eq!(AgeGroup::from_age(17), AgeGroup::Adolescent);
        assert_eq!(AgeGroup::from_age(18), AgeGroup::YoungAdult);
        assert_eq!(AgeGroup::from_age(39), AgeGroup::YoungAdult);
        assert_eq!(AgeGroup::from_age(40), AgeGroup::MiddleAged);
        assert_eq!(AgeGroup::from_age(64), AgeGroup::MiddleAged);
        assert_eq!(AgeGroup::from_age(65), AgeGroup::Elderly);
        assert_eq!(AgeGroup::from_age(120), AgeGroup::Elderly);
    }

    #[test]
    fn test_all_is_age_ordered() {
        let mut sorted = AgeGroup::ALL;
        sorted.sort();
        assert_eq!(sorted, AgeGroup::ALL);
    }
}
