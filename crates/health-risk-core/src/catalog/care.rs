//! Age-bracket care catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_catalog_file, CatalogError, CatalogResult};
use crate::models::{AgeGroup, CareBranch, HealthcareMeasure, MedicationAdvice, Vaccine};

/// A list that is either shared by all genders or split by care branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gendered<T> {
    Shared(Vec<T>),
    ByBranch { female: Vec<T>, default: Vec<T> },
}

impl<T> Gendered<T> {
    /// Items for a care branch.
    pub fn select(&self, branch: CareBranch) -> &[T] {
        match self {
            Gendered::Shared(items) => items,
            Gendered::ByBranch { female, default } => match branch {
                CareBranch::FemaleSpecific => female,
                CareBranch::DefaultSpecific => default,
            },
        }
    }

    pub fn is_branched(&self) -> bool {
        matches!(self, Gendered::ByBranch { .. })
    }
}

/// Catalog entry for one age group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareBracket {
    pub group: AgeGroup,
    /// Display label (e.g. "Young Adult (18-40 years)")
    pub label: String,
    pub vaccines: Vec<Vaccine>,
    pub healthcare_measures: Gendered<HealthcareMeasure>,
    pub medication_advice: Gendered<MedicationAdvice>,
}

/// On-disk shape of a care catalog, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareCatalogFile {
    pub version: String,
    pub brackets: Vec<CareBracket>,
}

/// Validated care catalog: exactly one bracket per age group, in age order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "CareCatalogFile")]
pub struct CareCatalog {
    version: String,
    brackets: Vec<CareBracket>,
}

impl TryFrom<CareCatalogFile> for CareCatalog {
    type Error = CatalogError;

    fn try_from(file: CareCatalogFile) -> CatalogResult<Self> {
        CareCatalog::new(file.version, file.brackets)
    }
}

impl CareCatalog {
    /// Build a catalog, checking every age group is covered exactly once.
    pub fn new(version: String, mut brackets: Vec<CareBracket>) -> CatalogResult<Self> {
        brackets.sort_by_key(|b| b.group);

        let groups: Vec<AgeGroup> = brackets.iter().map(|b| b.group).collect();
        if groups != AgeGroup::ALL {
            return Err(CatalogError::Invalid(format!(
                "care catalog must define each age group exactly once, got {:?}",
                groups
            )));
        }

        if let Some(bracket) = brackets.iter().find(|b| b.label.trim().is_empty()) {
            return Err(CatalogError::Invalid(format!(
                "age group {:?} has an empty label",
                bracket.group
            )));
        }

        Ok(Self { version, brackets })
    }

    /// Assemble the built-in catalog. Brackets must already be in age order.
    pub(super) fn from_parts(version: String, brackets: Vec<CareBracket>) -> Self {
        Self { version, brackets }
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load and validate a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        Self::from_json(&read_catalog_file(path)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The bracket for an age group.
    pub fn bracket(&self, group: AgeGroup) -> &CareBracket {
        // Sorted and complete by construction.
        &self.brackets[group as usize]
    }

    pub fn brackets(&self) -> &[CareBracket] {
        &self.brackets
    }
}

impl Default for CareCatalog {
    fn default() -> Self {
        super::defaults::care_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn bracket(group: AgeGroup) -> CareBracket {
        CareBracket {
            group,
            label: group.label().to_string(),
            vaccines: vec![Vaccine::new("Flu", "Influenza", "Yearly", Priority::High, "Annual")],
            healthcare_measures: Gendered::Shared(Vec::new()),
            medication_advice: Gendered::Shared(Vec::new()),
        }
    }

    #[test]
    fn test_brackets_sorted_on_build() {
        let mut brackets: Vec<_> = AgeGroup::ALL.iter().map(|g| bracket(*g)).collect();
        brackets.reverse();
        let catalog = CareCatalog::new("test".into(), brackets).unwrap();
        for group in AgeGroup::ALL {
            assert_eq!(catalog.bracket(group).group, group);
        }
    }

    #[test]
    fn test_missing_group_rejected() {
        let brackets: Vec<_> = AgeGroup::ALL[..5].iter().map(|g| bracket(*g)).collect();
        let result = CareCatalog::new("test".into(), brackets);
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let mut brackets: Vec<_> = AgeGroup::ALL.iter().map(|g| bracket(*g)).collect();
        brackets.push(bracket(AgeGroup::Child));
        assert!(CareCatalog::new("test".into(), brackets).is_err());
    }

    #[test]
    fn test_json_round_trip_validates() {
        let catalog = CareCatalog::default();
        let json = catalog.to_json().unwrap();
        let loaded = CareCatalog::from_json(&json).unwrap();
        assert_eq!(loaded, catalog);

        let broken = r#"{"version": "x", "brackets": []}"#;
        assert!(CareCatalog::from_json(broken).is_err());
    }

    #[test]
    fn test_gendered_select() {
        let list = Gendered::ByBranch {
            female: vec![1],
            default: vec![2, 3],
        };
        assert_eq!(list.select(CareBranch::FemaleSpecific), &[1]);
        assert_eq!(list.select(CareBranch::DefaultSpecific), &[2, 3]);
        assert!(list.is_branched());

        let shared = Gendered::Shared(vec![7]);
        assert_eq!(shared.select(CareBranch::FemaleSpecific), &[7]);
    }
}
