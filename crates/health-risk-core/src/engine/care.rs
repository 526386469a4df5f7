//! Preventive care recommendations by age group and gender.

use log::debug;

use crate::catalog::CareCatalog;
use crate::models::{AgeGroup, CareProfile, Gender};

/// Selects care bundles from a care catalog.
pub struct CareRecommender<'a> {
    catalog: &'a CareCatalog,
}

impl<'a> CareRecommender<'a> {
    pub fn new(catalog: &'a CareCatalog) -> Self {
        Self { catalog }
    }

    /// Build the care profile for an age and gender.
    ///
    /// Idempotent: the same arguments always produce the same profile.
    pub fn recommend(&self, age_years: u32, gender: Gender) -> CareProfile {
        let group = AgeGroup::from_age(age_years);
        let branch = gender.care_branch();
        let bracket = self.catalog.bracket(group);

        debug!(
            "Care profile for age {} ({:?}, {:?}) from catalog {}",
            age_years,
            group,
            branch,
            self.catalog.version()
        );

        CareProfile {
            age_group: group,
            age_group_label: bracket.label.clone(),
            vaccines: bracket.vaccines.clone(),
            healthcare_measures: bracket.healthcare_measures.select(branch).to_vec(),
            medication_advice: bracket.medication_advice.select(branch).to_vec(),
        }
    }
}

/// Care profile from the built-in catalog.
pub fn recommend_care(age_years: u32, gender: Gender) -> CareProfile {
    CareRecommender::new(super::default_care_catalog()).recommend(age_years, gender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infant_is_gender_invariant() {
        let female = recommend_care(1, Gender::Female);
        let male = recommend_care(1, Gender::Male);
        assert_eq!(female, male);
        assert_eq!(female.age_group, AgeGroup::Infant);
        assert_eq!(female.age_group_label, "Infant (0-2 years)");
        assert!(female.vaccine("BCG").is_some());
    }

    #[test]
    fn test_young_adult_branches() {
        let female = recommend_care(30, Gender::Female);
        let male = recommend_care(30, Gender::Male);

        assert!(female.has_measure_category("Reproductive Health"));
        assert!(female.mentions_measure("Pap smear"));
        assert!(!female.has_measure_category("Men's Health"));

        assert!(male.has_measure_category("Men's Health"));
        assert!(male.mentions_measure("Testicular"));
        assert!(!male.has_measure_category("Reproductive Health"));

        // Vaccines do not branch
        assert_eq!(female.vaccines, male.vaccines);
    }

    #[test]
    fn test_other_gender_uses_default_branch() {
        for age in [15, 30, 50] {
            assert_eq!(
                recommend_care(age, Gender::Other),
                recommend_care(age, Gender::Male),
                "age {}",
                age
            );
            assert_ne!(
                recommend_care(age, Gender::Other).healthcare_measures,
                recommend_care(age, Gender::Female).healthcare_measures,
            );
        }
    }

    #[test]
    fn test_middle_aged_screening() {
        let female = recommend_care(45, Gender::Female);
        assert!(female.mentions_measure("mammography"));

        let male = recommend_care(45, Gender::Male);
        assert!(male.mentions_measure("Prostate screening"));
        assert!(!male.mentions_measure("mammography"));
    }

    #[test]
    fn test_elderly_is_gender_invariant() {
        assert_eq!(recommend_care(70, Gender::Female), recommend_care(70, Gender::Other));
        assert!(recommend_care(70, Gender::Male).vaccine("COVID-19").is_some());
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let first = recommend_care(16, Gender::Female);
        let second = recommend_care(16, Gender::Female);
        assert_eq!(first, second);
    }
}
