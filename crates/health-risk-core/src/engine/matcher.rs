//! Specialist matching against high-risk factors.
//!
//! A factor is high-risk when its score exceeds the threshold (10 by
//! default). Specialists are kept in catalog order; the generalist always
//! takes the last slot.

use log::debug;

use crate::catalog::SpecialistCatalog;
use crate::models::{RiskAssessment, RiskFactor, SpecialistEntry};

/// Default score a factor must exceed to drive matching.
pub const DEFAULT_HIGH_RISK_THRESHOLD: u32 = 10;

/// Default number of recommendations returned.
pub const DEFAULT_MAX_RESULTS: usize = 4;

/// Matcher for resolving an assessment to specialist recommendations.
pub struct DoctorMatcher<'a> {
    catalog: &'a SpecialistCatalog,
    high_risk_threshold: u32,
}

impl<'a> DoctorMatcher<'a> {
    pub fn new(catalog: &'a SpecialistCatalog) -> Self {
        Self {
            catalog,
            high_risk_threshold: DEFAULT_HIGH_RISK_THRESHOLD,
        }
    }

    /// Override the high-risk threshold.
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.high_risk_threshold = threshold;
        self
    }

    /// Match an assessment to at most `max_results` entries.
    ///
    /// The generalist is always present, so a `max_results` of zero is
    /// treated as one.
    pub fn match_doctors(
        &self,
        assessment: &RiskAssessment,
        max_results: usize,
    ) -> Vec<SpecialistEntry> {
        let limit = max_results.max(1);
        let high_risk: Vec<&RiskFactor> = assessment
            .high_risk_factors(self.high_risk_threshold)
            .collect();

        let mut matched: Vec<SpecialistEntry> = self
            .catalog
            .specialists()
            .iter()
            .filter(|entry| entry.is_triggered_by(high_risk.iter().copied()))
            .take(limit - 1)
            .cloned()
            .collect();

        matched.push(self.catalog.generalist().clone());

        debug!(
            "Matched {} recommendation(s) from {} high-risk factor(s): {:?}",
            matched.len(),
            high_risk.len(),
            matched.iter().map(|e| e.specialty.as_str()).collect::<Vec<_>>()
        );

        matched
    }
}

/// Match an assessment against a catalog with the default threshold.
pub fn match_doctors(
    assessment: &RiskAssessment,
    catalog: &SpecialistCatalog,
    max_results: usize,
) -> Vec<SpecialistEntry> {
    DoctorMatcher::new(catalog).match_doctors(assessment, max_results)
}
