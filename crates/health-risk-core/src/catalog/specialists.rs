//! Specialist catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_catalog_file, CatalogError, CatalogResult};
use crate::models::SpecialistEntry;

/// On-disk shape of a specialist catalog, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistCatalogFile {
    pub version: String,
    pub specialists: Vec<SpecialistEntry>,
    pub generalist: SpecialistEntry,
}

/// Validated specialist catalog.
///
/// Specialists are matched in catalog order; the generalist is recommended
/// unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "SpecialistCatalogFile")]
pub struct SpecialistCatalog {
    version: String,
    specialists: Vec<SpecialistEntry>,
    generalist: SpecialistEntry,
}

impl TryFrom<SpecialistCatalogFile> for SpecialistCatalog {
    type Error = CatalogError;

    fn try_from(file: SpecialistCatalogFile) -> CatalogResult<Self> {
        SpecialistCatalog::new(file.version, file.specialists, file.generalist)
    }
}

impl SpecialistCatalog {
    /// Build a catalog, checking ids are unique and specialties named.
    pub fn new(
        version: String,
        specialists: Vec<SpecialistEntry>,
        generalist: SpecialistEntry,
    ) -> CatalogResult<Self> {
        {
            let mut seen = HashSet::new();
            for entry in specialists.iter().chain(std::iter::once(&generalist)) {
                if entry.specialty.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "entry {} has an empty specialty",
                        entry.id
                    )));
                }
                if !seen.insert(entry.id.as_str()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate specialist id: {}",
                        entry.id
                    )));
                }
            }
        }

        if let Some(entry) = specialists.iter().find(|e| e.triggers.is_empty()) {
            return Err(CatalogError::Invalid(format!(
                "specialist {} has no triggers",
                entry.id
            )));
        }

        Ok(Self {
            version,
            specialists,
            generalist,
        })
    }

    /// Assemble the built-in catalog without re-validating it.
    pub(super) fn from_parts(
        version: String,
        specialists: Vec<SpecialistEntry>,
        generalist: SpecialistEntry,
    ) -> Self {
        Self {
            version,
            specialists,
            generalist,
        }
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

    /// Triggered specialists, in catalog order.
    pub fn specialists(&self) -> &[SpecialistEntry] {
        &self.specialists
    }

    /// The unconditional fallback entry.
    pub fn generalist(&self) -> &SpecialistEntry {
        &self.generalist
    }
}

impl Default for SpecialistCatalog {
    fn default() -> Self {
        super::defaults::specialist_catalog()
    }
}
