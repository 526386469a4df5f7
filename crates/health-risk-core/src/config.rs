//! Engine configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::engine::{DEFAULT_HIGH_RISK_THRESHOLD, DEFAULT_MAX_RESULTS};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for scoring, matching and the dashboard lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// A factor must score above this to drive specialist matching
    pub high_risk_threshold: u32,
    /// Maximum specialist recommendations, generalist included
    pub max_doctor_results: usize,
    /// Recompute the assessment on every input change instead of marking it stale
    pub auto_refresh: bool,
    /// Replacement care catalog (JSON)
    pub care_catalog_path: Option<PathBuf>,
    /// Replacement specialist catalog (JSON)
    pub specialist_catalog_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            high_risk_threshold: DEFAULT_HIGH_RISK_THRESHOLD,
            max_doctor_results: DEFAULT_MAX_RESULTS,
            auto_refresh: false,
            care_catalog_path: None,
            specialist_catalog_path: None,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Check settings are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_doctor_results == 0 {
            return Err(ConfigError::Invalid(
                "max_doctor_results must leave room for the generalist".into(),
            ));
        }
        Ok(())
    }
}
