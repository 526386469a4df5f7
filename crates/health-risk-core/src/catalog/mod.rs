//! Versioned data tables driving care recommendations and specialist matching.
//!
//! Catalogs are plain data: the engine never hardcodes a vaccine or a doctor.
//! Built-in defaults live in [`defaults`]; replacements can be loaded from JSON.

mod care;
pub mod defaults;
mod specialists;

pub use care::*;
pub use specialists::*;

use std::path::Path;

use thiserror::Error;

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read a catalog file into a string.
pub(crate) fn read_catalog_file<P: AsRef<Path>>(path: P) -> CatalogResult<String> {
    Ok(std::fs::read_to_string(path)?)
}
