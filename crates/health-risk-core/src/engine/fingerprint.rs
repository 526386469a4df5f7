//! Input fingerprints for stored assessments.
//!
//! fingerprint = hex(sha256(canonical_json(inputs)))

use sha2::{Digest, Sha256};

use super::RiskInputs;

/// Fingerprint a scoring input set.
pub fn fingerprint_inputs(inputs: &RiskInputs) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(inputs)?;
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
