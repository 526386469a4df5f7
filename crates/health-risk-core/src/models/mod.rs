//! Domain models for the health risk engine.

mod assessment;
mod care;
mod profile;
mod specialist;
mod vitals;

pub use assessment::*;
pub use care::*;
pub use profile::*;
pub use specialist::*;
pub use vitals::*;
