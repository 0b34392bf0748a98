//! Data models
//!
//! Typed inputs and categorical results for the health formulas.

mod blood_pressure;
mod gender;
mod heart_rate;

pub use blood_pressure::{BloodPressure, HypertensionCategory};
pub use gender::Gender;
pub use heart_rate::{HeartRateRange, RestingHeartRateAssessment};
