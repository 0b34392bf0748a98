//! Health Stats Library
//!
//! Formulas for common health indicators: BMI, BMR, maximum and resting heart
//! rate, hypertension category, body fat percentage and aspartame intake limits.

pub mod config;
pub mod error;
pub mod formulas;
pub mod models;
pub mod profile;

pub use config::FormulaConfig;
pub use error::{HealthError, HealthResult};
pub use formulas::{
    assess_resting_heart_rate, calculate_bmi, calculate_bmr, calculate_body_fat_percentage,
    calculate_max_aspartame_bottle, calculate_max_aspartame_bottle_with, calculate_max_heart_rate,
    classify_hypertension, get_expected_resting_heart_rate_range,
};
pub use models::{
    BloodPressure, Gender, HeartRateRange, HypertensionCategory, RestingHeartRateAssessment,
};
pub use profile::{HealthProfile, HealthSummary};
