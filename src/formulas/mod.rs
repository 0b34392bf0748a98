//! Health formula module
//!
//! Stateless calculations for body composition, metabolism, heart rate,
//! blood pressure and intake limits.

pub mod blood_pressure;
pub mod body;
pub mod heart;
pub mod intake;
pub mod metabolism;

pub use blood_pressure::classify_hypertension;
pub use body::{calculate_bmi, calculate_body_fat_percentage, deurenberg};
pub use heart::{
    assess_resting_heart_rate, calculate_max_heart_rate, get_expected_resting_heart_rate_range,
};
pub use intake::{calculate_max_aspartame_bottle, calculate_max_aspartame_bottle_with};
pub use metabolism::{calculate_bmr, mifflin_st_jeor};
