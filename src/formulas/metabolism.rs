//! Metabolic rate formulas

use crate::error::HealthResult;
use crate::models::Gender;

const MSJ_WEIGHT_COEF: f64 = 10.0;
const MSJ_HEIGHT_COEF: f64 = 6.25;
const MSJ_AGE_COEF: f64 = -5.0;
const MSJ_MALE_CONSTANT: f64 = 5.0;
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// Returns kcal/day. Note the height is in centimeters, unlike `calculate_bmi`.
pub fn mifflin_st_jeor(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let weight_component = MSJ_WEIGHT_COEF * weight_kg;
    let height_component = MSJ_HEIGHT_COEF * height_cm;
    let age_component = MSJ_AGE_COEF * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female => MSJ_FEMALE_CONSTANT,
    };

    let bmr = weight_component + height_component + age_component + gender_constant;

    tracing::debug!(%gender, weight_kg, height_cm, age, bmr, "Calculated BMR");
    bmr
}

/// Calculate BMR from a gender code ("M" or "F")
///
/// # Errors
///
/// Returns `HealthError::InvalidGender` for any other gender code
pub fn calculate_bmr(gender: &str, weight_kg: f64, height_cm: f64, age: u32) -> HealthResult<f64> {
    let gender = gender.parse::<Gender>()?;
    Ok(mifflin_st_jeor(gender, weight_kg, height_cm, age))
}
