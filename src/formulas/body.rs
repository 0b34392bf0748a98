//! Body composition formulas
//!
//! Body Mass Index and the Deurenberg body fat estimate derived from it.

use crate::error::HealthResult;
use crate::models::Gender;

/// Deurenberg coefficient applied to BMI
const BODY_FAT_BMI_COEF: f64 = 1.20;
/// Deurenberg coefficient applied to age in years
const BODY_FAT_AGE_COEF: f64 = 0.23;
/// Deurenberg constant for males
const BODY_FAT_MALE_CONSTANT: f64 = -16.2;
/// Deurenberg constant for females
const BODY_FAT_FEMALE_CONSTANT: f64 = -5.4;

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / `height_m`²
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_m` - Height in meters
///
/// No validation is performed; a zero height yields an infinite or NaN result.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / height_m.powi(2)
}

/// Estimate body fat percentage with the Deurenberg equation
///
/// Formula: BF% = 1.20 x BMI + 0.23 x age + `gender_constant`
/// - Men: -16.2
/// - Women: -5.4
///
/// # Arguments
/// * `gender` - Male or Female
/// * `weight_kg` - Body weight in kilograms
/// * `height_m` - Height in meters
/// * `age` - Age in years
pub fn deurenberg(gender: Gender, weight_kg: f64, height_m: f64, age: u32) -> f64 {
    let bmi = calculate_bmi(weight_kg, height_m);

    let gender_constant = match gender {
        Gender::Male => BODY_FAT_MALE_CONSTANT,
        Gender::Female => BODY_FAT_FEMALE_CONSTANT,
    };

    let body_fat = BODY_FAT_BMI_COEF * bmi + BODY_FAT_AGE_COEF * f64::from(age) + gender_constant;

    tracing::debug!(%gender, bmi, age, body_fat, "Calculated body fat percentage");
    body_fat
}

/// Estimate body fat percentage from a gender code ("M" or "F")
///
/// # Errors
///
/// Returns `HealthError::InvalidGender` for any other gender code
pub fn calculate_body_fat_percentage(
    gender: &str,
    weight_kg: f64,
    height_m: f64,
    age: u32,
) -> HealthResult<f64> {
    let gender = gender.parse::<Gender>()?;
    Ok(deurenberg(gender, weight_kg, height_m, age))
}
