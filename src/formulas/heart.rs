//! Heart rate formulas

use crate::models::{HeartRateRange, RestingHeartRateAssessment};

/// Upper bound of the age-predicted maximum heart rate formula
const MAX_HEART_RATE_BASE: i64 = 220;

/// Estimate maximum heart rate as 220 - age
///
/// Ages above 220 give a negative value; no validation is applied. Computed in
/// `i64` so every `u32` age is exact.
pub fn calculate_max_heart_rate(age: u32) -> i64 {
    MAX_HEART_RATE_BASE - i64::from(age)
}

/// Expected resting heart rate range (low, high) for an age, inclusive
pub fn get_expected_resting_heart_rate_range(age: u32) -> (u32, u32) {
    HeartRateRange::for_age(age).into()
}

/// Compare a measured resting heart rate with the expected range for the age
pub fn assess_resting_heart_rate(resting_heart_rate: u32, age: u32) -> RestingHeartRateAssessment {
    let range = HeartRateRange::for_age(age);
    let assessment = range.assess(resting_heart_rate);

    tracing::debug!(
        resting_heart_rate,
        age,
        low = range.low,
        high = range.high,
        %assessment,
        "Assessed resting heart rate"
    );
    assessment
}
