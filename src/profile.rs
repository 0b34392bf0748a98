//! Health profile summary
//!
//! Computes every per-person metric from one set of body measurements.

use serde::{Deserialize, Serialize};

use crate::error::HealthResult;
use crate::formulas::{calculate_bmi, calculate_max_heart_rate, deurenberg, mifflin_st_jeor};
use crate::models::{Gender, HeartRateRange};

/// Centimeters per meter
const CM_PER_M: f64 = 100.0;

/// Body measurements of one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_m: f64,
    pub age: u32,
}

/// Derived metrics for a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSummary {
    pub bmi: f64,
    /// kcal/day
    pub bmr: f64,
    pub body_fat_percentage: f64,
    pub max_heart_rate: i64,
    pub resting_heart_rate_range: HeartRateRange,
}

impl HealthProfile {
    pub fn new(gender: Gender, weight_kg: f64, height_m: f64, age: u32) -> Self {
        Self {
            gender,
            weight_kg,
            height_m,
            age,
        }
    }

    /// Build a profile from a gender code ("M" or "F")
    pub fn from_code(gender: &str, weight_kg: f64, height_m: f64, age: u32) -> HealthResult<Self> {
        Ok(Self::new(gender.parse()?, weight_kg, height_m, age))
    }

    pub fn height_cm(&self) -> f64 {
        self.height_m * CM_PER_M
    }

    /// Calculate all metrics for this profile
    pub fn summary(&self) -> HealthSummary {
        HealthSummary {
            bmi: calculate_bmi(self.weight_kg, self.height_m),
            bmr: mifflin_st_jeor(self.gender, self.weight_kg, self.height_cm(), self.age),
            body_fat_percentage: deurenberg(self.gender, self.weight_kg, self.height_m, self.age),
            max_heart_rate: calculate_max_heart_rate(self.age),
            resting_heart_rate_range: HeartRateRange::for_age(self.age),
        }
    }
}

impl HealthSummary {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> HealthResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
