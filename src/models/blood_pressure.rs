//! Blood pressure models
//!
//! A systolic/diastolic reading and the hypertension categories it maps to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Systolic pressure at or above which a reading is crisis level (mmHg)
pub const CRISIS_SYSTOLIC: i32 = 180;
/// Diastolic pressure at or above which a reading is crisis level (mmHg)
pub const CRISIS_DIASTOLIC: i32 = 120;

/// A blood pressure reading in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

impl BloodPressure {
    pub const fn new(systolic: i32, diastolic: i32) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }

    pub fn category(&self) -> HypertensionCategory {
        crate::formulas::classify_hypertension(self.systolic, self.diastolic)
    }

    /// Whether either value reaches hypertensive crisis thresholds
    pub fn is_crisis_level(&self) -> bool {
        HypertensionCategory::is_crisis_level(self.systolic, self.diastolic)
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} mmHg", self.systolic, self.diastolic)
    }
}

/// Hypertension category of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypertensionCategory {
    Normal,
    Elevated,
    Stage1,
    Stage2,
    HypertensiveCrisis,
    Unclassified,
}

impl HypertensionCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            HypertensionCategory::Normal => "Normal Blood Pressure",
            HypertensionCategory::Elevated => "Elevated Blood Pressure",
            HypertensionCategory::Stage1 => "Stage 1 Hypertension",
            HypertensionCategory::Stage2 => "Stage 2 Hypertension",
            HypertensionCategory::HypertensiveCrisis => "Hypertensive Crisis",
            HypertensionCategory::Unclassified => "Unclassified",
        }
    }

    /// Crisis thresholds checked on their own, outside the classification cascade
    pub fn is_crisis_level(systolic: i32, diastolic: i32) -> bool {
        systolic >= CRISIS_SYSTOLIC || diastolic >= CRISIS_DIASTOLIC
    }
}

impl fmt::Display for HypertensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
