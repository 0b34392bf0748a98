//! Heart rate models
//!
//! Age-bracketed resting heart rate ranges and the assessment of a measured rate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected resting heart rate interval in bpm, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateRange {
    pub low: u32,
    pub high: u32,
}

impl HeartRateRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Look up the expected range for an age in years
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=30 => Self::new(60, 80),
            31..=40 => Self::new(65, 85),
            41..=50 => Self::new(70, 90),
            _ => Self::new(75, 95),
        }
    }

    pub fn contains(&self, bpm: u32) -> bool {
        (self.low..=self.high).contains(&bpm)
    }

    /// Classify a measured rate against this range
    pub fn assess(&self, bpm: u32) -> RestingHeartRateAssessment {
        if self.contains(bpm) {
            RestingHeartRateAssessment::Normal
        } else if bpm < self.low {
            RestingHeartRateAssessment::Low
        } else {
            RestingHeartRateAssessment::High
        }
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.low, self.high)
    }
}

impl From<HeartRateRange> for (u32, u32) {
    fn from(range: HeartRateRange) -> Self {
        range.as_tuple()
    }
}

/// Result of comparing a resting heart rate with its expected range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestingHeartRateAssessment {
    Low,
    Normal,
    High,
}

impl RestingHeartRateAssessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestingHeartRateAssessment::Low => "Low",
            RestingHeartRateAssessment::Normal => "Normal",
            RestingHeartRateAssessment::High => "High",
        }
    }
}

impl fmt::Display for RestingHeartRateAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
