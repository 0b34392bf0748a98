//! Formula configuration
//!
//! Guideline values that vary between health authorities.

use serde::{Deserialize, Serialize};

use crate::error::HealthResult;

/// Acceptable daily intake of aspartame (mg per kg body weight), EFSA guideline
pub const DEFAULT_ASPARTAME_ADI_MG_PER_KG: f64 = 40.0;

/// Configurable guideline values used by the intake formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    /// Acceptable daily intake of aspartame in mg/kg/day
    pub aspartame_adi_mg_per_kg: f64,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            aspartame_adi_mg_per_kg: DEFAULT_ASPARTAME_ADI_MG_PER_KG,
        }
    }
}

impl FormulaConfig {
    /// Parse from a JSON document; missing fields fall back to defaults
    pub fn from_json_str(s: &str) -> HealthResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
