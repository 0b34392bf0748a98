//! Intake limit formulas

use crate::config::FormulaConfig;
use crate::error::{HealthError, HealthResult};

/// Maximum whole bottles per day that stay within the default aspartame ADI
/// (40 mg per kg body weight)
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `aspartame_mg` - Aspartame content of one bottle in milligrams
///
/// # Example
/// 70 kg allows 2800 mg/day; at 250 mg per bottle that is 11 bottles.
///
/// # Errors
///
/// See `calculate_max_aspartame_bottle_with`
pub fn calculate_max_aspartame_bottle(weight_kg: f64, aspartame_mg: f64) -> HealthResult<u32> {
    calculate_max_aspartame_bottle_with(&FormulaConfig::default(), weight_kg, aspartame_mg)
}

/// Maximum whole bottles per day under the ADI from `config`, rounded down
///
/// # Errors
///
/// Returns `HealthError::NonPositiveContent` when `aspartame_mg` is zero or
/// negative, and `HealthError::BottleCountOutOfRange` when the floored count is
/// NaN, negative or larger than `u32::MAX`
pub fn calculate_max_aspartame_bottle_with(
    config: &FormulaConfig,
    weight_kg: f64,
    aspartame_mg: f64,
) -> HealthResult<u32> {
    if aspartame_mg <= 0.0 {
        return Err(HealthError::NonPositiveContent(aspartame_mg));
    }

    let max_intake_mg = config.aspartame_adi_mg_per_kg * weight_kg;
    let bottles = (max_intake_mg / aspartame_mg).floor();

    if !(0.0..=f64::from(u32::MAX)).contains(&bottles) {
        return Err(HealthError::BottleCountOutOfRange(bottles));
    }

    tracing::debug!(
        weight_kg,
        aspartame_mg,
        max_intake_mg,
        bottles,
        "Calculated aspartame bottle limit"
    );
    Ok(bottles as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(calculate_max_aspartame_bottle(70.0, 250.0).unwrap(), 11);
        assert_eq!(calculate_max_aspartame_bottle(50.0, 200.0).unwrap(), 10);
    }

    #[test]
    fn test_rounds_down() {
        // 2400 / 250 = 9.6
        assert_eq!(calculate_max_aspartame_bottle(60.0, 250.0).unwrap(), 9);
        // Less than one bottle
        assert_eq!(calculate_max_aspartame_bottle(5.0, 250.0).unwrap(), 0);
    }

    #[test]
    fn test_configured_adi() {
        let config = FormulaConfig {
            aspartame_adi_mg_per_kg: 50.0,
        };
        // 3500 / 250 = 14
        let bottles = calculate_max_aspartame_bottle_with(&config, 70.0, 250.0).unwrap();
        assert_eq!(bottles, 14);
    }

    #[test]
    fn test_non_positive_content_is_an_error() {
        assert!(matches!(
            calculate_max_aspartame_bottle(70.0, 0.0),
            Err(HealthError::NonPositiveContent(c)) if c == 0.0
        ));
        assert!(matches!(
            calculate_max_aspartame_bottle(70.0, -250.0),
            Err(HealthError::NonPositiveContent(_))
        ));
    }

    #[test]
    fn test_unrepresentable_count_is_an_error() {
        // 4e13 bottles does not fit in u32
        assert!(matches!(
            calculate_max_aspartame_bottle(1e12, 1.0),
            Err(HealthError::BottleCountOutOfRange(_))
        ));
        // Negative weight gives a negative count
        assert!(matches!(
            calculate_max_aspartame_bottle(-70.0, 250.0),
            Err(HealthError::BottleCountOutOfRange(b)) if b < 0.0
        ));
        assert!(matches!(
            calculate_max_aspartame_bottle(70.0, f64::NAN),
            Err(HealthError::BottleCountOutOfRange(b)) if b.is_nan()
        ));
    }

    #[test]
    fn test_largest_representable_count() {
        let config = FormulaConfig {
            aspartame_adi_mg_per_kg: 1.0,
        };
        let max = f64::from(u32::MAX);
        let bottles = calculate_max_aspartame_bottle_with(&config, max, 1.0).unwrap();
        assert_eq!(bottles, u32::MAX);
    }
}
