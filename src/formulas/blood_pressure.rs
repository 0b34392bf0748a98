//! Blood pressure classification
//!
//! Maps a systolic/diastolic pair onto a hypertension category by walking a
//! fixed cascade of threshold checks. The first matching rule wins.

use crate::models::HypertensionCategory;

/// Classify a reading (mmHg) into a hypertension category
///
/// Rules, in evaluation order:
/// 1. systolic < 120 and diastolic < 80 -> Normal
/// 2. systolic < 130 and diastolic < 80 -> Elevated
/// 3. systolic in 130..=139 or diastolic in 80..=89 -> Stage 1
/// 4. systolic >= 140 or diastolic >= 90 -> Stage 2
/// 5. systolic >= 180 or diastolic >= 120 -> Hypertensive Crisis
/// 6. otherwise -> Unclassified
///
/// Rule 4 already matches every reading rule 5 would, so crisis-level readings
/// classify as Stage 2. Use `HypertensionCategory::is_crisis_level` to detect
/// them.
pub fn classify_hypertension(systolic: i32, diastolic: i32) -> HypertensionCategory {
    let category = if systolic < 120 && diastolic < 80 {
        HypertensionCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        HypertensionCategory::Elevated
    } else if (130..=139).contains(&systolic) || (80..=89).contains(&diastolic) {
        HypertensionCategory::Stage1
    } else if systolic >= 140 || diastolic >= 90 {
        HypertensionCategory::Stage2
    } else if HypertensionCategory::is_crisis_level(systolic, diastolic) {
        HypertensionCategory::HypertensiveCrisis
    } else {
        // Rules 1-4 cover every integer pair, so this is never reached
        tracing::debug!(systolic, diastolic, "Blood pressure reading matched no category");
        HypertensionCategory::Unclassified
    };

    tracing::debug!(systolic, diastolic, %category, "Classified blood pressure");
    category
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal() {
        assert_eq!(classify_hypertension(110, 70), HypertensionCategory::Normal);
        assert_eq!(classify_hypertension(119, 79), HypertensionCategory::Normal);
    }

    #[test]
    fn test_elevated() {
        assert_eq!(classify_hypertension(120, 70), HypertensionCategory::Elevated);
        assert_eq!(classify_hypertension(129, 79), HypertensionCategory::Elevated);
    }

    #[test]
    fn test_stage1() {
        assert_eq!(classify_hypertension(130, 85), HypertensionCategory::Stage1);
        assert_eq!(classify_hypertension(139, 70), HypertensionCategory::Stage1);
        // Diastolic alone is enough
        assert_eq!(classify_hypertension(110, 80), HypertensionCategory::Stage1);
        assert_eq!(
            classify_hypertension(130, 85).to_string(),
            "Stage 1 Hypertension"
        );
    }

    #[test]
    fn test_stage2() {
        assert_eq!(classify_hypertension(140, 70), HypertensionCategory::Stage2);
        assert_eq!(classify_hypertension(115, 90), HypertensionCategory::Stage2);
    }

    #[test]
    fn test_stage1_diastolic_wins_over_stage2_systolic() {
        // Rule 3 is evaluated before rule 4
        assert_eq!(classify_hypertension(150, 85), HypertensionCategory::Stage1);
    }

    #[test]
    fn test_crisis_level_classifies_as_stage2() {
        assert_eq!(classify_hypertension(185, 125), HypertensionCategory::Stage2);
        assert_eq!(classify_hypertension(200, 70), HypertensionCategory::Stage2);
        assert!(HypertensionCategory::is_crisis_level(185, 125));
    }

    #[test]
    fn test_every_reading_is_classified() {
        for systolic in (-10..=260).step_by(3) {
            for diastolic in (-10..=160).step_by(3) {
                let category = classify_hypertension(systolic, diastolic);
                assert_ne!(category, HypertensionCategory::Unclassified);
                assert_ne!(category, HypertensionCategory::HypertensiveCrisis);
            }
        }
        assert_ne!(
            classify_hypertension(i32::MAX, i32::MIN),
            HypertensionCategory::Unclassified
        );
    }
}
