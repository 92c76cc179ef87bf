//! Local fallback scoring used when the remote inference call fails

use crate::types::{PassengerRecord, SurvivalPrediction};

/// Survival probability from the hand-written point formula, clamped to
/// [0.10, 0.90]. Pure and total for any validated record.
///
/// The fare and age bonuses use strict comparisons and the family-size
/// bonus an open interval, so boundary values earn nothing.
pub fn fallback_probability(record: &PassengerRecord) -> f64 {
    let mut probability: f64 = 0.5;

    if record.sex == "female" {
        probability += 0.35;
    }

    if record.pclass == 1 {
        probability += 0.25;
    } else if record.pclass == 2 {
        probability += 0.10;
    }

    if record.age < 16.0 {
        probability += 0.15;
    }

    if record.fare > 50.0 {
        probability += 0.10;
    }

    let family_size = record.family_size();
    if family_size > 0 && family_size < 4 {
        probability += 0.05;
    }

    probability.clamp(0.10, 0.90)
}

/// Build the full display prediction from the fallback score.
pub fn fallback_prediction(record: &PassengerRecord) -> SurvivalPrediction {
    let probability = fallback_probability(record);
    let survived = probability > 0.5;

    SurvivalPrediction {
        survived,
        confidence: (probability * 100.0).round() as u8,
        survived_text: if survived { "Sí" } else { "No" }.to_string(),
        features: record.feature_breakdown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pclass: u8, sex: &str, age: f64, sibsp: u32, parch: u32, fare: f64) -> PassengerRecord {
        PassengerRecord {
            pclass,
            sex: sex.to_string(),
            age,
            sibsp,
            parch,
            fare,
            embarked: "S".to_string(),
            alone: sibsp + parch == 0,
        }
    }

    #[test]
    fn test_first_class_girl_clamps_high() {
        // 0.5 + 0.35 + 0.25 + 0.15 + 0.10 + 0.05 = 1.45, clamped to 0.90
        let r = record(1, "female", 10.0, 1, 0, 80.0);
        let prediction = fallback_prediction(&r);

        assert!(prediction.survived);
        assert_eq!(prediction.confidence, 90);
        assert_eq!(prediction.survived_text, "Sí");
    }

    #[test]
    fn test_third_class_man_at_base() {
        let r = record(3, "male", 40.0, 0, 0, 10.0);
        let prediction = fallback_prediction(&r);

        assert!(!prediction.survived);
        assert_eq!(prediction.confidence, 50);
        assert_eq!(prediction.survived_text, "No");
    }

    #[test]
    fn test_second_class_bonus() {
        let base = fallback_probability(&record(3, "male", 40.0, 0, 0, 10.0));
        let second = fallback_probability(&record(2, "male", 40.0, 0, 0, 10.0));
        assert!((second - base - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_age_boundary_is_strict() {
        let under = fallback_probability(&record(3, "male", 15.9, 0, 0, 10.0));
        let at = fallback_probability(&record(3, "male", 16.0, 0, 0, 10.0));
        assert!((under - at - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_fare_boundary_is_strict() {
        let at = fallback_probability(&record(3, "male", 40.0, 0, 0, 50.0));
        let over = fallback_probability(&record(3, "male", 40.0, 0, 0, 50.01));
        assert!((over - at - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_family_size_interval_is_open() {
        let alone = fallback_probability(&record(3, "male", 40.0, 0, 0, 10.0));
        let small = fallback_probability(&record(3, "male", 40.0, 1, 2, 10.0));
        let four = fallback_probability(&record(3, "male", 40.0, 2, 2, 10.0));

        assert!((small - alone - 0.05).abs() < 1e-9);
        assert!((four - alone).abs() < 1e-9);
    }

    #[test]
    fn test_probability_never_leaves_clamp_range() {
        let lowest = fallback_probability(&record(3, "male", 40.0, 0, 0, 10.0));
        let highest = fallback_probability(&record(1, "female", 5.0, 1, 1, 100.0));

        assert!((0.10..=0.90).contains(&lowest));
        assert!((0.10..=0.90).contains(&highest));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let r = record(2, "female", 30.0, 1, 0, 60.0);
        let first = fallback_prediction(&r);
        let second = fallback_prediction(&r);

        assert_eq!(first.survived, second.survived);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.features, second.features);
    }
}
