//! Passenger input and prediction display types

use serde::{Deserialize, Serialize};

/// One hypothetical passenger, as collected by the presentation layer.
///
/// Field names match the wire format of the inference service (`pclass`,
/// `sibsp`, `parch`, ...), so the record serializes directly into the
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub pclass: u8,
    pub sex: String,
    pub age: f64,
    pub sibsp: u32,
    pub parch: u32,
    pub fare: f64,
    pub embarked: String,
    pub alone: bool,
}

impl PassengerRecord {
    /// Combined sibling/spouse and parent/child count.
    pub fn family_size(&self) -> u32 {
        self.sibsp + self.parch
    }

    /// Six-entry feature breakdown with fixed importance weights, in the
    /// order the results panel renders them. The weights sum to 1.0 and are
    /// identical regardless of which path produced the prediction.
    pub fn feature_breakdown(&self) -> Vec<FeatureContribution> {
        vec![
            FeatureContribution {
                name: "Gender".to_string(),
                value: self.sex.clone(),
                importance: 0.35,
            },
            FeatureContribution {
                name: "Passenger Class".to_string(),
                value: self.pclass.to_string(),
                importance: 0.25,
            },
            FeatureContribution {
                name: "Age".to_string(),
                value: format_number(self.age),
                importance: 0.15,
            },
            FeatureContribution {
                name: "Fare".to_string(),
                value: format!("${}", format_number(self.fare)),
                importance: 0.10,
            },
            FeatureContribution {
                name: "Family Size".to_string(),
                value: self.family_size().to_string(),
                importance: 0.10,
            },
            FeatureContribution {
                name: "Port of Embarkation".to_string(),
                value: self.embarked.clone(),
                importance: 0.05,
            },
        ]
    }
}

impl Default for PassengerRecord {
    /// Initial form state: third class, numeric defaults, categorical
    /// fields unset until the user picks them.
    fn default() -> Self {
        Self {
            pclass: 3,
            sex: String::new(),
            age: 25.0,
            sibsp: 0,
            parch: 0,
            fare: 50.0,
            embarked: String::new(),
            alone: true,
        }
    }
}

/// Raw response from the inference service: a binary class label and a
/// human-readable survival string. Nothing else is guaranteed; a missing
/// field counts as a malformed response.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePrediction {
    pub prediction: u8,
    pub survived: String,
}

/// A single named feature with its display value and importance weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub name: String,
    pub value: String,
    pub importance: f64,
}

/// Enriched prediction for display. Shape is identical whether the remote
/// model or the local fallback produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalPrediction {
    pub survived: bool,
    /// Percentage in [0, 100]. On the remote path this is synthesized by a
    /// [`crate::traits::ConfidenceEstimator`], not reported by the model.
    pub confidence: u8,
    pub survived_text: String,
    pub features: Vec<FeatureContribution>,
}

/// Render whole-valued floats without the trailing ".0".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_breakdown_order_and_weights() {
        let record = PassengerRecord {
            sex: "female".to_string(),
            embarked: "C".to_string(),
            ..PassengerRecord::default()
        };

        let features = record.feature_breakdown();
        assert_eq!(features.len(), 6);

        let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Gender",
                "Passenger Class",
                "Age",
                "Fare",
                "Family Size",
                "Port of Embarkation"
            ]
        );

        let total: f64 = features.iter().map(|f| f.importance).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_feature_breakdown_display_values() {
        let record = PassengerRecord {
            pclass: 1,
            sex: "male".to_string(),
            age: 40.5,
            sibsp: 1,
            parch: 2,
            fare: 80.0,
            embarked: "S".to_string(),
            alone: false,
        };

        let features = record.feature_breakdown();
        assert_eq!(features[0].value, "male");
        assert_eq!(features[1].value, "1");
        assert_eq!(features[2].value, "40.5");
        assert_eq!(features[3].value, "$80");
        assert_eq!(features[4].value, "3");
        assert_eq!(features[5].value, "S");
    }

    #[test]
    fn test_record_serializes_wire_field_names() {
        let record = PassengerRecord::default();
        let json = serde_json::to_value(&record).unwrap();

        for field in ["pclass", "sex", "age", "sibsp", "parch", "fare", "embarked", "alone"] {
            assert!(json.get(field).is_some(), "missing wire field {field}");
        }
    }
}
