//! Synthetic confidence estimation for remote predictions

use rand::Rng;

use crate::traits::ConfidenceEstimator;

/// Draws a plausible confidence percentage for the results panel.
///
/// The inference service reports only the class label, so this value is an
/// approximation with no relation to true model certainty: uniform in
/// [75, 95] for survival, [70, 90] otherwise.
pub struct RealConfidenceEstimator;

impl RealConfidenceEstimator {
    /// Create a new estimator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealConfidenceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceEstimator for RealConfidenceEstimator {
    fn estimate(&self, survived: bool) -> u8 {
        let mut rng = rand::thread_rng();
        if survived {
            rng.gen_range(75..=95)
        } else {
            rng.gen_range(70..=90)
        }
    }
}
