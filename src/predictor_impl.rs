//! Prediction orchestrator with dependency injection

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::error::PredictorResult;
use crate::heuristic::fallback_prediction;
use crate::traits::{ConfidenceEstimator, RemoteModel};
use crate::types::{PassengerRecord, SurvivalPrediction};
use crate::validate::validate;

/// Prediction orchestrator.
///
/// Owns the control flow of one submission: validate, call the remote model
/// once, map the response, and absorb any transport or format failure into
/// the local heuristic. There is no retry; each submission is a single
/// logical attempt that completes or falls back exactly once.
pub struct Predictor<M, C>
where
    M: RemoteModel,
    C: ConfidenceEstimator,
{
    remote_model: M,
    confidence_estimator: C,
    /// Monotonic tag of the most recent submission. Completions carrying an
    /// older tag are discarded instead of applied.
    latest_attempt: AtomicU64,
}

impl<M, C> Predictor<M, C>
where
    M: RemoteModel,
    C: ConfidenceEstimator,
{
    /// Create a new predictor with injected collaborators.
    pub fn new(remote_model: M, confidence_estimator: C) -> Self {
        Self {
            remote_model,
            confidence_estimator,
            latest_attempt: AtomicU64::new(0),
        }
    }

    /// Run one prediction attempt.
    ///
    /// Returns `Err` only for validation failures, before any network
    /// activity. Remote transport and format failures fall back to the
    /// local heuristic and are logged, never surfaced. `Ok(None)` means a
    /// newer submission superseded this one while it was in flight.
    pub async fn predict(
        &self,
        record: &PassengerRecord,
    ) -> PredictorResult<Option<SurvivalPrediction>> {
        validate(record)?;

        let attempt = self.latest_attempt.fetch_add(1, Ordering::SeqCst) + 1;

        let prediction = match self.remote_model.predict(record).await {
            Ok(response) => {
                let survived = response.prediction == 1;
                debug!(label = response.prediction, "remote model answered");

                SurvivalPrediction {
                    survived,
                    confidence: self.confidence_estimator.estimate(survived),
                    survived_text: response.survived,
                    features: record.feature_breakdown(),
                }
            }
            Err(failure) => {
                warn!(error = %failure, "remote prediction failed, using local heuristic");
                fallback_prediction(record)
            }
        };

        if self.latest_attempt.load(Ordering::SeqCst) != attempt {
            debug!(attempt, "discarding superseded prediction attempt");
            return Ok(None);
        }

        Ok(Some(prediction))
    }
}
