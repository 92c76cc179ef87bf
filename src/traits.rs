//! Capability traits for dependency injection

use async_trait::async_trait;

use crate::error::RemoteFailure;
use crate::types::{PassengerRecord, RemotePrediction};

/// Remote inference collaborator.
///
/// The production implementation posts the record to the model service;
/// tests substitute a mock or fake to exercise both orchestrator branches
/// deterministically.
#[mockall::automock]
#[async_trait]
pub trait RemoteModel: Send + Sync {
    /// Run one inference request for a passenger record.
    async fn predict(&self, record: &PassengerRecord) -> Result<RemotePrediction, RemoteFailure>;
}

/// Synthesizes a display confidence for remote predictions.
///
/// The model service reports only a class label, so this value is an
/// approximation with no statistical grounding. It lives behind a trait so
/// a calibrated estimate can replace it without touching the orchestrator.
#[mockall::automock]
pub trait ConfidenceEstimator: Send + Sync {
    /// Confidence percentage in [0, 100] for the given outcome.
    fn estimate(&self, survived: bool) -> u8;
}
