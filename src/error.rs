//! Predictor error types

use thiserror::Error;

/// Result type for predictor operations
pub type PredictorResult<T> = Result<T, PredictorError>;

/// Errors surfaced to the caller.
///
/// Transport failures are deliberately absent: the remote call is absorbed
/// by the local fallback and only logged, so validation is the sole way a
/// submission can fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PredictorError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Failure taxonomy for the remote inference call.
///
/// Every variant routes to the same fallback branch; none is escalated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    #[error("network error: {0}")]
    NetworkError(String),

    #[error("server returned status {0}")]
    ServerError(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
