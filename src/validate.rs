//! Presence validation for required categorical fields

use crate::error::{PredictorError, PredictorResult};
use crate::types::PassengerRecord;

/// Check that the required categorical fields are set.
///
/// Numeric fields carry form defaults and need no further checks; only sex
/// and embarkation port can reach the orchestrator unset. A failure here
/// means no network call is attempted.
pub fn validate(record: &PassengerRecord) -> PredictorResult<()> {
    if record.sex.is_empty() {
        return Err(PredictorError::MissingField { field: "sex" });
    }
    if record.embarked.is_empty() {
        return Err(PredictorError::MissingField { field: "embarked" });
    }
    Ok(())
}
