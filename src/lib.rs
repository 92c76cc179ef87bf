//! Titanic survival predictor library
//!
//! Orchestrates one prediction per submission: validate the passenger
//! record, call the remote decision-tree service once, and fall back to a
//! deterministic local heuristic when the call fails. Both paths produce
//! the same display shape, so consumers never branch on which one ran.

pub mod error;
pub mod heuristic;
pub mod logging;
pub mod predictor_impl;
pub mod services;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export main types
pub use error::{PredictorError, PredictorResult, RemoteFailure};
pub use predictor_impl::Predictor;
pub use services::*;
pub use traits::*;
pub use types::*;
pub use validate::validate;
