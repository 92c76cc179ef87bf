//! Tests for predictor services
//!
//! The remote model tests run against a wiremock server standing in for
//! the inference service, covering both the happy path and every failure
//! class that routes to the fallback.
