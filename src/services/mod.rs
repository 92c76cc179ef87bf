//! Predictor service implementations

pub mod confidence;
pub mod remote_model;

#[cfg(test)]
pub mod tests;

pub use confidence::*;
pub use remote_model::*;
