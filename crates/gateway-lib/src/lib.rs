//! Gateway library for ML prediction proxying
//!
//! This crate provides the core functionality for:
//! - Feature vector validation
//! - Delegating predictions to the upstream ML service

pub mod features;
pub mod upstream;

pub use features::{validate, FeatureVector, ValidationError};
pub use upstream::{HttpPredictor, Predictor, UpstreamError};
