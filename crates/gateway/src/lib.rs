//! Prediction gateway service
//!
//! HTTP surface and configuration for the gateway binary. The domain
//! logic (validation, upstream client) lives in `gateway-lib`.

pub mod api;
pub mod config;
