//! Personality quiz scoring, recommendation, and result delivery.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
