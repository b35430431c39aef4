//! Eligibility matching for Unisphere: faculty classification of program names and
//! percentage-based university recommendations.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
