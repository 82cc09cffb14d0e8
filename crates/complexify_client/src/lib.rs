//! Client library for the Complexify code-analysis service.
//!
//! The service exposes a single operation: POST a piece of source code and
//! receive a set of opaque metrics back. This crate provides:
//! - The wire types for that exchange (`AnalysisRequest`, `AnalysisReport`)
//! - The error taxonomy for the things that can go wrong on the way
//!   (`ClientError`)
//! - `AnalysisClient`, which performs the exchange

pub mod client;
pub mod error;
pub mod protocol;

#[cfg(test)]
mod tests;

pub use client::{AnalysisClient, DEFAULT_ENDPOINT};
pub use error::ClientError;
pub use protocol::{AnalysisReport, AnalysisRequest, Metric};

// Callers match on `ClientError::Status` without needing their own reqwest
pub use reqwest::StatusCode;
