//! Scoring Module - remote prediction and the accept/reject decision
//!
//! The model lives behind a remote endpoint; this module owns the one
//! outbound call per client selection and turns the returned probability
//! into a verdict and gauge geometry against the dataset threshold.

pub mod client;
pub mod verdict;


pub use client::{ScoreError, ScoringClient};
pub use verdict::{GaugeSpec, ScoreDecision, Verdict};
