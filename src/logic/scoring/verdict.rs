//! Verdict and gauge geometry
//!
//! The decision convention comes from the scoring model's calibration:
//! risk strictly below the threshold is accepted, equality rejects.

use serde::{Deserialize, Serialize};

/// Accept/reject outcome for a scored client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    /// Accepted iff probability is strictly below the threshold
    pub fn classify(probability: f64, threshold: f64) -> Self {
        if probability < threshold {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }
}

/// Horizontal gauge geometry, all widths and markers in percent.
///
/// A full-width red bar overlaid by a green bar up to the threshold; the
/// dashed marker sits at the client's risk, the solid marker at the
/// threshold. Green zone = accept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeSpec {
    pub red_width_pct: f64,
    pub green_width_pct: f64,
    /// Dashed marker at the client's probability
    pub score_marker_pct: f64,
    /// Solid marker at the threshold
    pub threshold_marker_pct: f64,
}

impl GaugeSpec {
    pub fn new(probability: f64, threshold: f64) -> Self {
        Self {
            red_width_pct: 100.0,
            green_width_pct: threshold * 100.0,
            score_marker_pct: probability * 100.0,
            threshold_marker_pct: threshold * 100.0,
        }
    }
}

/// Full decision payload for one scored client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDecision {
    pub client_id: i64,
    pub probability: f64,
    pub threshold: f64,
    pub verdict: Verdict,
    pub risk_pct: f64,
    pub threshold_pct: f64,
    pub gauge: GaugeSpec,
}

impl ScoreDecision {
    pub fn new(client_id: i64, probability: f64, threshold: f64) -> Self {
        Self {
            client_id,
            probability,
            threshold,
            verdict: Verdict::classify(probability, threshold),
            risk_pct: probability * 100.0,
            threshold_pct: threshold * 100.0,
            gauge: GaugeSpec::new(probability, threshold),
        }
    }
}
