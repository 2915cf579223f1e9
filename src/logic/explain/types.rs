use serde::{Deserialize, Serialize};

/// One client's attribution vector, positionally aligned with the client
/// table. `values` are signed attributions, `data` the underlying feature
/// values the model saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionEntry {
    pub values: Vec<f64>,
    pub data: Vec<f64>,
}

/// One feature's contribution to a client's score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: String,
    /// Signed attribution; positive pushes the risk up
    pub attribution: f64,
    /// The client's value for this feature
    pub feature_value: f64,
}

/// Waterfall payload for one client: the top contributions plus the signed
/// sum of everything below the display cap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalAttribution {
    pub base_value: f64,
    pub contributions: Vec<Contribution>,
    pub remainder: f64,
}

/// One row of the global importance ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalFeature {
    pub feature: String,
    pub mean_abs_attribution: f64,
}
