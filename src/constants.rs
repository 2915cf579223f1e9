//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To point the dashboard at another scoring endpoint or data drop,
//! only edit this file (or set the matching environment variable).

/// Default remote scoring endpoint
///
/// This is the fallback URL when no environment variable is set.
/// The endpoint accepts `{"client_choice": <id>}` and answers with the
/// default-risk probability for that client.
pub const DEFAULT_SCORING_URL: &str =
    "https://scoring-client-6cc83c15008a.herokuapp.com/invocations";

/// Default HTTP port for the dashboard API
pub const DEFAULT_PORT: u16 = 8080;

/// Default client feature table (CSV, one row per applicant)
pub const DEFAULT_CLIENTS_FILE: &str = "echantillon_clients.csv";

/// Default labeled training table (CSV)
pub const DEFAULT_TRAINSET_FILE: &str = "trainset.csv";

/// Default pre-computed attribution artifact (JSON)
pub const DEFAULT_EXPLAINER_FILE: &str = "explainer.json";

/// Column carrying the unique client identifier
pub const ID_COLUMN: &str = "SK_ID_CURR";

/// Column carrying the decision threshold (stored redundantly on every row)
pub const THRESHOLD_COLUMN: &str = "threshold";

/// Binary outcome label column in the training table
pub const TARGET_COLUMN: &str = "TARGET";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scoring endpoint URL from environment or use default
pub fn get_scoring_url() -> String {
    std::env::var("SCORING_URL").unwrap_or_else(|_| DEFAULT_SCORING_URL.to_string())
}

/// Get API port from environment or use default
pub fn get_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get client table path from environment or use default
pub fn get_clients_file() -> String {
    std::env::var("CLIENTS_FILE").unwrap_or_else(|_| DEFAULT_CLIENTS_FILE.to_string())
}

/// Get training table path from environment or use default
pub fn get_trainset_file() -> String {
    std::env::var("TRAINSET_FILE").unwrap_or_else(|_| DEFAULT_TRAINSET_FILE.to_string())
}

/// Get attribution artifact path from environment or use default
pub fn get_explainer_file() -> String {
    std::env::var("EXPLAINER_FILE").unwrap_or_else(|_| DEFAULT_EXPLAINER_FILE.to_string())
}
