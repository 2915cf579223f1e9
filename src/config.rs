//! Configuration module

use std::path::PathBuf;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Client feature table (CSV)
    pub clients_path: PathBuf,

    /// Labeled training table (CSV)
    pub trainset_path: PathBuf,

    /// Pre-computed attribution artifact (JSON)
    pub explainer_path: PathBuf,

    /// Remote scoring endpoint URL
    pub scoring_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: constants::get_port(),
            clients_path: PathBuf::from(constants::get_clients_file()),
            trainset_path: PathBuf::from(constants::get_trainset_file()),
            explainer_path: PathBuf::from(constants::get_explainer_file()),
            scoring_url: constants::get_scoring_url(),
        }
    }
}
