//! Dataset Module - flat input tables for the dashboard
//!
//! Loads the client feature table (keyed by client identifier, carrying the
//! decision threshold) and the labeled training table (partitioned by
//! outcome). Both are deployment artifacts: a missing or malformed file is
//! fatal at startup, there is no recovery path.

pub mod table;
pub mod training;


pub use table::{ClientRecord, ClientTable};
pub use training::{Outcome, TrainingSplit};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the input tables
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path} contains no data rows")]
    Empty { path: PathBuf },

    #[error("row {row} of {path} has invalid value {value:?} for column '{column}'")]
    BadValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },
}

/// Parse a numeric cell. Empty cells are missing values (NaN), anything
/// else must be a number.
fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Some(f64::NAN)
    } else {
        trimmed.parse::<f64>().ok()
    }
}
