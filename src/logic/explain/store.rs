//! Attribution artifact loader and chart payload builders

use std::cmp::Ordering;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{AttributionEntry, Contribution, GlobalFeature, LocalAttribution};
use super::MAX_DISPLAY;

/// Errors raised while loading the attribution artifact
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid attribution artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Deserialized attribution artifact: shared feature names and model base
/// value, plus one entry per client in client-table index order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationStore {
    pub feature_names: Vec<String>,
    pub base_value: f64,
    pub entries: Vec<AttributionEntry>,
}

impl ExplanationStore {
    /// Deserialize the artifact file.
    ///
    /// Positional alignment with the client table is assumed here, not
    /// checked; the caller compares lengths and logs the discrepancy.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of per-client entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Local attribution chart for the client at `position` in the client
    /// table's index order
    pub fn local(&self, position: usize) -> Option<LocalAttribution> {
        let entry = self.entries.get(position)?;

        let mut contributions: Vec<Contribution> = self
            .feature_names
            .iter()
            .enumerate()
            .map(|(i, name)| Contribution {
                feature: name.clone(),
                attribution: entry.values.get(i).copied().unwrap_or(0.0),
                feature_value: entry.data.get(i).copied().unwrap_or(f64::NAN),
            })
            .collect();

        // Strongest contributors first, by magnitude
        contributions.sort_by(|a, b| {
            b.attribution
                .abs()
                .partial_cmp(&a.attribution.abs())
                .unwrap_or(Ordering::Equal)
        });

        let remainder = contributions
            .iter()
            .skip(MAX_DISPLAY)
            .map(|c| c.attribution)
            .sum();
        contributions.truncate(MAX_DISPLAY);

        Some(LocalAttribution {
            base_value: self.base_value,
            contributions,
            remainder,
        })
    }

    /// Global importance ranking: mean absolute attribution per feature
    /// across all clients, capped to the display limit
    pub fn global_summary(&self) -> Vec<GlobalFeature> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let n = self.entries.len() as f64;
        let mut ranking: Vec<GlobalFeature> = self
            .feature_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let total: f64 = self
                    .entries
                    .iter()
                    .map(|e| e.values.get(i).copied().unwrap_or(0.0).abs())
                    .sum();
                GlobalFeature {
                    feature: name.clone(),
                    mean_abs_attribution: total / n,
                }
            })
            .collect();

        ranking.sort_by(|a, b| {
            b.mean_abs_attribution
                .partial_cmp(&a.mean_abs_attribution)
                .unwrap_or(Ordering::Equal)
        });
        ranking.truncate(MAX_DISPLAY);
        ranking
    }
}
