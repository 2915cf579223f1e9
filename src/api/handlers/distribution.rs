//! Feature distribution handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::logic::distribution::{self, FeatureDistribution, DEFAULT_BINS};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct BinsQuery {
    pub bins: Option<usize>,
}

/// Feature columns selectable in the distribution explorer
pub async fn features(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.training.columns().to_vec())
}

/// Two-panel histogram of one feature with the client's value marked
pub async fn distribution(
    State(state): State<AppState>,
    Path((id, feature)): Path<(i64, String)>,
    Query(query): Query<BinsQuery>,
) -> AppResult<Json<FeatureDistribution>> {
    let record = state
        .clients
        .lookup(id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown client {id}")))?;

    let column = state
        .training
        .column_index(&feature)
        .ok_or_else(|| AppError::NotFound(format!("Unknown feature '{feature}'")))?;

    // The client table may carry fewer columns than the training table;
    // an absent value still renders both panels, just without a marker
    let client_value = record.get(&feature).unwrap_or(f64::NAN);

    Ok(Json(distribution::feature_distribution(
        &state.training,
        &feature,
        column,
        id,
        client_value,
        query.bins.unwrap_or(DEFAULT_BINS),
    )))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::logic::dataset::{ClientTable, TrainingSplit};
    use crate::logic::distribution::MAX_BINS;
    use crate::logic::explain::ExplanationStore;
    use crate::logic::scoring::ScoringClient;

    fn test_state() -> AppState {
        let mut clients_csv = NamedTempFile::new().unwrap();
        clients_csv
            .write_all(b"SK_ID_CURR,AMT_CREDIT,threshold\n100001,250000,0.3\n")
            .unwrap();
        clients_csv.flush().unwrap();

        let mut trainset_csv = NamedTempFile::new().unwrap();
        trainset_csv
            .write_all(
                b"AMT_CREDIT,TARGET\n100000,0\n200000,0\n300000,1\n400000,1\n500000,0\n",
            )
            .unwrap();
        trainset_csv.flush().unwrap();

        AppState {
            clients: Arc::new(ClientTable::load(clients_csv.path()).unwrap()),
            training: Arc::new(TrainingSplit::load(trainset_csv.path()).unwrap()),
            explanations: Arc::new(ExplanationStore {
                feature_names: vec!["AMT_CREDIT".to_string()],
                base_value: 0.1,
                entries: Vec::new(),
            }),
            scorer: Arc::new(ScoringClient::new("http://127.0.0.1:1/invocations")),
        }
    }

    #[tokio::test]
    async fn distribution_builds_both_panels_with_marker() {
        let state = test_state();

        let Json(dist) = distribution(
            State(state),
            Path((100001, "AMT_CREDIT".to_string())),
            Query(BinsQuery { bins: None }),
        )
        .await
        .unwrap();

        assert_eq!(dist.feature, "AMT_CREDIT");
        assert_eq!(dist.client_value, 250000.0);
        assert_eq!(dist.no_default.sample_count, 3);
        assert_eq!(dist.defaulted.sample_count, 2);
        // Default bin count matches the original dashboard
        assert_eq!(dist.no_default.counts.len(), 2);
        assert!(dist.readout.contains("AMT_CREDIT"));
        assert!(dist.readout.contains("100001"));
        assert!(dist.readout.contains("250000"));
    }

    #[tokio::test]
    async fn huge_bins_query_is_clamped_not_allocated() {
        let state = test_state();

        let Json(dist) = distribution(
            State(state),
            Path((100001, "AMT_CREDIT".to_string())),
            Query(BinsQuery {
                bins: Some(usize::MAX),
            }),
        )
        .await
        .unwrap();

        assert_eq!(dist.no_default.counts.len(), MAX_BINS);
        assert_eq!(dist.defaulted.counts.len(), MAX_BINS);
    }

    #[tokio::test]
    async fn unknown_feature_is_not_found() {
        let state = test_state();

        let err = distribution(
            State(state),
            Path((100001, "NO_SUCH_FEATURE".to_string())),
            Query(BinsQuery { bins: None }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
