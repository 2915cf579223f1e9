//! Score handler - the one route with a side effect
//!
//! Every request re-issues the outbound call to the scoring endpoint, even
//! for an unchanged selection; there is no memoization.

use axum::extract::{Path, State};
use axum::Json;

use crate::logic::scoring::ScoreDecision;
use crate::{AppError, AppResult, AppState};

/// Fetch the remote probability for one client and classify it against
/// the dataset threshold
pub async fn score(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ScoreDecision>> {
    // Reject unknown ids before going to the network
    state
        .clients
        .lookup(id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown client {id}")))?;

    let probability = state.scorer.predict(id).await?;
    let threshold = state.clients.threshold();

    Ok(Json(ScoreDecision::new(id, probability, threshold)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use tempfile::NamedTempFile;
    use tokio::net::TcpListener;

    use super::*;
    use crate::logic::dataset::{ClientTable, TrainingSplit};
    use crate::logic::explain::ExplanationStore;
    use crate::logic::scoring::{ScoringClient, Verdict};

    async fn spawn_mock(status: StatusCode, body: &'static str) -> String {
        let app =
            Router::new().route("/invocations", post(move || async move { (status, body) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/invocations")
    }

    fn test_state(scoring_url: String) -> AppState {
        let mut clients_csv = NamedTempFile::new().unwrap();
        clients_csv
            .write_all(b"SK_ID_CURR,DAYS_BIRTH,threshold\n100001,-15000,0.3\n")
            .unwrap();
        clients_csv.flush().unwrap();

        let mut trainset_csv = NamedTempFile::new().unwrap();
        trainset_csv
            .write_all(b"DAYS_BIRTH,TARGET\n-10000,0\n-11000,1\n")
            .unwrap();
        trainset_csv.flush().unwrap();

        AppState {
            clients: Arc::new(ClientTable::load(clients_csv.path()).unwrap()),
            training: Arc::new(TrainingSplit::load(trainset_csv.path()).unwrap()),
            explanations: Arc::new(ExplanationStore {
                feature_names: vec!["DAYS_BIRTH".to_string()],
                base_value: 0.1,
                entries: Vec::new(),
            }),
            scorer: Arc::new(ScoringClient::new(scoring_url)),
        }
    }

    #[tokio::test]
    async fn probability_below_threshold_is_accepted() {
        let url = spawn_mock(StatusCode::OK, r#"{"probability": 0.2}"#).await;
        let state = test_state(url);

        let Json(decision) = score(State(state), Path(100001)).await.unwrap();
        assert_eq!(decision.verdict, Verdict::Accepted);
        assert_eq!(decision.probability, 0.2);
        assert_eq!(decision.threshold, 0.3);
        assert!((decision.gauge.score_marker_pct - 20.0).abs() < 1e-12);
        assert!((decision.gauge.green_width_pct - 30.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn endpoint_failure_yields_no_verdict() {
        let url = spawn_mock(StatusCode::INTERNAL_SERVER_ERROR, "scorer down").await;
        let state = test_state(url);

        let err = score(State(state), Path(100001)).await.unwrap_err();
        match err {
            AppError::Scoring(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("scorer down"));
            }
            other => panic!("expected scoring error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_client_is_rejected_before_the_network_call() {
        // Unroutable endpoint: the handler must fail on the lookup alone
        let state = test_state("http://127.0.0.1:1/invocations".to_string());

        let err = score(State(state), Path(999999)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
