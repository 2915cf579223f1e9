//! Scoring API Client
//!
//! HTTP client for the remote scoring endpoint. One request per client
//! selection, no caching, no retry. The endpoint answers with the
//! pre-computed default-risk probability for the requested client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body sent to the scoring endpoint
#[derive(Debug, Serialize)]
struct ScoreRequest {
    client_choice: i64,
}

/// The endpoint answers with a single probability, either bare or wrapped
/// in an object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProbabilityBody {
    Bare(f64),
    Wrapped { probability: f64 },
}

impl ProbabilityBody {
    fn value(self) -> f64 {
        match self {
            Self::Bare(p) => p,
            Self::Wrapped { probability } => probability,
        }
    }
}

/// Scoring client errors
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("scoring request failed with status {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("scoring endpoint unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not parse probability from scoring response {body:?}: {source}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Scoring API client
#[derive(Debug, Clone)]
pub struct ScoringClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ScoringClient {
    /// Create a client for the given endpoint URL.
    ///
    /// Deliberately configured without a request timeout; a stalled
    /// endpoint stalls the request, not the process.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Request the default-risk probability for one client.
    ///
    /// Success is strictly HTTP 200; any other status is an error carrying
    /// the status code and the raw response body.
    pub async fn predict(&self, client_id: i64) -> Result<f64, ScoreError> {
        tracing::debug!("Requesting score for client {}", client_id);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&ScoreRequest {
                client_choice: client_id,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ScoreError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ProbabilityBody =
            serde_json::from_str(&body).map_err(|source| ScoreError::Parse {
                body: body.clone(),
                source,
            })?;

        Ok(parsed.value())
    }
}
