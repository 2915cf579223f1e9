//! Credit Scoring Dashboard - service entry point
//!
//! Backend for a single-operator dashboard: a credit-relationship agent
//! selects a loan applicant, the service fetches the default-risk
//! probability from a remote scoring endpoint and serves the chart payloads
//! (verdict, gauge, attributions, feature distributions) the frontend
//! renders.
//!
//! All input datasets are loaded once here and held read-only for the whole
//! session; a missing or malformed file aborts startup.

mod api;
mod config;
pub mod constants;
mod error;
mod logic;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use logic::dataset::{ClientTable, Outcome, TrainingSplit};
use logic::explain::ExplanationStore;
use logic::scoring::ScoringClient;

pub use error::{AppError, AppResult};

/// Shared application state, immutable after load
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientTable>,
    pub training: Arc<TrainingSplit>,
    pub explanations: Arc<ExplanationStore>,
    pub scorer: Arc<ScoringClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoring_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Credit Scoring Dashboard v{} starting...", constants::APP_VERSION);
    tracing::info!("Scoring endpoint: {}", config.scoring_url);

    // Load the deployment artifacts; any failure here is fatal
    let clients = ClientTable::load(&config.clients_path)
        .with_context(|| format!("loading client table {}", config.clients_path.display()))?;
    tracing::info!(
        "Client table: {} clients, decision threshold {}",
        clients.len(),
        clients.threshold()
    );

    let training = TrainingSplit::load(&config.trainset_path)
        .with_context(|| format!("loading training table {}", config.trainset_path.display()))?;
    tracing::info!(
        "Training table: {} no-default rows, {} default rows",
        training.subset_len(Outcome::NoDefault),
        training.subset_len(Outcome::Defaulted)
    );

    let explanations = ExplanationStore::load(&config.explainer_path).with_context(|| {
        format!(
            "loading attribution artifact {}",
            config.explainer_path.display()
        )
    })?;
    if explanations.len() != clients.len() {
        tracing::warn!(
            "Attribution store has {} entries but the client table has {} rows; \
             positional attribution lookups may be misaligned",
            explanations.len(),
            clients.len()
        );
    }

    // Build application state
    let state = AppState {
        clients: Arc::new(clients),
        training: Arc::new(training),
        explanations: Arc::new(explanations),
        scorer: Arc::new(ScoringClient::new(config.scoring_url.clone())),
    };

    // Build router and serve
    let app = api::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Dashboard API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await.context("serving API")?;

    Ok(())
}
