//! Client selector and profile handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::logic::profile::{self, ClientProfile};
use crate::{AppError, AppResult, AppState};

/// Selector options: every identifier in table index order, plus the
/// decision threshold the frontend needs for the gauge legend
#[derive(Debug, Serialize)]
pub struct ClientIndex {
    pub ids: Vec<i64>,
    pub threshold: f64,
}

/// List selectable clients
pub async fn list(State(state): State<AppState>) -> Json<ClientIndex> {
    Json(ClientIndex {
        ids: state.clients.ids().to_vec(),
        threshold: state.clients.threshold(),
    })
}

/// Sidebar profile for one client
pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ClientProfile>> {
    let record = state
        .clients
        .lookup(id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown client {id}")))?;

    let profile = profile::build(&record).ok_or_else(|| {
        AppError::InternalError("Client table is missing profile columns".to_string())
    })?;

    Ok(Json(profile))
}
