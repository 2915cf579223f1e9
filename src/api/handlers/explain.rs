//! Attribution chart handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::logic::explain::{GlobalFeature, LocalAttribution};
use crate::{AppError, AppResult, AppState};

/// Local attribution waterfall for one client.
///
/// The attribution store is positionally aligned with the client table, so
/// the entry is selected by the client's position in index order.
pub async fn local(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LocalAttribution>> {
    let record = state
        .clients
        .lookup(id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown client {id}")))?;

    let attribution = state
        .explanations
        .local(record.position)
        .ok_or_else(|| AppError::NotFound(format!("No attribution entry for client {id}")))?;

    Ok(Json(attribution))
}

/// Global importance ranking across all clients
pub async fn global(State(state): State<AppState>) -> Json<Vec<GlobalFeature>> {
    Json(state.explanations.global_summary())
}
