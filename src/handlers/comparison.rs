use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::{comparison, error::AppError, metrics, models::Comparison, state::AppState};

/// Routes mounted under `/api/comparison`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comparisons).post(create_comparison))
        .route("/:id", get(get_comparison))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComparisonRequest {
    #[serde(default)]
    pub quotation_ids: Vec<String>,
    pub name: Option<String>,
}

/// POST /api/comparison
///
/// Unknown quotation ids are dropped; fewer than two resolved quotations is a
/// validation failure.
async fn create_comparison(
    State(state): State<AppState>,
    Json(req): Json<CreateComparisonRequest>,
) -> Result<(StatusCode, Json<Comparison>), AppError> {
    let quotations: Vec<_> = req
        .quotation_ids
        .iter()
        .filter_map(|id| state.quotations.get(id))
        .collect();

    let dropped = req.quotation_ids.len() - quotations.len();
    if dropped > 0 {
        tracing::debug!(dropped, "Ignoring unknown quotation ids");
    }

    let comparison = comparison::compare(quotations, req.name).inspect_err(|_| {
        metrics::record_validation_error("comparison");
    })?;

    state.comparisons.insert(comparison.clone());
    metrics::record_comparison(comparison.quotations.len());

    info!(
        comparison_id = %comparison.id,
        quotations = comparison.quotations.len(),
        "Comparison created"
    );

    Ok((StatusCode::CREATED, Json(comparison)))
}

/// GET /api/comparison
async fn list_comparisons(State(state): State<AppState>) -> Json<Vec<Comparison>> {
    Json(state.comparisons.list())
}

/// GET /api/comparison/:id
async fn get_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Comparison>, AppError> {
    state
        .comparisons
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Comparison {}", id)))
}
