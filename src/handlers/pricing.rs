use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{AppError, ValidationError},
    metrics,
    models::Quotation,
    pricing::{self, CostBreakdown},
    state::AppState,
};

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quotations))
        .route("/calculate", post(calculate))
        .route("/project/:project_id", get(list_project_quotations))
        .route("/:id", get(get_quotation))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub requirement_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub quotation: Quotation,
    pub summary: CostBreakdown,
}

/// POST /api/pricing/calculate
async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    let requirement_id = req
        .requirement_id
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingField("requirementId"))?;

    let requirement = state
        .requirements
        .get(&requirement_id)
        .ok_or_else(|| AppError::NotFound(format!("Requirement {}", requirement_id)))?;

    let quotation = pricing::calculate(&requirement).inspect_err(|e| {
        metrics::record_validation_error("pricing");
        tracing::debug!(requirement_id = %requirement_id, error = %e, "Requirement rejected");
    })?;
    let summary = CostBreakdown::from(&quotation);

    state.quotations.insert(quotation.clone());
    metrics::record_quotation(requirement.style().as_str());

    info!(
        quotation_id = %quotation.id,
        requirement_id = %requirement_id,
        total_price = quotation.total_price,
        "Quotation calculated"
    );

    Ok(Json(CalculateResponse { quotation, summary }))
}

/// GET /api/pricing
async fn list_quotations(State(state): State<AppState>) -> Json<Vec<Quotation>> {
    Json(state.quotations.list())
}

/// GET /api/pricing/project/:project_id
async fn list_project_quotations(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Json<Vec<Quotation>> {
    Json(
        state
            .quotations
            .find(&|q: &Quotation| q.project_id == project_id),
    )
}

/// GET /api/pricing/:id
async fn get_quotation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Quotation>, AppError> {
    state
        .quotations
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Quotation {}", id)))
}
