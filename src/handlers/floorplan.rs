use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::{
    advisor::{self, FloorplanImage},
    error::AppError,
    metrics,
    models::FloorplanAnalysis,
    state::AppState,
    uploads::{self, UploadError},
};

/// Multipart field carrying the file
const FILE_FIELD: &str = "floorplan";

/// Routes mounted under `/api/floorplan`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_analyses))
        .route("/analyze", post(analyze))
        .route("/:id", get(get_analysis))
}

struct FloorplanUpload {
    content_type: String,
    content: Vec<u8>,
    width: Option<u32>,
    height: Option<u32>,
}

async fn read_upload(mut multipart: Multipart) -> Result<FloorplanUpload, AppError> {
    let mut file = None;
    let mut width = None;
    let mut height = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let content = field.bytes().await?;
                file = Some((content_type, content.to_vec()));
            }
            Some("width") => width = field.text().await?.trim().parse().ok(),
            Some("height") => height = field.text().await?.trim().parse().ok(),
            _ => {}
        }
    }

    let (content_type, content) = file.ok_or(UploadError::MissingFile)?;
    Ok(FloorplanUpload {
        content_type,
        content,
        width,
        height,
    })
}

/// POST /api/floorplan/analyze
async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<FloorplanAnalysis>, AppError> {
    let upload = read_upload(multipart).await?;

    let stored = state
        .uploads
        .save(&upload.content_type, &upload.content)
        .await
        .inspect_err(|_| metrics::record_validation_error("upload"))?;

    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    let floorplan_url = state.uploads.file_url(host, &stored.file_name);

    let image = uploads::is_image(&stored.content_type).then(|| FloorplanImage {
        data_url: uploads::data_url(&stored.content_type, &upload.content),
        width: upload.width,
        height: upload.height,
    });

    let analysis = advisor::analyze_floorplan(
        state.advisor.as_ref(),
        state.advisor_wait,
        &floorplan_url,
        image.as_ref(),
        &upload.content,
    )
    .await;

    state.floorplans.insert(analysis.clone());
    metrics::record_floorplan_analysis(analysis.source.as_str());

    info!(
        analysis_id = %analysis.id,
        file = %stored.file_name,
        source = analysis.source.as_str(),
        rooms = analysis.rooms.len(),
        "Floorplan analyzed"
    );

    Ok(Json(analysis))
}

/// GET /api/floorplan
async fn list_analyses(State(state): State<AppState>) -> Json<Vec<FloorplanAnalysis>> {
    Json(state.floorplans.list())
}

/// GET /api/floorplan/:id
async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FloorplanAnalysis>, AppError> {
    state
        .floorplans
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Floorplan analysis {}", id)))
}
