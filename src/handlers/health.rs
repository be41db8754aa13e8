use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "reno-quote",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
///
/// Not ready while the upload directory cannot be created. The advisor is
/// optional and only reported.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let uploads_ready = tokio::fs::create_dir_all(state.uploads.dir()).await.is_ok();
    let status = if uploads_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(json!({
        "status": if uploads_ready { "ready" } else { "not_ready" },
        "service": "reno-quote",
        "analysis": if state.advisor.is_available() { "ai" } else { "rules" },
        "uploads": uploads_ready,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{advisor::DisabledAdvisor, config::Config};
    use std::sync::Arc;

    fn state_with_upload_dir(dir: &std::path::Path) -> AppState {
        let mut config = Config::default();
        config.uploads.dir = dir.to_string_lossy().to_string();
        AppState::with_advisor(&config, Arc::new(DisabledAdvisor))
    }

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_creates_upload_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");

        let response = readiness_check(State(state_with_upload_dir(&dir)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_readiness_fails_when_upload_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let response = readiness_check(State(state_with_upload_dir(file.path())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
