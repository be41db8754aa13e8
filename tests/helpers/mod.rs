#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use reno_quote::{
    advisor::{DesignAdvisor, DisabledAdvisor},
    config::Config,
    server::create_router,
    state::AppState,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "reno-quote-test-boundary";

/// Router over fresh in-memory state with uploads in a temporary directory.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub upload_dir: TempDir,
}

pub fn test_config(upload_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.uploads.dir = upload_dir.path().to_string_lossy().to_string();
    config.uploads.max_file_size = 4096;
    config
}

pub fn test_app() -> TestApp {
    test_app_with_advisor(Arc::new(DisabledAdvisor))
}

pub fn test_app_with_advisor(advisor: Arc<dyn DesignAdvisor>) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("tempdir");
    let state = AppState::with_advisor(&test_config(&upload_dir), advisor);
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let router = create_router(state.clone(), Arc::new(recorder.handle()));

    TestApp {
        router,
        state,
        upload_dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("router");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).to_string())
            })
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request(Method::PUT, uri, body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// One part of a multipart/form-data body
pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub content: &'a [u8],
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let disposition = match part.file_name {
            Some(file_name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.name, file_name
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
        };
        body.extend_from_slice(disposition.as_bytes());
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn floorplan_part<'a>(content_type: &'a str, content: &'a [u8]) -> Part<'a> {
    Part {
        name: "floorplan",
        file_name: Some("plan.bin"),
        content_type: Some(content_type),
        content,
    }
}

/// Requirement body for the reference 100 m² modern minimalist flat
pub fn reference_requirement() -> Value {
    serde_json::json!({
        "projectName": "City flat",
        "projectDescription": "Two bedrooms",
        "basicInfo": { "area": 100, "roomType": "whole-house" },
        "stylePreferences": { "style": "modern-minimalist", "colorPreference": "neutral" },
        "materialChoices": {
            "floorMaterial": "wood-floor",
            "wallMaterial": "latex-paint",
            "kitchenBathroomMaterial": "standard-counter",
            "doorWindowMaterial": "composite-door"
        }
    })
}
