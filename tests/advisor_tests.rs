//! AI advisor against a mocked chat completion endpoint.

mod helpers;
mod mocks;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use reno_quote::{
    advisor::{self, AdvisorError, DesignAdvisor, FloorplanImage, OpenAiAdvisor},
    config::AiConfig,
    models::{AnalysisSource, RoomKind, Style},
    style_test::QuizAnswer,
};
use serde_json::json;
use wiremock::MockServer;

use helpers::{floorplan_part, multipart_request, test_app_with_advisor};
use mocks::{floorplan_reply, setup_advisor_mock, setup_failing_mock, setup_vision_mock, style_reply, API_KEY};

fn advisor_for(mock_server: &MockServer) -> OpenAiAdvisor {
    let config = AiConfig {
        enabled: true,
        api_key: Some(API_KEY.to_string()),
        base_url: format!("{}/v1/", mock_server.uri()),
        timeout_seconds: 5,
        ..AiConfig::default()
    };
    OpenAiAdvisor::new(reqwest::Client::new(), &config, API_KEY)
}

fn answers() -> Vec<QuizAnswer> {
    vec![
        QuizAnswer { question_id: "q1".to_string(), option_id: "b".to_string() },
        QuizAnswer { question_id: "q2".to_string(), option_id: "a".to_string() },
    ]
}

fn png_image() -> FloorplanImage {
    FloorplanImage {
        data_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        width: Some(800),
        height: Some(600),
    }
}

#[tokio::test]
async fn test_style_advice_from_chat_completion() {
    let mock_server = setup_advisor_mock(style_reply(), 0).await;
    let advisor = advisor_for(&mock_server);

    let advice = advisor.analyze_style(&answers()).await.unwrap();
    assert_eq!(advice.top_styles.len(), 2);
    assert_eq!(advice.top_styles[0].style, Style::Nordic);
    assert_eq!(advice.top_styles[1].style, Style::ModernMinimalist);
    assert_eq!(advice.all_scores[0].percentage, 72);
    assert_eq!(advice.recommendations.len(), 2);
}

#[tokio::test]
async fn test_floorplan_advice_sends_inline_image() {
    let mock_server = setup_vision_mock().await;
    let advisor = advisor_for(&mock_server);

    let advice = advisor.analyze_floorplan(&png_image()).await.unwrap();
    assert_eq!(advice.total_area, 88.5);
    assert_eq!(advice.rooms[0].kind, RoomKind::LivingRoom);
    assert_eq!(advice.issues[0].key, "poorLighting");
}

#[tokio::test]
async fn test_wrong_key_is_rejected_upstream() {
    let mock_server = setup_advisor_mock(style_reply(), 0).await;
    let config = AiConfig {
        enabled: true,
        api_key: Some("sk-wrong".to_string()),
        base_url: format!("{}/v1", mock_server.uri()),
        ..AiConfig::default()
    };
    let advisor = OpenAiAdvisor::new(reqwest::Client::new(), &config, "sk-wrong");

    let err = advisor.analyze_style(&answers()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::Upstream { status: 404, .. }));
}

#[tokio::test]
async fn test_upstream_error_falls_back_to_rules() {
    let mock_server = setup_failing_mock(503).await;
    let advisor = advisor_for(&mock_server);

    let err = advisor.analyze_style(&answers()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::Upstream { status: 503, .. }));

    let report = advisor::analyze_style(&advisor, Duration::from_secs(5), &answers())
        .await
        .unwrap();
    assert_eq!(report.source, AnalysisSource::Rules);
    assert_eq!(report.top_styles[0].style, Style::Nordic);

    let analysis = advisor::analyze_floorplan(
        &advisor,
        Duration::from_secs(5),
        "/uploads/plan.png",
        Some(&png_image()),
        b"plan",
    )
    .await;
    assert_eq!(analysis.source, AnalysisSource::Rules);
    assert_eq!(analysis.rooms.len(), 5);
}

#[tokio::test]
async fn test_unparseable_reply_falls_back_to_rules() {
    let mock_server = setup_advisor_mock("I am unable to analyze this.".to_string(), 0).await;
    let advisor = advisor_for(&mock_server);

    let err = advisor.analyze_style(&answers()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::MalformedReply(_)));

    let report = advisor::analyze_style(&advisor, Duration::from_secs(5), &answers())
        .await
        .unwrap();
    assert_eq!(report.source, AnalysisSource::Rules);
}

#[tokio::test]
async fn test_incomplete_reply_falls_back_to_rules() {
    let mock_server =
        setup_advisor_mock(json!({ "recommendations": ["Paint it white"] }).to_string(), 0).await;
    let advisor = advisor_for(&mock_server);

    let err = advisor.analyze_style(&answers()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::Incomplete(_)));
}

#[tokio::test]
async fn test_slow_advisor_is_abandoned() {
    let mock_server = setup_advisor_mock(style_reply(), 3_000).await;
    let advisor = advisor_for(&mock_server);

    let started = std::time::Instant::now();
    let report = advisor::analyze_style(&advisor, Duration::from_millis(200), &answers())
        .await
        .unwrap();

    assert_eq!(report.source, AnalysisSource::Rules);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_api_serves_advisor_reports() {
    let mock_server = setup_advisor_mock(style_reply(), 0).await;
    let app = test_app_with_advisor(Arc::new(advisor_for(&mock_server)));

    let (status, report) = app
        .post_json(
            "/api/style-test/analyze",
            json!({ "answers": [{ "questionId": "q1", "optionId": "b" }] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["source"], "ai");
    assert_eq!(report["topStyles"][0]["style"], "nordic");
    assert_eq!(report["topStyles"][0]["percentage"], 72);

    let (status, _) = app
        .post_json("/api/style-test/analyze", json!({ "answers": [] }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_floorplan_with_vision_model() {
    let mock_server = setup_vision_mock().await;
    let app = test_app_with_advisor(Arc::new(advisor_for(&mock_server)));

    let (status, analysis) = app
        .send(multipart_request(
            "/api/floorplan/analyze",
            &[floorplan_part("image/png", b"\x89PNG\r\n\x1a\nplan")],
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", analysis);
    assert_eq!(analysis["source"], "ai");
    assert_eq!(analysis["totalArea"].as_f64(), Some(88.5));
    assert_eq!(analysis["rooms"][1]["type"], "bedroom");

    let (status, pdf) = app
        .send(multipart_request(
            "/api/floorplan/analyze",
            &[floorplan_part("application/pdf", b"%PDF-1.4")],
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pdf["source"], "rules");
}

#[test]
fn test_floorplan_reply_is_valid_advice() {
    let advice: advisor::FloorplanAdvice = advisor::parse_json_reply(&floorplan_reply()).unwrap();
    assert!(advice.ensure_complete().is_ok());
}
