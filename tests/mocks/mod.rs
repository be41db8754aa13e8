#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const API_KEY: &str = "sk-test-advisor-key";

/// Chat completion response whose single choice carries `content`
pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-test",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn style_reply() -> String {
    let report = json!({
        "topStyles": [
            {
                "style": "nordic",
                "percentage": 72,
                "description": "Bright, natural and cosy",
                "characteristics": ["Wood", "White walls", "Plants", "Textiles", "Daylight"],
                "suitableFor": "Families who enjoy a calm home"
            },
            {
                "style": "Modern Minimalist",
                "percentage": 55,
                "description": "Clean lines",
                "characteristics": ["Neutral palette"],
                "suitableFor": "Busy professionals"
            }
        ],
        "allScores": [
            { "style": "nordic", "percentage": 72 },
            { "style": "modern-minimalist", "percentage": 55 }
        ],
        "recommendations": ["Use light oak flooring", "Keep windows clear"]
    });
    format!("Sure! Here is the report:\n```json\n{}\n```", report)
}

pub fn floorplan_reply() -> String {
    json!({
        "totalArea": 88.5,
        "rooms": [
            { "type": "livingRoom", "name": "Living room", "area": 30.5, "tips": ["Keep it open"] },
            { "type": "bedroom", "name": "Bedroom", "area": 14, "tips": [] }
        ],
        "issues": [
            { "key": "poorLighting", "name": "Poor lighting", "tips": ["Use mirrors"] }
        ],
        "generalRecommendations": ["Plan circulation"]
    })
    .to_string()
}

/// Mock chat completion endpoint answering every authorized request with `content`
pub async fn setup_advisor_mock(content: String, latency_ms: u64) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(latency_ms))
                .set_body_json(chat_completion(&content)),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

/// Mock that only answers vision requests carrying an inline image
pub async fn setup_vision_mock() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("data:image/png;base64,"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(&floorplan_reply())))
        .expect(1)
        .mount(&mock_server)
        .await;

    mock_server
}

/// Mock returning an upstream error
pub async fn setup_failing_mock(status: u16) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "error": { "message": "Service temporarily unavailable", "type": "server_error" }
        })))
        .mount(&mock_server)
        .await;

    mock_server
}
