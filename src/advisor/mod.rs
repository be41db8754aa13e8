//! Optional AI design advisor.
//!
//! The advisor is consulted before the deterministic engines; any failure is
//! logged and replaced by the rule-based result (see [`fallback`]).

pub mod chat;
pub mod fallback;
pub mod openai;

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AiConfig;
use crate::models::{LayoutIssue, RoomAnalysis, StyleScore, TopStyle};
use crate::style_test::QuizAnswer;

pub use fallback::{analyze_floorplan, analyze_style};
pub use openai::OpenAiAdvisor;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("advisor is not configured")]
    Unavailable,
    #[error("advisor did not answer within {0:?}")]
    Timeout(Duration),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("advisor returned status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("malformed advisor reply: {0}")]
    MalformedReply(String),
    #[error("advisor reply is missing {0}")]
    Incomplete(&'static str),
}

impl AdvisorError {
    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Timeout(_) => "timeout",
            Self::Http(_) => "http",
            Self::Upstream { .. } => "upstream",
            Self::MalformedReply(_) => "malformed",
            Self::Incomplete(_) => "incomplete",
        }
    }
}

/// Style report as proposed by the advisor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAdvice {
    #[serde(default)]
    pub top_styles: Vec<TopStyle>,
    #[serde(default)]
    pub all_scores: Vec<StyleScore>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl StyleAdvice {
    pub fn ensure_complete(self) -> Result<Self, AdvisorError> {
        if self.top_styles.is_empty() {
            return Err(AdvisorError::Incomplete("topStyles"));
        }
        if self.all_scores.is_empty() {
            return Err(AdvisorError::Incomplete("allScores"));
        }
        if self.recommendations.is_empty() {
            return Err(AdvisorError::Incomplete("recommendations"));
        }
        Ok(self)
    }
}

/// Floorplan layout analysis as proposed by the advisor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorplanAdvice {
    #[serde(default)]
    pub total_area: f64,
    #[serde(default)]
    pub rooms: Vec<RoomAnalysis>,
    #[serde(default)]
    pub issues: Vec<LayoutIssue>,
    #[serde(default)]
    pub general_recommendations: Vec<String>,
}

impl FloorplanAdvice {
    /// Require at least one room; a missing total is derived from the rooms.
    pub fn ensure_complete(mut self) -> Result<Self, AdvisorError> {
        if self.rooms.is_empty() {
            return Err(AdvisorError::Incomplete("rooms"));
        }
        if !(self.total_area.is_finite() && self.total_area > 0.0) {
            self.total_area = self.rooms.iter().map(|r| r.area).sum();
        }
        Ok(self)
    }
}

/// Image handed to the vision model.
#[derive(Debug, Clone)]
pub struct FloorplanImage {
    /// base64 `data:` URL of the uploaded file
    pub data_url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[async_trait]
pub trait DesignAdvisor: Send + Sync + 'static {
    /// Whether calls can be attempted at all
    fn is_available(&self) -> bool;

    async fn analyze_style(&self, answers: &[QuizAnswer]) -> Result<StyleAdvice, AdvisorError>;

    async fn analyze_floorplan(
        &self,
        image: &FloorplanImage,
    ) -> Result<FloorplanAdvice, AdvisorError>;
}

/// Advisor used when AI analysis is switched off.
pub struct DisabledAdvisor;

#[async_trait]
impl DesignAdvisor for DisabledAdvisor {
    fn is_available(&self) -> bool {
        false
    }

    async fn analyze_style(&self, _answers: &[QuizAnswer]) -> Result<StyleAdvice, AdvisorError> {
        Err(AdvisorError::Unavailable)
    }

    async fn analyze_floorplan(
        &self,
        _image: &FloorplanImage,
    ) -> Result<FloorplanAdvice, AdvisorError> {
        Err(AdvisorError::Unavailable)
    }
}

/// Build the advisor described by the configuration.
pub fn from_config(config: &AiConfig, client: reqwest::Client) -> Arc<dyn DesignAdvisor> {
    match config.api_key.as_deref() {
        Some(api_key) if config.is_configured() => {
            Arc::new(OpenAiAdvisor::new(client, config, api_key))
        }
        _ => Arc::new(DisabledAdvisor),
    }
}

/// Outermost `{ ... }` span, across lines
static JSON_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Deserialize the first `{ ... }` span of a free-text model reply.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, AdvisorError> {
    let json = JSON_OBJECT_RE
        .find(text)
        .ok_or_else(|| AdvisorError::MalformedReply("no JSON object in reply".to_string()))?;

    serde_json::from_str(json.as_str()).map_err(|e| AdvisorError::MalformedReply(e.to_string()))
}
