use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::requirement::Style;

/// Which engine produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Ai,
    Rules,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Rules => "rules",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStyle {
    pub style: Style,
    pub percentage: u32,
    pub description: String,
    pub characteristics: Vec<String>,
    pub suitable_for: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleScore {
    pub style: Style,
    pub percentage: u32,
}

/// Result of a style-preference quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleReport {
    #[serde(rename = "_id")]
    pub id: String,
    pub top_styles: Vec<TopStyle>,
    pub all_scores: Vec<StyleScore>,
    pub recommendations: Vec<String>,
    pub source: AnalysisSource,
    pub created_at: DateTime<Utc>,
}
