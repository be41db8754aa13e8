use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::style_report::AnalysisSource;

catalog_enum! {
    /// Room kinds recognized on a floorplan.
    pub enum RoomKind {
        LivingRoom => ("living-room", "Living room"),
        Bedroom => ("bedroom", "Bedroom"),
        Kitchen => ("kitchen", "Kitchen"),
        Bathroom => ("bathroom", "Bathroom"),
        DiningRoom => ("dining-room", "Dining room"),
        StudyRoom => ("study-room", "Study room"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysis {
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub name: String,
    /// Estimated area in square meters
    pub area: f64,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutIssue {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Layout analysis of an uploaded floorplan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorplanAnalysis {
    #[serde(rename = "_id")]
    pub id: String,
    pub floorplan_url: String,
    pub total_area: f64,
    pub rooms: Vec<RoomAnalysis>,
    pub issues: Vec<LayoutIssue>,
    pub general_recommendations: Vec<String>,
    pub source: AnalysisSource,
    pub created_at: DateTime<Utc>,
}
