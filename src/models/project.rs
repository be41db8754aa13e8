use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::requirement::Requirement;

/// A renovation project owning one or more requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self {
            id: format!("project_{}", uuid::Uuid::new_v4().simple()),
            name: name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "New Project".to_string()),
            description: description.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

/// Project view returned by the requirement listing endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithRequirements {
    #[serde(flatten)]
    pub project: Project,
    pub requirements: Vec<Requirement>,
}
