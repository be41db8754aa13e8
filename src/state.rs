use std::sync::Arc;
use std::time::Duration;

use crate::advisor::{self, DesignAdvisor};
use crate::config::Config;
use crate::models::{Comparison, FloorplanAnalysis, Project, Quotation, Requirement, StyleReport};
use crate::store::{InMemoryRepository, Repository};
use crate::uploads::UploadStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn Repository<Project>>,
    pub requirements: Arc<dyn Repository<Requirement>>,
    pub quotations: Arc<dyn Repository<Quotation>>,
    pub comparisons: Arc<dyn Repository<Comparison>>,
    pub style_reports: Arc<dyn Repository<StyleReport>>,
    pub floorplans: Arc<dyn Repository<FloorplanAnalysis>>,
    pub advisor: Arc<dyn DesignAdvisor>,
    /// Upper bound on waiting for the advisor before falling back
    pub advisor_wait: Duration,
    pub uploads: Arc<UploadStore>,
}

impl AppState {
    /// In-memory state with the advisor described by `config`.
    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Self {
        Self::with_advisor(config, advisor::from_config(&config.ai, http_client))
    }

    pub fn with_advisor(config: &Config, advisor: Arc<dyn DesignAdvisor>) -> Self {
        Self {
            projects: Arc::new(InMemoryRepository::new()),
            requirements: Arc::new(InMemoryRepository::new()),
            quotations: Arc::new(InMemoryRepository::new()),
            comparisons: Arc::new(InMemoryRepository::new()),
            style_reports: Arc::new(InMemoryRepository::new()),
            floorplans: Arc::new(InMemoryRepository::new()),
            advisor,
            advisor_wait: Duration::from_secs(config.ai.timeout_seconds),
            uploads: Arc::new(UploadStore::new(&config.uploads)),
        }
    }
}
