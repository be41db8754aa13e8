use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use super::{AdvisorError, DesignAdvisor, FloorplanImage};
use crate::error::ValidationError;
use crate::floorplan;
use crate::metrics;
use crate::models::{AnalysisSource, FloorplanAnalysis, StyleReport};
use crate::style_test::{self, QuizAnswer};

/// Await an advisor call for at most `wait`. Failures are logged and yield `None`.
async fn consult<T, F>(operation: &'static str, wait: Duration, call: F) -> Option<T>
where
    F: Future<Output = Result<T, AdvisorError>>,
{
    let result = tokio::time::timeout(wait, call)
        .await
        .unwrap_or(Err(AdvisorError::Timeout(wait)));

    match result {
        Ok(value) => {
            metrics::record_advisor_outcome(operation, "success");
            Some(value)
        }
        Err(e) => {
            warn!(operation, error = %e, "Advisor failed, falling back to rule-based analysis");
            metrics::record_advisor_outcome(operation, e.kind());
            None
        }
    }
}

/// Style report from the advisor when it answers usefully, otherwise from the rule scorer.
pub async fn analyze_style(
    advisor: &dyn DesignAdvisor,
    wait: Duration,
    answers: &[QuizAnswer],
) -> Result<StyleReport, ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::NoAnswers);
    }

    if advisor.is_available() {
        if let Some(advice) = consult("style", wait, advisor.analyze_style(answers)).await {
            info!(answers = answers.len(), "Style report produced by advisor");
            return Ok(StyleReport {
                id: format!("style_{}", uuid::Uuid::new_v4().simple()),
                top_styles: advice.top_styles,
                all_scores: advice.all_scores,
                recommendations: advice.recommendations,
                source: AnalysisSource::Ai,
                created_at: Utc::now(),
            });
        }
    }

    style_test::score(answers)
}

/// Floorplan analysis from the advisor for images, otherwise the seeded heuristic.
///
/// `image` is `None` for uploads the vision model cannot read, such as PDFs.
pub async fn analyze_floorplan(
    advisor: &dyn DesignAdvisor,
    wait: Duration,
    floorplan_url: &str,
    image: Option<&FloorplanImage>,
    content: &[u8],
) -> FloorplanAnalysis {
    let id = format!("floorplan_{}", uuid::Uuid::new_v4().simple());

    if let Some(image) = image.filter(|_| advisor.is_available()) {
        if let Some(advice) = consult("floorplan", wait, advisor.analyze_floorplan(image)).await {
            return FloorplanAnalysis {
                id,
                floorplan_url: floorplan_url.to_string(),
                total_area: advice.total_area,
                rooms: advice.rooms,
                issues: advice.issues,
                general_recommendations: advice.general_recommendations,
                source: AnalysisSource::Ai,
                created_at: Utc::now(),
            };
        }
    }

    let heuristic = floorplan::analyze(content);
    FloorplanAnalysis {
        id,
        floorplan_url: floorplan_url.to_string(),
        total_area: heuristic.total_area,
        rooms: heuristic.rooms,
        issues: heuristic.issues,
        general_recommendations: heuristic.general_recommendations,
        source: AnalysisSource::Rules,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{DisabledAdvisor, FloorplanAdvice, StyleAdvice};
    use crate::models::{RoomAnalysis, RoomKind, Style, StyleScore, TopStyle};
    use async_trait::async_trait;

    /// Scripted advisor for exercising the fallback paths.
    enum StubAdvisor {
        Answers,
        Fails,
        Hangs,
    }

    #[async_trait]
    impl DesignAdvisor for StubAdvisor {
        fn is_available(&self) -> bool {
            true
        }

        async fn analyze_style(&self, _answers: &[QuizAnswer]) -> Result<StyleAdvice, AdvisorError> {
            match self {
                Self::Answers => Ok(StyleAdvice {
                    top_styles: vec![TopStyle {
                        style: Style::Nordic,
                        percentage: 90,
                        description: "Light and natural".to_string(),
                        characteristics: vec!["Wood".to_string()],
                        suitable_for: "Families".to_string(),
                    }],
                    all_scores: vec![StyleScore { style: Style::Nordic, percentage: 90 }],
                    recommendations: vec!["Use oak".to_string()],
                }),
                Self::Fails => Err(AdvisorError::Upstream { status: 500, message: "boom".to_string() }),
                Self::Hangs => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(AdvisorError::Unavailable)
                }
            }
        }

        async fn analyze_floorplan(
            &self,
            _image: &FloorplanImage,
        ) -> Result<FloorplanAdvice, AdvisorError> {
            match self {
                Self::Answers => Ok(FloorplanAdvice {
                    total_area: 42.0,
                    rooms: vec![RoomAnalysis {
                        kind: RoomKind::StudyRoom,
                        name: "Study".to_string(),
                        area: 42.0,
                        tips: vec![],
                    }],
                    issues: vec![],
                    general_recommendations: vec![],
                }),
                _ => Err(AdvisorError::MalformedReply("not json".to_string())),
            }
        }
    }

    fn answers() -> Vec<QuizAnswer> {
        vec![QuizAnswer { question_id: "q2".to_string(), option_id: "d".to_string() }]
    }

    fn image() -> FloorplanImage {
        FloorplanImage { data_url: "data:image/png;base64,AA==".to_string(), width: None, height: None }
    }

    #[tokio::test]
    async fn test_style_uses_advisor_reply() {
        let report = analyze_style(&StubAdvisor::Answers, Duration::from_secs(1), &answers())
            .await
            .unwrap();
        assert_eq!(report.source, AnalysisSource::Ai);
        assert_eq!(report.top_styles[0].style, Style::Nordic);
    }

    #[tokio::test]
    async fn test_style_falls_back_on_failure() {
        let report = analyze_style(&StubAdvisor::Fails, Duration::from_secs(1), &answers())
            .await
            .unwrap();
        assert_eq!(report.source, AnalysisSource::Rules);
        assert_eq!(report.top_styles[0].style, Style::Industrial);
    }

    #[tokio::test]
    async fn test_style_falls_back_on_timeout() {
        let report = analyze_style(&StubAdvisor::Hangs, Duration::from_millis(50), &answers())
            .await
            .unwrap();
        assert_eq!(report.source, AnalysisSource::Rules);
    }

    #[tokio::test]
    async fn test_style_rejects_empty_answers_before_advisor() {
        let err = analyze_style(&StubAdvisor::Answers, Duration::from_secs(1), &[])
            .await
            .unwrap_err();
        assert_eq!(err, ValidationError::NoAnswers);
    }

    #[tokio::test]
    async fn test_floorplan_paths() {
        let wait = Duration::from_secs(1);
        let url = "/uploads/floorplan-1-2.png";

        let ai = analyze_floorplan(&StubAdvisor::Answers, wait, url, Some(&image()), b"png").await;
        assert_eq!(ai.source, AnalysisSource::Ai);
        assert_eq!(ai.total_area, 42.0);
        assert_eq!(ai.floorplan_url, url);

        let pdf = analyze_floorplan(&StubAdvisor::Answers, wait, url, None, b"%PDF").await;
        assert_eq!(pdf.source, AnalysisSource::Rules);
        assert_eq!(pdf.rooms.len(), 5);

        let failed = analyze_floorplan(&StubAdvisor::Fails, wait, url, Some(&image()), b"png").await;
        assert_eq!(failed.source, AnalysisSource::Rules);

        let disabled = analyze_floorplan(&DisabledAdvisor, wait, url, Some(&image()), b"png").await;
        assert_eq!(disabled.source, AnalysisSource::Rules);
        assert_eq!(disabled.total_area, failed.total_area);
    }
}
