use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::catalog::{self, profile};
use crate::error::ValidationError;
use crate::models::{AnalysisSource, Style, StyleReport, StyleScore, TopStyle};

/// Number of styles in the headline result.
const TOP_STYLE_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub option_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedStyle {
    pub style: Style,
    pub score: u32,
    pub percentage: u32,
}

/// Tally style tags over the answers, one entry per named style in
/// declaration order.
///
/// Answers that do not resolve to a known question and option score nothing
/// but still count toward the denominator.
pub fn tally(answers: &[QuizAnswer]) -> Result<Vec<RankedStyle>, ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::NoAnswers);
    }

    let mut scores = [0u32; Style::NAMED.len()];
    for answer in answers {
        let Some(option) =
            catalog::question(&answer.question_id).and_then(|q| q.option(&answer.option_id))
        else {
            continue;
        };
        for style in option.styles {
            if let Some(index) = Style::NAMED.iter().position(|s| s == style) {
                scores[index] += 1;
            }
        }
    }

    let max_score = (answers.len() * 2) as f64;
    Ok(Style::NAMED
        .iter()
        .zip(scores)
        .map(|(style, score)| RankedStyle {
            style: *style,
            score,
            percentage: (score as f64 / max_score * 100.0).round() as u32,
        })
        .collect())
}

/// Styles by score, highest first. Ties keep declaration order.
fn by_score(mut styles: Vec<RankedStyle>) -> Vec<RankedStyle> {
    // sort_by is stable
    styles.sort_by(|a, b| b.score.cmp(&a.score));
    styles
}

/// Rule-based style report.
pub fn score(answers: &[QuizAnswer]) -> Result<StyleReport, ValidationError> {
    let tallied = tally(answers)?;
    let ranked = by_score(tallied.clone());

    let top_styles = ranked
        .iter()
        .take(TOP_STYLE_COUNT)
        .map(|r| {
            let profile = profile(r.style);
            TopStyle {
                style: r.style,
                percentage: r.percentage,
                description: profile.description.to_string(),
                characteristics: profile.characteristics.iter().map(|c| c.to_string()).collect(),
                suitable_for: profile.suitable_for.to_string(),
            }
        })
        .collect();

    let recommendations = profile(ranked[0].style)
        .recommendations
        .iter()
        .map(|r| r.to_string())
        .collect();

    Ok(StyleReport {
        id: format!("style_{}", uuid::Uuid::new_v4().simple()),
        top_styles,
        all_scores: tallied
            .iter()
            .map(|r| StyleScore { style: r.style, percentage: r.percentage })
            .collect(),
        recommendations,
        source: AnalysisSource::Rules,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: &str, option_id: &str) -> QuizAnswer {
        QuizAnswer {
            question_id: question_id.to_string(),
            option_id: option_id.to_string(),
        }
    }

    #[test]
    fn test_empty_answers_rejected() {
        assert_eq!(score(&[]).unwrap_err(), ValidationError::NoAnswers);
    }

    #[test]
    fn test_industrial_leaning_answers() {
        // q1c: minimalist+industrial, q2d: industrial, q3d: industrial+minimalist,
        // q4b: industrial+minimalist, q5a: minimalist+industrial
        let answers = vec![
            answer("q1", "c"),
            answer("q2", "d"),
            answer("q3", "d"),
            answer("q4", "b"),
            answer("q5", "a"),
        ];
        let report = score(&answers).unwrap();

        assert_eq!(report.top_styles.len(), 2);
        assert_eq!(report.top_styles[0].style, Style::Industrial);
        assert_eq!(report.top_styles[0].percentage, 50);
        assert_eq!(report.top_styles[1].style, Style::ModernMinimalist);
        assert_eq!(report.top_styles[1].percentage, 40);
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(
            report.recommendations[0],
            profile(Style::Industrial).recommendations[0]
        );
        assert_eq!(report.source, AnalysisSource::Rules);
        assert_eq!(report.all_scores.len(), 5);
    }

    #[test]
    fn test_all_scores_follow_declaration_order() {
        // q2d: industrial only
        let report = score(&[answer("q2", "d")]).unwrap();
        assert_eq!(report.top_styles[0].style, Style::Industrial);

        let styles: Vec<Style> = report.all_scores.iter().map(|s| s.style).collect();
        assert_eq!(styles, Style::NAMED.to_vec());
        assert_eq!(report.all_scores[4].percentage, 50);
        assert_eq!(report.all_scores[0].percentage, 0);
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        // q2a: minimalist+nordic
        let ranked = by_score(tally(&[answer("q2", "a")]).unwrap());
        assert_eq!(ranked[0].style, Style::ModernMinimalist);
        assert_eq!(ranked[1].style, Style::Nordic);
        assert_eq!(ranked[0].percentage, 50);
        let rest: Vec<Style> = ranked[2..].iter().map(|r| r.style).collect();
        assert_eq!(rest, vec![Style::ChineseTraditional, Style::American, Style::Industrial]);
    }

    #[test]
    fn test_unresolvable_answers_count_in_denominator() {
        let ranked = tally(&[answer("q2", "d"), answer("q9", "a"), answer("q1", "z")]).unwrap();
        let industrial = ranked.iter().find(|r| r.style == Style::Industrial).unwrap();
        assert_eq!(industrial.score, 1);
        // 1 / 6 * 100 = 16.67
        assert_eq!(industrial.percentage, 17);
    }

    #[test]
    fn test_all_unresolvable_falls_back_to_first_style() {
        let report = score(&[answer("nope", "x")]).unwrap();
        assert_eq!(report.top_styles[0].style, Style::ModernMinimalist);
        assert_eq!(report.top_styles[0].percentage, 0);
    }
}
