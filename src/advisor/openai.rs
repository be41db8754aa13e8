use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentBlock, ImageUrl, MessageContent};
use super::{parse_json_reply, AdvisorError, DesignAdvisor, FloorplanAdvice, FloorplanImage, StyleAdvice};
use crate::config::AiConfig;
use crate::style_test::{catalog, QuizAnswer};

const DESIGNER_PROMPT: &str =
    "You are a professional interior designer who analyzes clients' renovation style preferences.";

/// Advisor backed by an OpenAI-compatible chat completion endpoint.
pub struct OpenAiAdvisor {
    client: Client,
    base_url: String,
    api_key: String,
    style_model: String,
    vision_model: String,
    timeout: Duration,
}

impl OpenAiAdvisor {
    pub fn new(client: Client, config: &AiConfig, api_key: &str) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            style_model: config.style_model.clone(),
            vision_model: config.vision_model.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// POST a chat completion and return the reply text.
    async fn chat_completions(&self, request: &ChatCompletionRequest) -> Result<String, AdvisorError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AdvisorError::Upstream { status, message });
        }

        let body: ChatCompletionResponse = response.json().await?;
        body.first_text()
            .ok_or_else(|| AdvisorError::MalformedReply("reply has no choices".to_string()))
    }
}

#[async_trait]
impl DesignAdvisor for OpenAiAdvisor {
    fn is_available(&self) -> bool {
        true
    }

    async fn analyze_style(&self, answers: &[QuizAnswer]) -> Result<StyleAdvice, AdvisorError> {
        let request = ChatCompletionRequest {
            model: self.style_model.clone(),
            messages: vec![
                ChatMessage::system(DESIGNER_PROMPT),
                ChatMessage::user(MessageContent::Text(style_prompt(answers))),
            ],
            temperature: Some(0.7),
            max_tokens: Some(1000),
        };

        let text = self.chat_completions(&request).await?;
        parse_json_reply::<StyleAdvice>(&text)?.ensure_complete()
    }

    async fn analyze_floorplan(
        &self,
        image: &FloorplanImage,
    ) -> Result<FloorplanAdvice, AdvisorError> {
        let request = ChatCompletionRequest {
            model: self.vision_model.clone(),
            messages: vec![ChatMessage::user(MessageContent::Blocks(vec![
                ContentBlock::Text { text: floorplan_prompt(image) },
                ContentBlock::ImageUrl {
                    image_url: ImageUrl { url: image.data_url.clone() },
                },
            ]))],
            temperature: Some(0.7),
            max_tokens: Some(1500),
        };

        let text = self.chat_completions(&request).await?;
        parse_json_reply::<FloorplanAdvice>(&text)?.ensure_complete()
    }
}

/// Questionnaire answers rendered as question/answer pairs plus the expected reply shape.
pub fn style_prompt(answers: &[QuizAnswer]) -> String {
    let responses = answers
        .iter()
        .map(|answer| {
            let question = catalog::question(&answer.question_id);
            let option = question.and_then(|q| q.option(&answer.option_id));
            format!(
                "Question: {}\nAnswer: {}",
                question.map_or("unknown", |q| q.question),
                option.map_or("unknown", |o| o.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"Analyze the following answers to a renovation style questionnaire and produce a style report.
Answers:
{responses}

Reply with a JSON object containing:
1. topStyles: the two best matching styles among modern-minimalist, nordic, chinese-traditional, american and industrial, each with
   - style: style key
   - percentage: match percentage (integer 0-100)
   - description: style description
   - characteristics: array of 5 characteristics
   - suitableFor: who the style suits
2. allScores: every style with its style key and integer percentage
3. recommendations: array of 5 renovation recommendations for the best style

Reply with valid JSON only, without any other text."#
    )
}

pub fn floorplan_prompt(image: &FloorplanImage) -> String {
    let size = match (image.width, image.height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => format!("The image is {w}x{h} pixels.\n"),
        _ => String::new(),
    };

    format!(
        r#"Analyze this floorplan and give a detailed layout analysis with improvement suggestions.
{size}Identify the rooms (living room, bedroom, kitchen, bathroom and so on) and estimate their areas.
Identify layout problems such as poor lighting, limited space or an irregular layout.

Reply with a JSON object containing:
1. totalArea: estimated total area in square meters
2. rooms: array of rooms, each with
   - type: one of livingRoom, bedroom, kitchen, bathroom, diningRoom, studyRoom
   - name: room name
   - area: estimated area
   - tips: array of 4 layout tips for the room
3. issues: array of 2-3 layout problems, each with
   - key: identifier such as poorLighting or limitedSpace
   - name: problem name
   - tips: array of 4 improvement tips
4. generalRecommendations: array of 4 general recommendations

Reply with valid JSON only, without any other text."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_prompt_resolves_answers() {
        let answers = vec![
            QuizAnswer { question_id: "q1".to_string(), option_id: "c".to_string() },
            QuizAnswer { question_id: "q7".to_string(), option_id: "a".to_string() },
        ];
        let prompt = style_prompt(&answers);
        assert!(prompt.contains("Question: Which color family do you prefer?"));
        assert!(prompt.contains("Answer: Clean modern colors"));
        assert!(prompt.contains("Question: unknown"));
    }

    #[test]
    fn test_floorplan_prompt_includes_size_when_known() {
        let mut image = FloorplanImage {
            data_url: "data:image/png;base64,AA==".to_string(),
            width: Some(800),
            height: Some(600),
        };
        assert!(floorplan_prompt(&image).contains("800x600 pixels"));

        image.width = None;
        assert!(!floorplan_prompt(&image).contains("pixels"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = AiConfig {
            base_url: "http://localhost:9000/v1/".to_string(),
            ..AiConfig::default()
        };
        let advisor = OpenAiAdvisor::new(Client::new(), &config, "sk-test");
        assert_eq!(advisor.base_url, "http://localhost:9000/v1");
    }
}
