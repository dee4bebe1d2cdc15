use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ConsultError;
use crate::strategist::StrategyBackend;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    system_instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`, if present and not blank
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        temperature: Option<f32>,
        system_instruction: String,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: temperature
                .filter(|t| t.is_finite())
                .unwrap_or(DEFAULT_TEMPERATURE)
                .clamp(0.0, 2.0),
            system_instruction,
        }
    }

    pub fn build_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: self.system_instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Sends one request and returns the first candidate's text. Never retries.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, ConsultError> {
        let request = self.build_request(prompt);

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::error!("Gemini API error ({}): {}", status, text);
            return Err(ConsultError::Status { status, body: text });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)?;
        parsed
            .text()
            .map(str::to_string)
            .ok_or(ConsultError::MissingText)
    }
}

#[async_trait]
impl StrategyBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ConsultError> {
        self.generate_content(prompt).await
    }

    fn name(&self) -> &str {
        &self.model
    }
}
