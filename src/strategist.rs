use async_trait::async_trait;

use crate::ai::gemini::GeminiClient;
use crate::ai::local;
use crate::config::Config;
use crate::error::{ConsultError, FallbackReason};

/// Keys shorter than this are treated as unset
pub const MIN_API_KEY_LEN: usize = 10;

/// A live text-generation backend for the strategist
#[async_trait]
pub trait StrategyBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ConsultError>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Live,
    Fallback(FallbackReason),
}

/// The answer shown to the visitor and where it came from
#[derive(Debug, Clone)]
pub struct Consultation {
    pub text: String,
    pub source: Source,
}

impl Consultation {
    fn fallback(prompt: &str, reason: FallbackReason) -> Self {
        Self {
            text: local::select_response(prompt).to_string(),
            source: Source::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, Source::Fallback(_))
    }
}

pub fn usable_api_key(key: Option<&str>) -> Option<&str> {
    let key = key?.trim();
    if key.len() < MIN_API_KEY_LEN || key == "not-configured" {
        None
    } else {
        Some(key)
    }
}

/// Answers strategist prompts from the live model, degrading to the canned catalog
pub struct Strategist {
    backend: Option<Box<dyn StrategyBackend>>,
}

impl Strategist {
    pub fn new(backend: Option<Box<dyn StrategyBackend>>) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &Config) -> Self {
        let backend = match usable_api_key(config.gemini_api_key.as_deref()) {
            Some(key) => {
                log::info!("✓ Gemini client configured ({})", config.gemini_model);
                let client = GeminiClient::new(
                    key.to_string(),
                    Some(config.gemini_base_url.clone()),
                    Some(config.gemini_model.clone()),
                    Some(config.gemini_temperature),
                    config.system_instruction.clone(),
                );
                Some(Box::new(client) as Box<dyn StrategyBackend>)
            }
            None => {
                log::warn!("⚠️ Gemini API key is missing, serving canned responses only");
                None
            }
        };
        Self::new(backend)
    }

    pub fn is_live(&self) -> bool {
        self.backend.is_some()
    }

    /// Single attempt against the backend; every failure falls back to the catalog.
    pub async fn consult(&self, prompt: &str) -> Consultation {
        let backend = match &self.backend {
            Some(backend) => backend,
            None => {
                let e = ConsultError::MissingApiKey;
                log::debug!("📡 {}, using canned response", e);
                return Consultation::fallback(prompt, e.kind());
            }
        };

        match backend.generate(prompt).await {
            Ok(text) => {
                log::debug!("📡 Answered by {}", backend.name());
                Consultation {
                    text,
                    source: Source::Live,
                }
            }
            Err(e) => {
                log::warn!("⚠️ {} failed ({}): {}", backend.name(), e.kind(), e);
                Consultation::fallback(prompt, e.kind())
            }
        }
    }
}
