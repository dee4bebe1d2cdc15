use std::env;

use crate::ai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::services::briefing::DEFAULT_ENDPOINT;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_temperature: f32,
    pub gemini_base_url: String,
    pub system_instruction: String,
    pub briefing_endpoint: String,
}

pub fn default_system_instruction() -> String {
    "You are the LeverageWorks Virtual Strategist. Your tone is authoritative, restrained, and calm. \
    LeverageWorks was founded at the Haskayne School of Business EMBA program to close the divide \
    between AI capability and organizational readiness.\n\
    Rules:\n\
    1. Be punchy and benefit-driven.\n\
    2. Focus on architecture, leadership, and execution.\n\
    3. Avoid stock clichés or decorative language.\n\
    4. Max 120 words."
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }
}

impl Config {
    /// Builds the config from `get`, which returns the value of a variable if set.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let gemini_api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));

        let gemini_model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let gemini_temperature = get("GEMINI_TEMPERATURE")
            .and_then(|v| v.trim().parse::<f32>().ok())
            .filter(|t| t.is_finite())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let gemini_base_url =
            get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let briefing_endpoint =
            get("BRIEFING_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            gemini_api_key,
            gemini_model,
            gemini_temperature,
            gemini_base_url,
            system_instruction: default_system_instruction(),
            briefing_endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn api_key_falls_back_to_site_variable() {
        let cfg = config(&[("API_KEY", "AIzaSySiteKey123")]);
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("AIzaSySiteKey123"));
    }

    #[test]
    fn gemini_api_key_wins_over_site_variable() {
        let cfg = config(&[("GEMINI_API_KEY", "AIzaSyGeminiKey1"), ("API_KEY", "AIzaSySiteKey123")]);
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("AIzaSyGeminiKey1"));
    }

    #[test]
    fn unparsable_temperature_uses_default() {
        for raw in ["warm", "NaN", "inf", ""] {
            let cfg = config(&[("GEMINI_TEMPERATURE", raw)]);
            assert_eq!(cfg.gemini_temperature, DEFAULT_TEMPERATURE, "{raw}");
        }
        let cfg = config(&[("GEMINI_TEMPERATURE", "0.9")]);
        assert_eq!(cfg.gemini_temperature, 0.9);
    }

    #[test]
    fn unset_variables_use_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.gemini_api_key, None);
        assert_eq!(cfg.gemini_model, DEFAULT_MODEL);
        assert_eq!(cfg.gemini_temperature, DEFAULT_TEMPERATURE);
        assert_eq!(cfg.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.briefing_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.system_instruction, default_system_instruction());
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config(&[
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_BASE_URL", "http://127.0.0.1:8080"),
            ("BRIEFING_ENDPOINT", "http://127.0.0.1:8081/form"),
        ]);
        assert_eq!(cfg.gemini_model, "gemini-1.5-pro");
        assert_eq!(cfg.gemini_base_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.briefing_endpoint, "http://127.0.0.1:8081/form");
    }
}
