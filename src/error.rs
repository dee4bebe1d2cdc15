use std::fmt;

use thiserror::Error;

/// Why a consultation was served from the canned catalog instead of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    MissingApiKey,
    Network,
    Status,
    Decode,
    MissingText,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FallbackReason::MissingApiKey => "missing api key",
            FallbackReason::Network => "network failure",
            FallbackReason::Status => "non-success status",
            FallbackReason::Decode => "undecodable response",
            FallbackReason::MissingText => "missing response text",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ConsultError {
    #[error("API key is missing or too short")]
    MissingApiKey,
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Gemini API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No text in Gemini response")]
    MissingText,
}

impl ConsultError {
    pub fn kind(&self) -> FallbackReason {
        match self {
            ConsultError::MissingApiKey => FallbackReason::MissingApiKey,
            ConsultError::Network(_) => FallbackReason::Network,
            ConsultError::Status { .. } => FallbackReason::Status,
            ConsultError::Decode(_) => FallbackReason::Decode,
            ConsultError::MissingText => FallbackReason::MissingText,
        }
    }
}

#[derive(Debug, Error)]
pub enum BriefingError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Form backend rejected the request: {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No entry for topic `{0}`")]
    MissingEntry(&'static str),
    #[error("Empty entry for topic `{0}`")]
    EmptyEntry(&'static str),
}
