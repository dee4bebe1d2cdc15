use serde::{Deserialize, Serialize};

use crate::error::BriefingError;

pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xgvjrrod";

/// Contact fields from the "Request Briefing" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BriefingStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl BriefingStatus {
    pub fn after(result: &Result<(), BriefingError>) -> Self {
        match result {
            Ok(()) => BriefingStatus::Success,
            Err(_) => BriefingStatus::Error,
        }
    }
}

impl BriefingRequest {
    /// Everything but `role` is required
    pub fn validate(&self) -> Result<(), BriefingError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("company", &self.company),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BriefingError::MissingField(field));
            }
        }

        let email = self.email.trim();
        let well_formed = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        };
        if !well_formed {
            return Err(BriefingError::InvalidEmail(email.to_string()));
        }

        Ok(())
    }
}

/// Posts briefing requests to the form backend
pub struct BriefingClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl BriefingClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One attempt; any non-2xx answer is a failure.
    pub async fn submit(&self, request: &BriefingRequest) -> Result<(), BriefingError> {
        request.validate()?;

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Briefing submission rejected: {}", status);
            return Err(BriefingError::Status(status));
        }

        log::info!("📨 Briefing requested by {} ({})", request.name, request.company);
        Ok(())
    }
}
