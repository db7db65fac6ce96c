//! HTTP client for the Web3Forms submission endpoint

use crate::config::PortfolioConfig;
use crate::state::ContactDraft;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{FormRelay, RelayError};

/// Default relay endpoint
const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Client for the Web3Forms relay service
pub struct Web3FormsClient {
    http: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

/// Request body for a submission
#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    subject: String,
}

/// Relay response; only the success flag is contractual
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

impl Web3FormsClient {
    /// Create a new relay client from configuration
    pub fn new(config: &PortfolioConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: config
                .relay_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            access_key: config.access_key().map(str::to_string),
        })
    }
}

#[async_trait]
impl FormRelay for Web3FormsClient {
    async fn submit(&self, draft: &ContactDraft) -> Result<(), RelayError> {
        // Fail fast before any network call rather than sending an
        // unauthenticated request
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(RelayError::MissingAccessKey)?;

        let body = SubmitBody {
            access_key,
            name: &draft.name,
            email: &draft.email,
            message: &draft.message,
            subject: format!("Portfolio Contact: Message from {}", draft.name),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let parsed: SubmitResponse = response
            .json()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if parsed.success {
            Ok(())
        } else {
            Err(RelayError::Rejected(parsed.message))
        }
    }
}
