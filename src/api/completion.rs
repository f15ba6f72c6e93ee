use super::error::ApiError;
use crate::config::ApiConfig;
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Chat-completion seam: ordered messages in, generated text out. One
/// blocking round trip, no streaming or retries.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ApiError>;
}

/// Wire request for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Remote chat completion over an OpenAI-compatible endpoint.
pub struct RemoteCompletion {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RemoteCompletion {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[async_trait]
impl ChatCompletion for RemoteCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ApiError> {
        info!(
            "Requesting completion from model '{}' ({} messages)",
            request.model,
            request.messages.len()
        );

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let parsed: CompletionResponse = serde_json::from_str(&response.text().await?)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ApiError::EmptyResponse)
    }
}
