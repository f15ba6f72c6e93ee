use super::error::ApiError;
use crate::config::ApiConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Speech-to-text seam: one blocking round trip from an audio file to its
/// transcript. No chunking, format negotiation, or language hinting.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, ApiError>;
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Remote transcription over an OpenAI-compatible `/audio/transcriptions`
/// endpoint: multipart upload of the audio bytes plus the model name.
pub struct RemoteTranscriber {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl RemoteTranscriber {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.transcription_model.clone(),
            client,
        })
    }
}

#[async_trait]
impl Transcriber for RemoteTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, ApiError> {
        if !audio_path.exists() {
            return Err(ApiError::AudioFileNotFound(
                audio_path.display().to_string(),
            ));
        }

        let bytes = tokio::fs::read(audio_path).await?;
        let file_name = audio_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio")
            .to_string();
        info!(
            "Uploading {} ({} bytes) for transcription",
            audio_path.display(),
            bytes.len()
        );

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let url = format!("{}/audio/transcriptions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let parsed: TranscriptionResponse = serde_json::from_str(&response.text().await?)?;
        Ok(parsed.text)
    }
}
