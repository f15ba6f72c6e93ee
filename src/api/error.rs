use thiserror::Error;

/// Failure reasons for the remote transcription and completion calls.
///
/// Remote failures are non-fatal to the process: callers log the error and
/// stop the pipeline early for that invocation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("audio file not found: {0}")]
    AudioFileNotFound(String),

    #[error("failed to read audio file: {0}")]
    Io(#[from] std::io::Error),

    #[error("completion response contained no choices")]
    EmptyResponse,
}
