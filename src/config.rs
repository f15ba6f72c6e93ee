use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Process-wide configuration, built once in `main` and passed by reference
/// into the components that need it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Bearer key for both remote APIs. Falls back to `OPENAI_API_KEY`.
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub transcription_model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o".to_string(),
            transcription_model: "whisper-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory holding custom template records. Tilde-expanded.
    pub dir: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
        }
    }
}

impl Config {
    /// Load from an optional config file plus `SCRIVEN_*` environment
    /// overrides (e.g. `SCRIVEN_API__CHAT_MODEL`).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SCRIVEN").separator("__"))
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;
        if cfg.api.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                cfg.api.api_key = key;
            }
        }
        Ok(cfg)
    }

    pub fn templates_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.templates.dir).to_string())
    }

    /// Fatal when required credentials are missing; checked before the
    /// remote pipeline runs, not for local template management.
    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.trim().is_empty() {
            bail!(
                "API key is required. Set OPENAI_API_KEY in the environment \
                 or api.api_key in the config file"
            );
        }
        if self.api.chat_model.trim().is_empty() {
            bail!("Chat model cannot be empty");
        }
        if self.api.transcription_model.trim().is_empty() {
            bail!("Transcription model cannot be empty");
        }
        Ok(())
    }
}
