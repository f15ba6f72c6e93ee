pub mod analyzer;
pub mod api;
pub mod config;
pub mod prompt;
pub mod template;

pub use analyzer::Analyzer;
pub use api::{
    ApiError, ChatCompletion, CompletionRequest, RemoteCompletion, RemoteTranscriber, Transcriber,
};
pub use config::{ApiConfig, Config};
pub use prompt::{compose, ChatMessage, ComposedPrompt, Overrides, Role, DEFAULT_MAX_TOKENS};
pub use template::{install_musical_templates, TemplateCategory, TemplateRecord, TemplateStore};
