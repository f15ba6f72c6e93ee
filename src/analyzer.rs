use crate::api::{ChatCompletion, CompletionRequest};
use crate::prompt::{compose, Overrides};
use crate::template::TemplateStore;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Runs one analysis pass: resolve a template from the store, compose the
/// prompt, and call the completion backend.
pub struct Analyzer<'a> {
    store: &'a TemplateStore,
    completion: &'a dyn ChatCompletion,
    model: String,
}

impl<'a> Analyzer<'a> {
    pub fn new(
        store: &'a TemplateStore,
        completion: &'a dyn ChatCompletion,
        model: impl Into<String>,
    ) -> Self {
        Self {
            store,
            completion,
            model: model.into(),
        }
    }

    /// Analyze a transcript with the named template. An unknown name falls
    /// back to the `default` template with a notice; remote failures come
    /// back as errors for the caller to log, not crash on.
    pub async fn analyze(
        &self,
        transcription: &str,
        template_name: &str,
        overrides: &Overrides,
    ) -> Result<String> {
        let template = match self.store.get(template_name) {
            Some(template) => template,
            None => {
                warn!(
                    "Template '{}' not found, using default template",
                    template_name
                );
                self.store
                    .get("default")
                    .context("Default template not found")?
            }
        };

        info!("Analyzing transcription with template '{}'", template.name);
        let prompt = compose(template, transcription, overrides);

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: prompt.messages,
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        let analysis = self.completion.complete(request).await?;
        Ok(analysis)
    }
}
