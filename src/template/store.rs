use super::builtin::builtin_templates;
use super::record::{TemplateCategory, TemplateRecord};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Registry of analysis templates: built-in defaults merged with custom
/// records persisted as one JSON file per template.
///
/// The mapping is process-local and has no internal locking; concurrent
/// writers must serialize `save` themselves.
pub struct TemplateStore {
    templates_dir: PathBuf,
    templates: HashMap<String, TemplateRecord>,
    /// Listing order: defaults first, then custom records as discovered.
    order: Vec<String>,
}

impl TemplateStore {
    /// Open the store rooted at `templates_dir`, creating the directory if
    /// it does not exist. Built-in defaults are registered first, then every
    /// persisted record found in the directory; a custom record replaces a
    /// default sharing its name.
    pub fn open(templates_dir: impl Into<PathBuf>) -> Result<Self> {
        let templates_dir = templates_dir.into();
        fs::create_dir_all(&templates_dir).with_context(|| {
            format!(
                "Failed to create templates directory {}",
                templates_dir.display()
            )
        })?;

        let mut store = Self {
            templates_dir,
            templates: HashMap::new(),
            order: Vec::new(),
        };

        for template in builtin_templates() {
            store.insert(template);
        }
        store.load_custom_templates();

        Ok(store)
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Exact-name lookup; no fuzzy matching.
    pub fn get(&self, name: &str) -> Option<&TemplateRecord> {
        self.templates.get(name)
    }

    /// All registered names, optionally filtered to one category.
    pub fn list(&self, category: Option<TemplateCategory>) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| match category {
                Some(cat) => self
                    .templates
                    .get(name.as_str())
                    .is_some_and(|t| t.category == cat),
                None => true,
            })
            .map(|name| name.as_str())
            .collect()
    }

    /// Check a record against the save rules. Every check runs; the result
    /// is the full list of human-readable violations (empty means valid).
    /// Does not mutate or persist.
    pub fn validate(&self, template: &TemplateRecord) -> Vec<String> {
        let mut errors = Vec::new();

        if template.name.is_empty() || !template.name.chars().all(char::is_alphanumeric) {
            errors.push("Template name must be non-empty and alphanumeric".to_string());
        }

        if !(0.0..=1.0).contains(&template.temperature) {
            errors.push("Temperature must be between 0 and 1".to_string());
        }

        if template.system_prompt.is_empty() || template.instruction.is_empty() {
            errors.push("System prompt and instruction are required".to_string());
        }

        errors
    }

    /// Persist a record as `{name}.json` and register it in memory,
    /// replacing any existing entry with the same name (last-write-wins).
    ///
    /// Save does not validate; the creation workflow calls `validate` first
    /// and only saves on zero errors. Write failures propagate.
    pub fn save(&mut self, template: TemplateRecord) -> Result<()> {
        let path = self.record_path(&template.name);
        let content = serde_json::to_string_pretty(&template)
            .context("Failed to serialize template record")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write template {}", path.display()))?;

        info!("Saved template '{}' to {}", template.name, path.display());
        self.insert(template);
        Ok(())
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(format!("{}.json", name))
    }

    fn insert(&mut self, template: TemplateRecord) {
        if !self.templates.contains_key(&template.name) {
            self.order.push(template.name.clone());
        }
        self.templates.insert(template.name.clone(), template);
    }

    /// Load every `*.json` record in the templates directory. A record that
    /// fails to read or parse is skipped with a warning; one bad file never
    /// aborts the load.
    fn load_custom_templates(&mut self) {
        let entries = match fs::read_dir(&self.templates_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Failed to read templates directory {}: {}",
                    self.templates_dir.display(),
                    e
                );
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match load_record(&path) {
                Ok(template) => self.insert(template),
                Err(e) => warn!("Skipping template {}: {:#}", path.display(), e),
            }
        }
    }
}

fn load_record(path: &Path) -> Result<TemplateRecord> {
    let content = fs::read_to_string(path).context("Failed to read template file")?;
    let template = serde_json::from_str(&content).context("Failed to parse template record")?;
    Ok(template)
}
