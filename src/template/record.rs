use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping label for templates shown in listings. Purely descriptive;
/// prompt composition never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Analysis,
    Technical,
    Business,
    Custom,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::Analysis,
        TemplateCategory::Technical,
        TemplateCategory::Business,
        TemplateCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Analysis => "analysis",
            TemplateCategory::Technical => "technical",
            TemplateCategory::Business => "business",
            TemplateCategory::Custom => "custom",
        }
    }

    /// Capitalized form for listing headers.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::Analysis => "Analysis",
            TemplateCategory::Technical => "Technical",
            TemplateCategory::Business => "Business",
            TemplateCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analysis" => Ok(TemplateCategory::Analysis),
            "technical" => Ok(TemplateCategory::Technical),
            "business" => Ok(TemplateCategory::Business),
            "custom" => Ok(TemplateCategory::Custom),
            other => Err(format!(
                "unknown template category '{}' (expected analysis, technical, business, or custom)",
                other
            )),
        }
    }
}

/// One reusable analysis configuration.
///
/// `name` doubles as the lookup key and the file stem of the persisted
/// record, so it must stay alphanumeric — enforced by
/// `TemplateStore::validate`, not by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub name: String,
    pub category: TemplateCategory,
    /// Base persona/instructions for the completion call.
    pub system_prompt: String,
    /// Primary task line appended to the system prompt.
    pub instruction: String,
    /// Sampling temperature, valid range [0.0, 1.0].
    pub temperature: f32,
    #[serde(default)]
    pub focus_topics: Option<Vec<String>>,
    #[serde(default)]
    pub output_format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Inert metadata: stored and round-tripped, never consulted.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}
