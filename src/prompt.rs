use crate::template::TemplateRecord;
use serde::{Deserialize, Serialize};

/// Sent when no override supplies `max_tokens`.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Fixed directive closing every composed system prompt.
const FORMAT_DIRECTIVE: &str = "Respond in Markdown format.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged entry in the message list sent to the completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Run-time parameters that supersede or augment a template's stored fields
/// for a single call. The stored record is never mutated.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Free text appended after the template's own instruction.
    pub custom_instructions: Option<String>,
    /// Inserted as a separate system message, only if non-empty.
    pub additional_context: Option<String>,
    /// Replaces the template's focus topics entirely when present.
    pub focus_topics: Option<Vec<String>>,
    /// Additive; templates have no stored exclusion field.
    pub exclude_topics: Option<Vec<String>>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// The ordered messages and sampling parameters for one analysis call.
/// Ephemeral; lives for a single call and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Build the message list for one analysis call.
///
/// Clause order is a contract: base prompt, primary task, focus topics,
/// exclude topics, additional instructions, output format, trailing format
/// directive. Omitted options are skipped outright, never replaced with
/// placeholders. Each clause is sentence-terminated and clauses are joined
/// with single spaces.
pub fn compose(
    template: &TemplateRecord,
    transcription: &str,
    overrides: &Overrides,
) -> ComposedPrompt {
    let mut clauses: Vec<String> = Vec::new();

    push_clause(&mut clauses, template.system_prompt.clone());

    if !template.instruction.is_empty() {
        push_clause(
            &mut clauses,
            format!("Primary task: {}", template.instruction),
        );
    }

    // An override replaces the template's focus topics entirely, even when
    // it leaves them empty.
    let focus = overrides
        .focus_topics
        .as_ref()
        .or(template.focus_topics.as_ref());
    if let Some(focus) = focus {
        if !focus.is_empty() {
            push_clause(
                &mut clauses,
                format!(
                    "Pay particular attention to these topics: {}",
                    focus.join(", ")
                ),
            );
        }
    }

    if let Some(exclude) = &overrides.exclude_topics {
        if !exclude.is_empty() {
            push_clause(
                &mut clauses,
                format!(
                    "Minimize discussion of these topics: {}",
                    exclude.join(", ")
                ),
            );
        }
    }

    if let Some(instructions) = &overrides.custom_instructions {
        if !instructions.is_empty() {
            push_clause(
                &mut clauses,
                format!("Additional instructions: {}", instructions),
            );
        }
    }

    if let Some(format) = &template.output_format {
        if !format.is_empty() {
            push_clause(
                &mut clauses,
                format!("Please format your response as follows: {}", format),
            );
        }
    }

    push_clause(&mut clauses, FORMAT_DIRECTIVE.to_string());

    let mut messages = vec![ChatMessage::system(clauses.join(" "))];
    if let Some(context) = &overrides.additional_context {
        if !context.is_empty() {
            messages.push(ChatMessage::system(context.clone()));
        }
    }
    messages.push(ChatMessage::user(transcription));

    ComposedPrompt {
        messages,
        temperature: overrides.temperature.unwrap_or(template.temperature),
        max_tokens: overrides.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
    }
}

/// Append a clause, adding a period unless it already ends as a sentence.
fn push_clause(clauses: &mut Vec<String>, clause: String) {
    let mut clause = clause.trim_end().to_string();
    if clause.is_empty() {
        return;
    }
    if !clause.ends_with(['.', '!', '?']) {
        clause.push('.');
    }
    clauses.push(clause);
}
