//! Built-in default templates registered at store open, before any custom
//! records are loaded. A custom record with the same name replaces the
//! built-in.

use super::record::{TemplateCategory, TemplateRecord};

fn record(
    name: &str,
    category: TemplateCategory,
    system_prompt: &str,
    instruction: &str,
    temperature: f32,
    description: &str,
) -> TemplateRecord {
    TemplateRecord {
        name: name.to_string(),
        category,
        system_prompt: system_prompt.to_string(),
        instruction: instruction.to_string(),
        temperature,
        focus_topics: None,
        output_format: None,
        description: Some(description.to_string()),
        version: "1.0".to_string(),
    }
}

fn topics(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

pub(super) fn builtin_templates() -> Vec<TemplateRecord> {
    vec![
        record(
            "default",
            TemplateCategory::Analysis,
            "You are a transcript analyzer. Provide comprehensive analysis while maintaining clarity and structure.",
            "Provide a detailed analysis of the transcription",
            0.7,
            "General-purpose transcript analysis",
        ),
        record(
            "summary",
            TemplateCategory::Analysis,
            "You are generating a transcript summary. Focus on extracting and organizing the main points while maintaining clarity and brevity.",
            "Create a concise summary of the main points discussed",
            0.3,
            "Creates concise summaries of transcripts",
        ),
        TemplateRecord {
            focus_topics: topics(&["tasks", "deadlines", "assignments", "commitments"]),
            output_format: Some(
                "# Action Items Identified\n\
                 Each item should include:\n\
                 - What needs to be done\n\
                 - Who is responsible (if mentioned)\n\
                 - Due date/timeline (if mentioned)\n\
                 - Any relevant context"
                    .to_string(),
            ),
            ..record(
                "actionitems",
                TemplateCategory::Business,
                "You are an action item extractor. Your primary focus is identifying and clearly presenting all tasks, commitments, and follow-up items.",
                "Extract all action items, tasks, and commitments mentioned",
                0.1,
                "Extracts tasks, commitments, and follow-up items",
            )
        },
        TemplateRecord {
            focus_topics: topics(&["emotions", "attitudes", "reactions"]),
            ..record(
                "sentiment",
                TemplateCategory::Analysis,
                "You are a sentiment and tone analyzer. Focus on understanding and explaining the emotional undertones and attitudes expressed.",
                "Analyze the overall tone and sentiment of the discussion",
                0.4,
                "Analyzes tone and sentiment of discussions",
            )
        },
        TemplateRecord {
            focus_topics: topics(&["questions", "answers", "clarifications"]),
            ..record(
                "qa",
                TemplateCategory::Analysis,
                "You are a Q&A extractor. Your role is to identify and pair questions with their corresponding answers.",
                "Extract questions asked and their answers if provided",
                0.2,
                "Pairs questions with their answers",
            )
        },
        TemplateRecord {
            focus_topics: topics(&["requirements", "architecture", "technologies", "constraints"]),
            output_format: Some(
                "# Technical Specifications\n\
                 ## Requirements\n\
                 - List of functional requirements\n\
                 - List of non-functional requirements\n\n\
                 ## Architecture\n\
                 - Key architectural decisions\n\
                 - System components\n\
                 - Technical constraints\n\n\
                 ## Implementation Details\n\
                 - Technologies mentioned\n\
                 - Integration points\n\
                 - Performance considerations"
                    .to_string(),
            ),
            ..record(
                "technicalspecs",
                TemplateCategory::Technical,
                "You are a technical specification analyzer. Focus on technical details, requirements, and architectural decisions.",
                "Extract technical specifications and architectural decisions",
                0.2,
                "Analyzes technical discussions and specifications",
            )
        },
    ]
}
