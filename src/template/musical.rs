//! Installable template pack that rewrites transcript summaries as song
//! lyrics in a handful of genres. Not registered by default; installed on
//! demand via the CLI.

use super::record::{TemplateCategory, TemplateRecord};
use super::store::TemplateStore;
use anyhow::Result;

/// Save the musical summary templates into the store, overwriting any
/// previous versions.
pub fn install_musical_templates(store: &mut TemplateStore) -> Result<()> {
    for template in musical_templates() {
        store.save(template)?;
    }
    Ok(())
}

fn musical_templates() -> Vec<TemplateRecord> {
    let topics = |items: &[&str]| Some(items.iter().map(|s| s.to_string()).collect());

    vec![
        TemplateRecord {
            name: "musicalsummary".to_string(),
            category: TemplateCategory::Custom,
            system_prompt: "You are a creative musical interpreter who transforms factual content into song lyrics. You maintain the key information while adapting it to musical styles. Always ensure the core message remains clear despite the creative presentation.".to_string(),
            instruction: "Transform the transcript summary into song lyrics that maintain factual accuracy while being entertaining".to_string(),
            temperature: 0.7,
            focus_topics: topics(&["key points", "main message", "important details"]),
            output_format: Some(
                "# Musical Summary\n\
                 ## Original Summary\n\
                 [Brief factual summary]\n\n\
                 ## Song Version\n\
                 [Genre-specific lyrics]\n\n\
                 ## Performance Notes\n\
                 [Brief notes about the musical style and approach]"
                    .to_string(),
            ),
            description: Some(
                "Transforms summaries into musical lyrics while maintaining information integrity"
                    .to_string(),
            ),
            version: "1.0".to_string(),
        },
        TemplateRecord {
            name: "hiphopsummary".to_string(),
            category: TemplateCategory::Custom,
            system_prompt: "You are a hip-hop lyricist specialized in transforming information into sophisticated rap verses. Use modern hip-hop conventions, complex rhyme schemes, and wordplay while maintaining clarity of information. Aim for a style similar to educational rappers like Lin-Manuel Miranda's Hamilton approach - sophisticated, informative, and engaging.".to_string(),
            instruction: "Create a hip-hop version of the summary with complex rhyme schemes and wordplay".to_string(),
            temperature: 0.8,
            focus_topics: topics(&["key points", "main message", "flow", "rhyme scheme"]),
            output_format: Some(
                "# Hip-Hop Summary\n\
                 ## Verse Structure\n\
                 [Verse breakdown]\n\n\
                 ## Lyrics\n\
                 [Hip-hop lyrics]\n\n\
                 ## Flow Notes\n\
                 [Rhythm and delivery suggestions]"
                    .to_string(),
            ),
            description: Some(
                "Transforms summaries into hip-hop lyrics with complex rhyme schemes".to_string(),
            ),
            version: "1.0".to_string(),
        },
        TemplateRecord {
            name: "countrysummary".to_string(),
            category: TemplateCategory::Custom,
            system_prompt: "You are a country music songwriter who excels at storytelling through music. Transform information into narrative country lyrics that maintain factual accuracy while using country music conventions like storytelling, metaphors, and relatable imagery.".to_string(),
            instruction: "Create a country music version of the summary with strong narrative elements".to_string(),
            temperature: 0.7,
            focus_topics: topics(&["key points", "narrative flow", "country elements"]),
            output_format: Some(
                "# Country Music Summary\n\
                 ## Verse and Chorus Structure\n\
                 [Song structure]\n\n\
                 ## Lyrics\n\
                 [Country lyrics]\n\n\
                 ## Musical Style Notes\n\
                 [Style and instrumentation suggestions]"
                    .to_string(),
            ),
            description: Some(
                "Transforms summaries into country music lyrics with strong storytelling"
                    .to_string(),
            ),
            version: "1.0".to_string(),
        },
        TemplateRecord {
            name: "balladsummary".to_string(),
            category: TemplateCategory::Custom,
            system_prompt: "You are an 80s power ballad songwriter who transforms information into emotional, dramatic lyrics. Use the conventions of 80s love ballads - big emotions, power choruses, and dramatic imagery - while maintaining the factual content of the message.".to_string(),
            instruction: "Create an 80s-style power ballad version of the summary".to_string(),
            temperature: 0.8,
            focus_topics: topics(&["key points", "emotional elements", "ballad structure"]),
            output_format: Some(
                "# 80s Power Ballad Summary\n\
                 ## Song Structure\n\
                 [Verse/Chorus breakdown]\n\n\
                 ## Lyrics\n\
                 [Ballad lyrics]\n\n\
                 ## Performance Notes\n\
                 [Style and dramatic elements]"
                    .to_string(),
            ),
            description: Some(
                "Transforms summaries into 80s-style power ballad lyrics".to_string(),
            ),
            version: "1.0".to_string(),
        },
    ]
}
