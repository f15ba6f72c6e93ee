use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use scriven::{
    install_musical_templates, Analyzer, Config, Overrides, RemoteCompletion, RemoteTranscriber,
    TemplateCategory, TemplateRecord, TemplateStore, Transcriber,
};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Transcribe an audio file and analyze the transcript with a managed
/// prompt template.
#[derive(Debug, Parser)]
#[command(
    name = "scriven",
    version,
    about = "Transcribe and analyze audio with custom templates"
)]
struct Cli {
    /// Path to the audio file to transcribe and analyze
    audio_file: Option<PathBuf>,

    /// Analysis template to use
    #[arg(long, default_value = "default")]
    template: String,

    /// Topics to focus on (replaces the template's own focus topics)
    #[arg(long, num_args = 1..)]
    focus: Option<Vec<String>>,

    /// Topics to exclude from the analysis
    #[arg(long, num_args = 1..)]
    exclude: Option<Vec<String>>,

    /// Additional context for the analysis
    #[arg(long)]
    context: Option<String>,

    /// Instruction text: the primary task when creating a template, or
    /// extra instructions for an analysis run
    #[arg(long)]
    instruction: Option<String>,

    /// Sampling temperature (0.0 to 1.0)
    #[arg(long)]
    temperature: Option<f32>,

    /// Maximum tokens for the completion response
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Also write the analysis to a markdown file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file name (TOML, optional)
    #[arg(long, default_value = "scriven")]
    config: String,

    /// List available templates
    #[arg(long)]
    list_templates: bool,

    /// Create a new template with the given name
    #[arg(long, value_name = "NAME")]
    create_template: Option<String>,

    /// Category for the new template
    #[arg(long)]
    template_category: Option<TemplateCategory>,

    /// System prompt for the new template
    #[arg(long)]
    system_prompt: Option<String>,

    /// Description for the new template
    #[arg(long)]
    description: Option<String>,

    /// Install the musical summary template pack
    #[arg(long)]
    install_musical_templates: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    let mut store = TemplateStore::open(cfg.templates_dir())?;

    // Management operations run without API credentials and short-circuit
    // the transcription pipeline.
    if handle_template_management(&mut store, &cli)? {
        return Ok(());
    }

    let Some(audio_file) = cli.audio_file.as_deref() else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    cfg.validate()?;

    let transcriber = RemoteTranscriber::new(&cfg.api)?;
    info!("Transcribing audio: {}", audio_file.display());
    let transcription = match transcriber.transcribe(audio_file).await {
        Ok(text) => text,
        Err(e) => {
            error!("Transcription failed: {}", e);
            return Ok(());
        }
    };
    info!("Transcription complete ({} chars)", transcription.len());

    let completion = RemoteCompletion::new(&cfg.api)?;
    let analyzer = Analyzer::new(&store, &completion, &cfg.api.chat_model);

    let overrides = Overrides {
        custom_instructions: cli.instruction.clone(),
        additional_context: cli.context.clone(),
        focus_topics: cli.focus.clone(),
        exclude_topics: cli.exclude.clone(),
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
    };

    info!("Analyzing transcription using '{}' template", cli.template);
    let analysis = match analyzer
        .analyze(&transcription, &cli.template, &overrides)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            error!("Analysis failed: {:#}", e);
            return Ok(());
        }
    };

    println!("\nAnalysis Results:");
    println!("{}", "=".repeat(50));
    println!("{}", analysis);
    println!("{}", "=".repeat(50));

    if let Some(path) = &cli.output {
        write_markdown(path, &cli.template, &analysis)?;
    }

    Ok(())
}

/// Returns true when a management flag handled the invocation.
fn handle_template_management(store: &mut TemplateStore, cli: &Cli) -> Result<bool> {
    if cli.list_templates {
        print_template_listing(store);
        return Ok(true);
    }

    if cli.install_musical_templates {
        install_musical_templates(store)?;
        println!("Installed musical summary templates");
        return Ok(true);
    }

    if let Some(name) = &cli.create_template {
        let template = TemplateRecord {
            name: name.clone(),
            category: cli.template_category.unwrap_or(TemplateCategory::Custom),
            system_prompt: cli.system_prompt.clone().unwrap_or_default(),
            instruction: cli.instruction.clone().unwrap_or_default(),
            temperature: cli.temperature.unwrap_or(0.7),
            focus_topics: cli.focus.clone(),
            output_format: None,
            description: cli.description.clone(),
            version: "1.0".to_string(),
        };

        let errors = store.validate(&template);
        if !errors.is_empty() {
            println!("\nTemplate validation errors:");
            for error in &errors {
                println!("- {}", error);
            }
            return Ok(true);
        }

        store.save(template)?;
        println!("\nSuccessfully created template: {}", name);
        return Ok(true);
    }

    Ok(false)
}

fn print_template_listing(store: &TemplateStore) {
    println!("\nAvailable Templates:");
    for category in TemplateCategory::ALL {
        let names = store.list(Some(category));
        if names.is_empty() {
            continue;
        }
        println!("\n{} Templates:", category.label());
        for name in names {
            match store.get(name).and_then(|t| t.description.as_deref()) {
                Some(description) => println!("- {}: {}", name, description),
                None => println!("- {}", name),
            }
        }
    }
}

fn write_markdown(path: &Path, template_name: &str, analysis: &str) -> Result<()> {
    let content = format!(
        "# Analysis ({})\n\n*Generated: {}*\n\n{}\n",
        template_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M"),
        analysis
    );
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write analysis to {}", path.display()))?;
    info!("Analysis written to {}", path.display());
    Ok(())
}
