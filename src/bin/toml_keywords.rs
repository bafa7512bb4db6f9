use anyhow::Context;
use clap::Parser;
use conversation_keywords::core::{ConfigProvider, Storage};
use conversation_keywords::utils::{logger, validation::Validate};
use conversation_keywords::{
    Document, ErrorPolicy, ExtractionEngine, KeywordPipeline, LocalStorage, OutputFormat,
    TomlConfig,
};
use std::collections::HashSet;

#[derive(Parser)]
#[command(name = "toml-keywords", version)]
#[command(about = "Keyword extraction driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "keywords.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Override the error policy from config
    #[arg(long = "on-error", value_enum)]
    on_error: Option<ErrorPolicy>,

    /// Override the number of extraction workers from config
    #[arg(long)]
    workers: Option<usize>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    logger::init_logger(config.log_format(), args.verbose || config.verbose());
    tracing::info!("Loaded configuration '{}' from {}", config.pipeline.name, args.config);

    if let Some(format) = args.format {
        config.set_output_format(format);
        tracing::info!("Output format overridden to: {}", format);
    }
    if let Some(policy) = args.on_error {
        config.set_error_policy(policy);
        tracing::info!("Error policy overridden to: {}", policy);
    }
    if let Some(workers) = args.workers {
        config.set_workers(workers);
        tracing::info!("Workers overridden to: {}", workers);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("error: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    let storage = LocalStorage::new(config.base_dir().to_string());

    if args.dry_run {
        tracing::info!("DRY RUN MODE - no keywords will be written");
        perform_dry_run(&storage, &config).await?;
        return Ok(());
    }

    let pipeline = KeywordPipeline::new(storage, config);
    let engine = ExtractionEngine::new(pipeline);

    if let Err(e) = engine.run().await {
        tracing::error!(
            "Keyword extraction failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("Configuration summary:");
    if let Some(description) = &config.pipeline.description {
        tracing::info!("  Description: {}", description);
    }
    tracing::info!("  Input: {} (base dir {})", config.input_path(), config.base_dir());
    tracing::info!(
        "  Output: {} as {}",
        config.output_path(),
        config.output_format()
    );
    tracing::info!(
        "  Extraction: window={}, lambda={}, keywords={}",
        config.window_size(),
        config.lambda(),
        config.keyword_count()
    );
    tracing::info!(
        "  Workers: {}, on error: {}",
        config.workers(),
        config.error_policy()
    );
    if let Some(summary) = config.summary_path() {
        tracing::info!("  Summary: {}", summary);
    }
}

async fn perform_dry_run(storage: &LocalStorage, config: &TomlConfig) -> anyhow::Result<()> {
    let raw = storage
        .read_file(config.input_path())
        .await
        .with_context(|| format!("failed to read '{}'", config.input_path()))?;
    let text = String::from_utf8(raw).context("input is not valid UTF-8")?;
    let documents = Document::parse_corpus(&text);

    let words: usize = documents.iter().map(|d| d.words.len()).sum();
    let vocabulary: HashSet<&str> = documents
        .iter()
        .flat_map(|d| d.words.iter().map(String::as_str))
        .collect();
    let too_small = documents
        .iter()
        .filter(|d| {
            d.words.iter().collect::<HashSet<_>>().len() < config.keyword_count()
        })
        .count();

    tracing::info!("Documents: {}", documents.len());
    tracing::info!("Words: {} ({} distinct)", words, vocabulary.len());
    if too_small > 0 {
        tracing::warn!(
            "{} documents have fewer than {} distinct words and cannot yield a full keyword set",
            too_small,
            config.keyword_count()
        );
    }
    tracing::info!(
        "Would write {} keyword sets to {}",
        documents.len(),
        config.output_path()
    );
    Ok(())
}
