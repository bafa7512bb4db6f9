use clap::Parser;
use conversation_keywords::utils::{logger, validation::Validate};
use conversation_keywords::{CliConfig, ExtractionEngine, KeywordPipeline, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting conversation-keywords");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("error: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(config.base_dir.clone());
    let output_location = storage.resolve(&config.output);
    let pipeline = KeywordPipeline::new(storage, config);
    let engine = ExtractionEngine::new(pipeline);

    match engine.run().await {
        Ok(_) => {
            tracing::info!("Keywords written to {}", output_location.display());
        }
        Err(e) => {
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
    }

    Ok(())
}
