use crate::config::{DEFAULT_KEYWORD_COUNT, DEFAULT_LAMBDA, DEFAULT_WINDOW_SIZE, DEFAULT_WORKERS};
use crate::core::ConfigProvider;
use crate::domain::model::{ErrorPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "conversation-keywords", version)]
#[command(about = "Extract keywords with k-core decomposition")]
pub struct CliConfig {
    /// A processed text file, one document per line, words separated by whitespace
    pub document: String,

    /// The keywords file, one keyword set per line
    pub output: String,

    /// Sliding window of the graph of words
    #[arg(short = 'w', long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Trade-off between keyword scores and their connectivity
    #[arg(short = 'l', long, default_value_t = DEFAULT_LAMBDA)]
    pub lambda: f64,

    /// The number of keywords per document
    #[arg(short = 'k', long = "keywords", default_value_t = DEFAULT_KEYWORD_COUNT)]
    pub keyword_count: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of blocking workers used for extraction
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// What to do with a document that cannot yield enough keywords
    #[arg(long = "on-error", value_enum, default_value_t = ErrorPolicy::Fail)]
    pub on_error: ErrorPolicy,

    /// Also write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<String>,

    /// Directory that relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.document
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn window_size(&self) -> usize {
        self.window_size
    }

    fn lambda(&self) -> f64 {
        self.lambda
    }

    fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn workers(&self) -> usize {
        self.workers
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.on_error
    }

    fn summary_path(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("document", &self.document)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_distinct_paths(&self.document, &self.output)?;
        validation::validate_extraction(self.window_size, self.lambda, self.keyword_count)?;
        validation::validate_positive_number("workers", self.workers, 1)?;
        if let Some(summary) = &self.summary {
            validation::validate_path("summary", summary)?;
            validation::validate_summary_path(&self.document, &self.output, summary)?;
        }
        Ok(())
    }
}
