use crate::config::{DEFAULT_KEYWORD_COUNT, DEFAULT_LAMBDA, DEFAULT_WINDOW_SIZE, DEFAULT_WORKERS};
use crate::core::ConfigProvider;
use crate::domain::model::{ErrorPolicy, OutputFormat};
use crate::utils::error::{KeywordError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    pub load: LoadConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
    pub performance: Option<PerformanceConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input: String,
    /// Directory that relative paths are resolved against.
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub window_size: Option<usize>,
    pub lambda: Option<f64>,
    pub keywords: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub format: Option<OutputFormat>,
    pub summary_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_document_error: Option<ErrorPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KeywordError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KeywordError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn base_dir(&self) -> &str {
        self.source.base_dir.as_deref().unwrap_or(".")
    }

    pub fn log_format(&self) -> LogFormat {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format)
            .unwrap_or_default()
    }

    pub fn verbose(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.verbose)
            .unwrap_or(false)
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.load.format = Some(format);
    }

    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.error_handling = Some(ErrorHandlingConfig {
            on_document_error: Some(policy),
        });
    }

    pub fn set_workers(&mut self, workers: usize) {
        self.performance = Some(PerformanceConfig {
            workers: Some(workers),
        });
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn window_size(&self) -> usize {
        self.extraction.window_size.unwrap_or(DEFAULT_WINDOW_SIZE)
    }

    fn lambda(&self) -> f64 {
        self.extraction.lambda.unwrap_or(DEFAULT_LAMBDA)
    }

    fn keyword_count(&self) -> usize {
        self.extraction.keywords.unwrap_or(DEFAULT_KEYWORD_COUNT)
    }

    fn output_format(&self) -> OutputFormat {
        self.load.format.unwrap_or_default()
    }

    fn workers(&self) -> usize {
        self.performance
            .as_ref()
            .and_then(|p| p.workers)
            .unwrap_or(DEFAULT_WORKERS)
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_document_error)
            .unwrap_or_default()
    }

    fn summary_path(&self) -> Option<&str> {
        self.load.summary_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("source.input", &self.source.input)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_distinct_paths(&self.source.input, &self.load.output_path)?;
        validation::validate_extraction(self.window_size(), self.lambda(), self.keyword_count())?;
        validation::validate_positive_number("performance.workers", self.workers(), 1)?;
        if let Some(summary) = &self.load.summary_path {
            validation::validate_path("load.summary_path", summary)?;
            validation::validate_summary_path(&self.source.input, &self.load.output_path, summary)?;
        }
        Ok(())
    }
}
