pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::{engine::ExtractionEngine, extractor::KeywordExtractor, pipeline::KeywordPipeline};
pub use domain::model::{
    Document, DocumentKeywords, ErrorPolicy, ExtractionSummary, KeywordStatus, OutputFormat,
    ScoredKeyword,
};
pub use utils::error::{KeywordError, Result};
