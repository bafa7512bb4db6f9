pub mod engine;
pub mod extractor;
pub mod graph;
pub mod heap;
pub mod kcore;
pub mod output;
pub mod pipeline;
pub mod rank;
pub mod selection;

pub use crate::domain::model::{Document, DocumentKeywords, ExtractionResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
