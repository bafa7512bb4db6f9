use crate::domain::model::{Document, ErrorPolicy, ExtractionResult, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn window_size(&self) -> usize;
    fn lambda(&self) -> f64;
    fn keyword_count(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
    fn workers(&self) -> usize;
    fn error_policy(&self) -> ErrorPolicy;
    fn summary_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Document>>;
    async fn transform(&self, documents: Vec<Document>) -> Result<ExtractionResult>;
    async fn load(&self, result: ExtractionResult) -> Result<String>;
}
