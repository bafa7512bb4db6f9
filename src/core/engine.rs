use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ExtractionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExtractionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting keyword extraction");

        // Extract
        let phase = Instant::now();
        let documents = self.pipeline.extract().await?;
        let word_count: usize = documents.iter().map(|d| d.words.len()).sum();
        tracing::info!(
            "Read {} documents ({} words) in {:?}",
            documents.len(),
            word_count,
            phase.elapsed()
        );

        // Transform
        let phase = Instant::now();
        let result = self.pipeline.transform(documents).await?;
        tracing::info!(
            "Selected {} keywords across {} documents in {:?}",
            result.keyword_total(),
            result.documents.len(),
            phase.elapsed()
        );

        // Load
        let phase = Instant::now();
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {} in {:?}", output_path, phase.elapsed());

        tracing::info!("Keyword extraction finished in {:?}", started.elapsed());
        Ok(output_path)
    }
}
