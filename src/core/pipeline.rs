use crate::core::extractor::KeywordExtractor;
use crate::core::output;
use crate::core::{ConfigProvider, Document, ExtractionResult, Pipeline, Storage};
use crate::domain::model::{DocumentKeywords, ErrorPolicy, ExtractionSummary, KeywordStatus};
use crate::utils::error::{KeywordError, Result};
use chrono::Utc;
use tokio::task::JoinSet;

pub struct KeywordPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> KeywordPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn summarize(&self, result: &ExtractionResult) -> ExtractionSummary {
        let finished_at = Utc::now();
        ExtractionSummary {
            input: self.config.input_path().to_string(),
            output: self.config.output_path().to_string(),
            format: self.config.output_format(),
            window_size: self.config.window_size(),
            lambda: self.config.lambda(),
            keywords_requested: self.config.keyword_count(),
            documents: result.documents.len(),
            complete: result.count(KeywordStatus::Complete),
            partial: result.count(KeywordStatus::Partial),
            skipped: result.count(KeywordStatus::Skipped),
            keywords_written: result.keyword_total(),
            started_at: result.started_at,
            finished_at,
            elapsed_ms: (finished_at - result.started_at).num_milliseconds(),
        }
    }
}

/// Runs the extractor over contiguous chunks of documents on the blocking
/// pool and returns every outcome in document order.
async fn extract_in_chunks(
    extractor: KeywordExtractor,
    documents: Vec<Document>,
    workers: usize,
) -> Result<Vec<(Document, Result<DocumentKeywords>)>> {
    let total = documents.len();
    let chunk_size = total.div_ceil(workers.max(1)).max(1);

    let mut tasks = JoinSet::new();
    let mut pending = documents.into_iter().peekable();
    while pending.peek().is_some() {
        let chunk: Vec<Document> = pending.by_ref().take(chunk_size).collect();
        tasks.spawn_blocking(move || {
            chunk
                .into_iter()
                .map(|document| {
                    let outcome = extractor.extract(&document);
                    (document, outcome)
                })
                .collect::<Vec<_>>()
        });
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        let chunk = joined.map_err(|e| KeywordError::ProcessingError {
            message: format!("extraction worker failed: {}", e),
        })?;
        outcomes.extend(chunk);
    }

    outcomes.sort_by_key(|(document, _)| document.index);
    Ok(outcomes)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for KeywordPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Document>> {
        let input = self.config.input_path();
        tracing::debug!("Reading documents from: {}", input);

        let raw = self.storage.read_file(input).await?;
        let text = String::from_utf8(raw)?;
        let documents = Document::parse_corpus(&text);

        if documents.is_empty() {
            tracing::warn!("Input '{}' contains no documents", input);
        }
        Ok(documents)
    }

    async fn transform(&self, documents: Vec<Document>) -> Result<ExtractionResult> {
        let started_at = Utc::now();
        let policy = self.config.error_policy();
        let extractor =
            KeywordExtractor::from_config(&self.config).allow_partial(policy == ErrorPolicy::Partial);

        tracing::debug!(
            "Extracting {} keywords per document (window={}, lambda={}, workers={}, on_error={})",
            self.config.keyword_count(),
            self.config.window_size(),
            self.config.lambda(),
            self.config.workers(),
            policy
        );

        let outcomes = extract_in_chunks(extractor, documents, self.config.workers()).await?;

        let mut results = Vec::with_capacity(outcomes.len());
        for (document, outcome) in outcomes {
            match outcome {
                Ok(keywords) => {
                    if keywords.status == KeywordStatus::Partial {
                        tracing::warn!(
                            "Document on line {} yielded only {} keywords",
                            document.line,
                            keywords.keywords.len()
                        );
                    }
                    results.push(keywords);
                }
                Err(e) if policy == ErrorPolicy::Skip => {
                    tracing::warn!("Skipping document on line {}: {}", document.line, e);
                    results.push(DocumentKeywords::skipped(&document, &e));
                }
                Err(e) => {
                    tracing::error!("Extraction failed on line {}: {}", document.line, e);
                    return Err(e);
                }
            }
        }

        Ok(ExtractionResult {
            documents: results,
            started_at,
        })
    }

    async fn load(&self, result: ExtractionResult) -> Result<String> {
        let output_path = self.config.output_path();
        let format = self.config.output_format();

        let rendered = output::render(&result.documents, format)?;
        tracing::debug!(
            "Writing {} documents as {} ({} bytes) to {}",
            result.documents.len(),
            format,
            rendered.len(),
            output_path
        );
        self.storage.write_file(output_path, &rendered).await?;

        if let Some(summary_path) = self.config.summary_path() {
            let summary = self.summarize(&result);
            let json = serde_json::to_vec_pretty(&summary)?;
            self.storage.write_file(summary_path, &json).await?;
            tracing::debug!("Summary written to {}", summary_path);
        }

        Ok(output_path.to_string())
    }
}
