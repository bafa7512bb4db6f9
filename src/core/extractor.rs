use crate::core::graph::WordGraph;
use crate::core::kcore::core_numbers;
use crate::core::rank::core_rank;
use crate::core::selection::KeywordSelector;
use crate::domain::model::{Document, DocumentKeywords, KeywordStatus, ScoredKeyword};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{KeywordError, Result};

/// Runs graph-of-words, k-core decomposition, CoreRank and greedy selection
/// over a single document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordExtractor {
    window_size: usize,
    lambda: f64,
    count: usize,
    allow_partial: bool,
}

impl KeywordExtractor {
    pub fn new(window_size: usize, lambda: f64, count: usize) -> Self {
        Self {
            window_size,
            lambda,
            count,
            allow_partial: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.window_size(), config.lambda(), config.keyword_count())
    }

    /// Keep the keywords chosen so far instead of failing when the
    /// candidates run out.
    pub fn allow_partial(mut self, allow: bool) -> Self {
        self.allow_partial = allow;
        self
    }

    pub fn extract(&self, document: &Document) -> Result<DocumentKeywords> {
        let graph = WordGraph::build(&document.words, self.window_size);
        let cores = core_numbers(&graph)?;
        let ranks = core_rank(&graph, &cores);
        let selection = KeywordSelector::new(self.lambda, self.count).select(&graph, &ranks);

        let mut vertices = selection.vertices();
        vertices.sort_unstable();

        tracing::debug!(
            document = document.index,
            words = document.words.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            selected = vertices.len(),
            quality = selection.quality,
            "extracted keywords"
        );

        if !selection.is_complete() && !self.allow_partial {
            return Err(KeywordError::InsufficientCandidates {
                document: document.index,
                requested: self.count,
                selected: vertices
                    .iter()
                    .map(|&v| graph.word(v).to_string())
                    .collect(),
            });
        }

        let status = if selection.is_complete() {
            KeywordStatus::Complete
        } else {
            KeywordStatus::Partial
        };

        let keywords = vertices
            .into_iter()
            .map(|v| ScoredKeyword {
                word: graph.word(v).to_string(),
                core_number: cores[v],
                core_rank: ranks[v],
            })
            .collect();

        Ok(DocumentKeywords {
            document: document.index,
            line: document.line,
            status,
            keywords,
            quality: selection.quality,
            error: None,
        })
    }
}
