use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One pre-processed utterance or transcript: a line of whitespace-separated words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Position among the non-empty lines of the input, starting at 0.
    pub index: usize,
    /// Line number in the input file, starting at 1.
    pub line: usize,
    pub words: Vec<String>,
}

impl Document {
    /// Splits a corpus into documents. Lines end at `\n`, `\r\n` or a lone
    /// `\r`. Blank lines are not documents.
    pub fn parse_corpus(text: &str) -> Vec<Document> {
        text.split("\r\n")
            .flat_map(|chunk| chunk.split(['\r', '\n']))
            .enumerate()
            .filter_map(|(i, line)| {
                let words: Vec<String> = line.split_whitespace().map(String::from).collect();
                (!words.is_empty()).then_some((i + 1, words))
            })
            .enumerate()
            .map(|(index, (line, words))| Document { index, line, words })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub word: String,
    pub core_number: u64,
    pub core_rank: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordStatus {
    Complete,
    Partial,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentKeywords {
    pub document: usize,
    pub line: usize,
    pub status: KeywordStatus,
    /// Sorted by word.
    pub keywords: Vec<ScoredKeyword>,
    pub quality: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentKeywords {
    pub fn skipped(document: &Document, error: impl fmt::Display) -> Self {
        Self {
            document: document.index,
            line: document.line,
            status: KeywordStatus::Skipped,
            keywords: Vec::new(),
            quality: 0.0,
            error: Some(error.to_string()),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.keywords.iter().map(|k| k.word.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub documents: Vec<DocumentKeywords>,
    pub started_at: DateTime<Utc>,
}

impl ExtractionResult {
    pub fn count(&self, status: KeywordStatus) -> usize {
        self.documents.iter().filter(|d| d.status == status).count()
    }

    pub fn keyword_total(&self) -> usize {
        self.documents.iter().map(|d| d.keywords.len()).sum()
    }
}

/// Run report written next to the keywords when a summary path is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub input: String,
    pub output: String,
    pub format: OutputFormat,
    pub window_size: usize,
    pub lambda: f64,
    pub keywords_requested: usize,
    pub documents: usize,
    pub complete: usize,
    pub partial: usize,
    pub skipped: usize,
    pub keywords_written: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line of space-separated keywords per document
    #[default]
    Text,
    /// JSON Lines with scores
    Json,
    /// Tab-separated table, one row per keyword
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Tsv => "tsv",
        };
        f.write_str(name)
    }
}

/// What to do with a document whose extraction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort the whole run
    #[default]
    Fail,
    /// Record the document as skipped and continue
    Skip,
    /// Keep the keywords selected before candidates ran out
    Partial,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Partial => "partial",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corpus_skips_blank_lines() {
        let docs = Document::parse_corpus("alpha beta\n\n   \n  gamma\tdelta  \nepsilon");

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].index, 0);
        assert_eq!(docs[0].line, 1);
        assert_eq!(docs[0].words, vec!["alpha", "beta"]);
        assert_eq!(docs[1].index, 1);
        assert_eq!(docs[1].line, 4);
        assert_eq!(docs[1].words, vec!["gamma", "delta"]);
        assert_eq!(docs[2].line, 5);
    }

    #[test]
    fn test_parse_corpus_handles_crlf() {
        let docs = Document::parse_corpus("a b\r\nc d\r\n");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].words, vec!["c", "d"]);
    }

    #[test]
    fn test_parse_corpus_handles_lone_carriage_returns() {
        let docs = Document::parse_corpus("a b c\rd e f\r");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].words, vec!["a", "b", "c"]);
        assert_eq!(docs[1].words, vec!["d", "e", "f"]);
        assert_eq!(docs[1].line, 2);

        let docs = Document::parse_corpus("a\r\n\rb\nc");
        let lines: Vec<usize> = docs.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_skipped_document_serializes_error() {
        let doc = Document {
            index: 2,
            line: 7,
            words: vec!["x".to_string()],
        };
        let skipped = DocumentKeywords::skipped(&doc, "no candidates");
        let json = serde_json::to_value(&skipped).unwrap();

        assert_eq!(json["status"], "skipped");
        assert_eq!(json["document"], 2);
        assert_eq!(json["line"], 7);
        assert_eq!(json["error"], "no candidates");
    }

    #[test]
    fn test_enums_use_lowercase_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Tsv).unwrap(), "\"tsv\"");
        assert_eq!(
            serde_json::from_str::<ErrorPolicy>("\"partial\"").unwrap(),
            ErrorPolicy::Partial
        );
        assert_eq!(OutputFormat::default().to_string(), "text");
        assert_eq!(ErrorPolicy::default().to_string(), "fail");
    }
}
