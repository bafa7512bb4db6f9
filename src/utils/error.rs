use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeywordError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("TSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Heap invariant violated: {0}")]
    HeapError(#[from] crate::core::heap::HeapError),

    #[error(
        "Only {} of {requested} keywords could be selected for document {document}",
        .selected.len()
    )]
    InsufficientCandidates {
        document: usize,
        requested: usize,
        selected: Vec<String>,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Extraction,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl KeywordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::EncodingError(_) => ErrorCategory::Io,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::HeapError(_)
            | Self::InsufficientCandidates { .. }
            | Self::ProcessingError { .. } => ErrorCategory::Extraction,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientCandidates { .. } => ErrorSeverity::Medium,
            Self::HeapError(_) => ErrorSeverity::Critical,
            Self::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the input file exists and the output directory is writable",
            Self::EncodingError(_) => "Convert the input document to UTF-8",
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Try a different output format or check available disk space"
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Review the configuration values and run again",
            Self::HeapError(_) => "This is a bug; please report it together with the input document",
            Self::InsufficientCandidates { .. } => {
                "Request fewer keywords, lower lambda, or use the 'skip' or 'partial' error policy"
            }
            Self::ProcessingError { .. } => "Re-run with --verbose to see per-document details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InsufficientCandidates {
                document,
                requested,
                selected,
            } => format!(
                "Document {} does not have enough distinct words to pick {} keywords (picked {})",
                document + 1,
                requested,
                selected.len()
            ),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// Exit code used by the binaries for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, KeywordError>;
