use crate::utils::error::{KeywordError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(KeywordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number >= 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if input == output {
        return Err(KeywordError::InvalidConfigValueError {
            field: "output".to_string(),
            value: output.to_string(),
            reason: "Output would overwrite the input document".to_string(),
        });
    }
    Ok(())
}

/// The run summary must not land on the input document or the keyword output.
pub fn validate_summary_path(input: &str, output: &str, summary: &str) -> Result<()> {
    if summary == input || summary == output {
        let target = if summary == input { "input document" } else { "keyword output" };
        return Err(KeywordError::InvalidConfigValueError {
            field: "summary".to_string(),
            value: summary.to_string(),
            reason: format!("Summary would overwrite the {}", target),
        });
    }
    Ok(())
}

/// Checks shared by every configuration source.
pub fn validate_extraction(window_size: usize, lambda: f64, keyword_count: usize) -> Result<()> {
    validate_positive_number("window_size", window_size, 2)?;
    validate_non_negative("lambda", lambda)?;
    validate_positive_number("keywords", keyword_count, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("document", "transcripts.txt").is_ok());
        assert!(validate_path("document", "").is_err());
        assert!(validate_path("document", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("workers", 4, 1).is_ok());
        assert!(validate_positive_number("workers", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("lambda", 0.0).is_ok());
        assert!(validate_non_negative("lambda", 0.1).is_ok());
        assert!(validate_non_negative("lambda", -0.1).is_err());
        assert!(validate_non_negative("lambda", f64::NAN).is_err());
        assert!(validate_non_negative("lambda", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_extraction() {
        assert!(validate_extraction(3, 0.1, 3).is_ok());
        assert!(validate_extraction(1, 0.1, 3).is_err());
        assert!(validate_extraction(3, 0.1, 0).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("in.txt", "out.txt").is_ok());
        assert!(validate_distinct_paths("in.txt", "in.txt").is_err());
    }

    #[test]
    fn test_validate_summary_path() {
        assert!(validate_summary_path("in.txt", "out.txt", "summary.json").is_ok());

        let err = validate_summary_path("in.txt", "out.txt", "in.txt").unwrap_err();
        assert!(err.to_string().contains("input document"));

        let err = validate_summary_path("in.txt", "out.txt", "out.txt").unwrap_err();
        assert!(err.to_string().contains("keyword output"));
    }
}
