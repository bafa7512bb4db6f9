use crate::domain::model::{DocumentKeywords, OutputFormat};
use crate::utils::error::{KeywordError, Result};

pub const TSV_HEADER: [&str; 5] = ["document", "line", "keyword", "core_number", "core_rank"];

pub fn render(documents: &[DocumentKeywords], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => Ok(render_text(documents)),
        OutputFormat::Json => render_json(documents),
        OutputFormat::Tsv => render_tsv(documents),
    }
}

/// One line per document. Skipped documents keep an empty line so that
/// output lines stay aligned with the input documents.
fn render_text(documents: &[DocumentKeywords]) -> Vec<u8> {
    let mut out = String::new();
    for document in documents {
        out.push_str(&document.words().collect::<Vec<_>>().join(" "));
        out.push('\n');
    }
    out.into_bytes()
}

fn render_json(documents: &[DocumentKeywords]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for document in documents {
        serde_json::to_writer(&mut out, document)?;
        out.push(b'\n');
    }
    Ok(out)
}

fn render_tsv(documents: &[DocumentKeywords]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    writer.write_record(TSV_HEADER)?;
    for document in documents {
        for keyword in &document.keywords {
            writer.write_record([
                document.document.to_string(),
                document.line.to_string(),
                keyword.word.clone(),
                keyword.core_number.to_string(),
                keyword.core_rank.to_string(),
            ])?;
        }
    }

    writer.into_inner().map_err(|e| {
        KeywordError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string()))
    })
}
