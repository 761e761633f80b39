use doctext_core::{ErrorKind, ExtractionError, ExtractionResult, SourceFormat};

/// Decode a plain-text upload.
///
/// UTF-8 decode plus trim; the one format where an empty result is
/// legitimate (an empty file is an empty document, not a failure).
pub fn extract(bytes: &[u8]) -> Result<ExtractionResult, ExtractionError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExtractionError::new(
            ErrorKind::InvalidOrCorrupt,
            format!("text file is not valid UTF-8: {e}"),
        )
    })?;

    Ok(ExtractionResult {
        text: text.trim().to_string(),
        page_count: None,
        source_format: SourceFormat::Txt,
    })
}
