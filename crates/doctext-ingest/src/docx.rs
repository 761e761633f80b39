use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use doctext_core::{ErrorKind, ExtractionError, ExtractionResult, SourceFormat};

/// Extract the raw text of a DOCX package.
///
/// Single-shot with no fallback chain: the OOXML container either parses or
/// it doesn't, and every failure classifies as corrupt. Paragraph texts are
/// joined with newlines; DOCX has no fixed pages, so `page_count` is absent.
pub fn extract(bytes: &[u8]) -> Result<ExtractionResult, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        ExtractionError::new(
            ErrorKind::InvalidOrCorrupt,
            format!("failed to read document package: {e}"),
        )
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let para_text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                RunChild::Text(t) => Some(t.text.as_str()),
                                _ => None,
                            })
                            .collect::<String>(),
                    ),
                    _ => None,
                })
                .collect();

            if !para_text.is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    let text = paragraphs.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(ExtractionError::new(
            ErrorKind::InvalidOrCorrupt,
            "document package contains no text",
        ));
    }

    Ok(ExtractionResult {
        text,
        page_count: None,
        source_format: SourceFormat::Docx,
    })
}
