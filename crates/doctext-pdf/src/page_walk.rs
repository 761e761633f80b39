use doctext_core::{DecodeError, DecodedText, PdfDecoder};
use lopdf::Document;

use crate::text;
use crate::text_layer::classify_message;

/// Page-walking decoder backed by `lopdf`.
///
/// Opens the document once, then decodes each page's content stream
/// independently, so one undecodable page does not sink the rest. Page
/// texts are joined with a single newline, whitespace-collapsed, and
/// trimmed. Everything (document handle, per-page buffers) is stack-owned
/// and dropped on every exit path, including a deadline abandonment.
///
/// Output may legitimately be near-empty for image-only documents; the
/// engine applies the scanned-document threshold to decide.
#[derive(Debug, Default)]
pub struct PageWalkDecoder;

impl PageWalkDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PdfDecoder for PageWalkDecoder {
    fn name(&self) -> &'static str {
        "page-walk"
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedText, DecodeError> {
        let doc = Document::load_mem(bytes).map_err(|e| classify_message(&e.to_string()))?;

        if doc.is_encrypted() {
            return Err(DecodeError::Encrypted);
        }

        let pages = doc.get_pages();
        let page_count = pages.len();
        let mut page_texts = Vec::with_capacity(page_count);

        for (page_num, _) in pages {
            match doc.extract_text(&[page_num]) {
                Ok(content) => page_texts.push(content),
                Err(e) => {
                    tracing::debug!(page = page_num, error = %e, "skipping undecodable page");
                    page_texts.push(String::new());
                }
            }
        }

        let flattened = text::collapse_whitespace(&text::expand_ligatures(&page_texts.join("\n")));

        Ok(DecodedText {
            text: flattened,
            page_count: Some(page_count),
        })
    }
}
