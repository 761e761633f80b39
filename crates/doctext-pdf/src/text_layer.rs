use std::panic::{self, AssertUnwindSafe};

use doctext_core::{DecodeError, DecodedText, PdfDecoder};

use crate::text;

/// Text-layer decoder backed by `pdf-extract`.
///
/// Reads the text content streams embedded in the document without
/// rendering anything. Fast, but strict: encrypted documents and documents
/// whose internal structure it cannot parse fail here and fall through to
/// the page walk. `pdf-extract` is known to panic on pathological inputs,
/// so the call is isolated with `catch_unwind`.
#[derive(Debug, Default)]
pub struct TextLayerDecoder;

impl TextLayerDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PdfDecoder for TextLayerDecoder {
    fn name(&self) -> &'static str {
        "text-layer"
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedText, DecodeError> {
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

        let raw = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => return Err(classify_message(&e.to_string())),
            Err(_) => return Err(DecodeError::Invalid("text-layer decode panicked".to_string())),
        };

        let extracted = text::expand_ligatures(raw.trim());
        if extracted.is_empty() {
            return Err(DecodeError::NoText);
        }

        // Page count comes from the document catalog; failing to read it
        // drops the count rather than the whole decode.
        let page_count = lopdf::Document::load_mem(bytes)
            .ok()
            .map(|doc| doc.get_pages().len());

        Ok(DecodedText {
            text: extracted,
            page_count,
        })
    }
}

/// Classify a decoding-library error by its message markers.
///
/// The libraries expose failures as strings, not typed variants, so
/// encryption and structural problems are recognized by marker substrings.
pub(crate) fn classify_message(message: &str) -> DecodeError {
    let lower = message.to_ascii_lowercase();
    if lower.contains("password") || lower.contains("encrypt") || lower.contains("decrypt") {
        DecodeError::Encrypted
    } else if lower.contains("invalid")
        || lower.contains("malformed")
        || lower.contains("corrupt")
        || lower.contains("unexpected")
        || lower.contains("parse")
        || lower.contains("xref")
    {
        DecodeError::Invalid(message.to_string())
    } else {
        DecodeError::Other(message.to_string())
    }
}
