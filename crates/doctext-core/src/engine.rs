use std::sync::Arc;

use crate::decoder::{DecodeError, DecodedText, PdfDecoder};
use crate::{ErrorKind, ExtractionConfig, ExtractionError, ExtractionResult, SourceFormat, guard};

/// Which stage of the decode chain an attempt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderStage {
    TextLayer,
    PageWalk,
}

/// Two-stage PDF text extraction.
///
/// Runs the text-layer decoder first; if it fails in a way a deeper read
/// might fix, runs the page-walk decoder with a fresh time budget. Fatal
/// failures (password protection, oversize, unsupported format) are not
/// decoder-specific and end the chain immediately. Exactly one result is
/// returned per call, and no state is shared between concurrent calls.
pub struct PdfEngine {
    config: ExtractionConfig,
    primary: Arc<dyn PdfDecoder>,
    fallback: Arc<dyn PdfDecoder>,
}

impl PdfEngine {
    pub fn new(
        config: ExtractionConfig,
        primary: Arc<dyn PdfDecoder>,
        fallback: Arc<dyn PdfDecoder>,
    ) -> Self {
        Self {
            config,
            primary,
            fallback,
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract the text content of a PDF.
    pub async fn extract(&self, bytes: Vec<u8>) -> Result<ExtractionResult, ExtractionError> {
        // Shared with the blocking tasks; an abandoned attempt may outlive
        // the deadline, so it cannot borrow from this call's stack.
        let bytes: Arc<[u8]> = Arc::from(bytes);

        let err = match self.attempt(DecoderStage::TextLayer, &bytes).await {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };

        if !err.recoverable() {
            return Err(err);
        }
        if !self.config.enable_fallback {
            tracing::debug!(error = %err, "page walk disabled, surfacing text-layer failure");
            return Err(err);
        }

        tracing::debug!(error = %err, "text-layer decode failed, walking pages");
        // The page walk inspects the document more deeply, so its diagnosis
        // supersedes the first attempt's.
        self.attempt(DecoderStage::PageWalk, &bytes).await
    }

    /// Run one decoder on the blocking pool under a fresh deadline.
    async fn attempt(
        &self,
        stage: DecoderStage,
        bytes: &Arc<[u8]>,
    ) -> Result<ExtractionResult, ExtractionError> {
        let decoder = match stage {
            DecoderStage::TextLayer => Arc::clone(&self.primary),
            DecoderStage::PageWalk => Arc::clone(&self.fallback),
        };
        let name = decoder.name();
        let input = Arc::clone(bytes);

        let work = tokio::task::spawn_blocking(move || decoder.decode(&input));
        let joined = guard::with_deadline(self.config.timeout, work).await?;

        let decoded = match joined {
            Ok(outcome) => outcome.map_err(classify_decode_error)?,
            Err(e) => {
                return Err(ExtractionError::new(
                    ErrorKind::Unknown,
                    format!("{name} decoder task failed: {e}"),
                ));
            }
        };

        self.finish(stage, decoded)
    }

    /// Final cleanup and degenerate-output checks on a successful decode.
    fn finish(
        &self,
        stage: DecoderStage,
        decoded: DecodedText,
    ) -> Result<ExtractionResult, ExtractionError> {
        let text = decoded.text.trim().to_string();

        // A near-empty page walk means the pages carry images, not text.
        // The length cutoff is a heuristic; very short legitimate documents
        // can trip it (see scanned_text_threshold).
        if stage == DecoderStage::PageWalk && text.chars().count() < self.config.scanned_text_threshold
        {
            return Err(ExtractionError::new(
                ErrorKind::ScannedNoText,
                format!(
                    "page walk produced {} characters; document appears to be scanned images",
                    text.chars().count()
                ),
            ));
        }

        if text.is_empty() {
            return Err(ExtractionError::new(
                ErrorKind::InvalidOrCorrupt,
                "decoder produced no text",
            ));
        }

        Ok(ExtractionResult {
            text,
            page_count: decoded.page_count,
            source_format: SourceFormat::Pdf,
        })
    }
}

/// Map a decoder failure onto the error taxonomy.
fn classify_decode_error(err: DecodeError) -> ExtractionError {
    let message = err.to_string();
    let kind = match err {
        DecodeError::Encrypted => ErrorKind::PasswordProtected,
        DecodeError::Invalid(_) | DecodeError::NoText => ErrorKind::InvalidOrCorrupt,
        DecodeError::Unavailable(_) => ErrorKind::DecoderUnavailable,
        DecodeError::Other(_) => ErrorKind::Unknown,
    };
    ExtractionError::new(kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypted_classifies_fatal() {
        let err = classify_decode_error(DecodeError::Encrypted);
        assert_eq!(err.kind, ErrorKind::PasswordProtected);
        assert!(!err.recoverable());
    }

    #[test]
    fn structural_failures_classify_recoverable() {
        for decode_err in [
            DecodeError::Invalid("xref table missing".into()),
            DecodeError::NoText,
            DecodeError::Unavailable("decoder not linked".into()),
            DecodeError::Other("glyph map exploded".into()),
        ] {
            let err = classify_decode_error(decode_err);
            assert!(err.recoverable(), "{:?} should be recoverable", err.kind);
        }
    }

    #[test]
    fn other_maps_to_unknown_with_message() {
        let err = classify_decode_error(DecodeError::Other("glyph map exploded".into()));
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert!(err.message.contains("glyph map exploded"));
    }
}
