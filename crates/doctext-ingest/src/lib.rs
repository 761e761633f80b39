//! Upload-facing document extraction.
//!
//! The upload boundary hands over raw bytes plus declared MIME type and
//! filename; this crate enforces the size cap, resolves the format, and
//! runs the matching extractor. PDFs go through the two-stage decode chain
//! in `doctext-core`; TXT and DOCX are single-shot library operations.

use std::sync::Arc;

use doctext_core::PdfEngine;
use doctext_pdf::{PageWalkDecoder, TextLayerDecoder};

pub mod docx;
pub mod txt;

// Re-export the domain types so callers need only this crate.
pub use doctext_core::{
    ClientResponse, ErrorKind, ExtractionConfig, ExtractionError, ExtractionRequest,
    ExtractionResult, SourceFormat, client_response, config_file,
};

/// The document text extraction service.
///
/// Holds no per-request state; concurrent extractions proceed fully in
/// parallel. Construct once and share.
pub struct DocumentExtractor {
    config: ExtractionConfig,
    engine: PdfEngine,
}

impl DocumentExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        let engine = PdfEngine::new(
            config.clone(),
            Arc::new(TextLayerDecoder::new()),
            Arc::new(PageWalkDecoder::new()),
        );
        Self { config, engine }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract the plain text of one uploaded document.
    ///
    /// Local validation (size cap, format dispatch) runs first, so oversized
    /// and unsupported uploads never cost decode work.
    pub async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractionError> {
        if request.size_bytes > self.config.max_file_size_bytes {
            return Err(ExtractionError::new(
                ErrorKind::TooLarge,
                format!(
                    "file is {} bytes, limit is {} bytes",
                    request.size_bytes, self.config.max_file_size_bytes
                ),
            ));
        }

        let format = doctext_core::detect_format(&request.declared_mime, &request.file_name)?;
        tracing::debug!(
            file = %request.file_name,
            format = format.as_str(),
            size = request.size_bytes,
            "extracting document"
        );

        match format {
            SourceFormat::Txt => txt::extract(&request.bytes),
            SourceFormat::Docx => {
                // The OOXML parse is blocking CPU work.
                let bytes = request.bytes;
                tokio::task::spawn_blocking(move || docx::extract(&bytes))
                    .await
                    .map_err(|e| {
                        ExtractionError::new(
                            ErrorKind::Unknown,
                            format!("docx extraction task failed: {e}"),
                        )
                    })?
            }
            SourceFormat::Pdf => self.engine.extract(request.bytes).await,
        }
    }
}
