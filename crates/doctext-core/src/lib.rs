use std::time::Duration;

use thiserror::Error;

pub mod client;
pub mod config_file;
pub mod decoder;
pub mod dispatch;
pub mod engine;
pub mod guard;

// Re-export for convenience
pub use client::{ClientResponse, client_response};
pub use decoder::{DecodeError, DecodedText, PdfDecoder};
pub use dispatch::detect_format;
pub use engine::PdfEngine;

/// The format of an uploaded document, as resolved by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
            SourceFormat::Txt => "txt",
        }
    }
}

/// A single uploaded document to extract text from.
///
/// Owned exclusively by the call that issues it; nothing is shared across
/// concurrent extractions.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub bytes: Vec<u8>,
    pub declared_mime: String,
    pub file_name: String,
    pub size_bytes: u64,
}

impl ExtractionRequest {
    pub fn new(bytes: Vec<u8>, declared_mime: impl Into<String>, file_name: impl Into<String>) -> Self {
        let size_bytes = bytes.len() as u64;
        Self {
            bytes,
            declared_mime: declared_mime.into(),
            file_name: file_name.into(),
            size_bytes,
        }
    }
}

/// The flattened text of a successfully extracted document.
///
/// `text` is always trimmed. An extraction that cannot produce usable text
/// fails with a classified [`ExtractionError`] instead of returning an empty
/// string, with one exception: an empty TXT upload legitimately yields `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    pub page_count: Option<usize>,
    pub source_format: SourceFormat,
}

/// The closed set of failure classifications.
///
/// Every failure path in the service terminates in exactly one of these;
/// no raw library error reaches the boundary unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PasswordProtected,
    ScannedNoText,
    InvalidOrCorrupt,
    TooLarge,
    UnsupportedFormat,
    TimedOut,
    DecoderUnavailable,
    Unknown,
}

impl ErrorKind {
    /// All kinds, for exhaustiveness checks in tests.
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::PasswordProtected,
        ErrorKind::ScannedNoText,
        ErrorKind::InvalidOrCorrupt,
        ErrorKind::TooLarge,
        ErrorKind::UnsupportedFormat,
        ErrorKind::TimedOut,
        ErrorKind::DecoderUnavailable,
        ErrorKind::Unknown,
    ];

    /// Whether a different decoding strategy might succeed where this one
    /// failed. Recoverable kinds trigger the fallback chain at most once;
    /// all others are immediately fatal for the request.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            ErrorKind::TimedOut
                | ErrorKind::InvalidOrCorrupt
                | ErrorKind::DecoderUnavailable
                | ErrorKind::Unknown
        )
    }
}

/// A classified extraction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExtractionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ExtractionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the fallback decoder may still be tried after this failure.
    pub fn recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}

/// Runtime configuration consumed by the extraction service.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Try the page-walk decoder after a recoverable text-layer failure.
    pub enable_fallback: bool,
    /// Time budget per decode attempt. Each attempt gets a fresh budget.
    pub timeout: Duration,
    /// Cleaned page-walk output shorter than this is treated as a scanned
    /// document with no usable text layer.
    pub scanned_text_threshold: usize,
    /// Uploads larger than this are rejected before any decode work runs.
    pub max_file_size_bytes: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            enable_fallback: true,
            timeout: Duration::from_secs(20),
            scanned_text_threshold: 30,
            max_file_size_bytes: 10 * 1024 * 1024,
        }
    }
}
