use serde::Serialize;

use crate::{ErrorKind, ExtractionError};

/// The fixed client-facing rendering of a classified failure.
///
/// The HTTP boundary serializes this verbatim; extraction internals
/// (decoder names, library messages) never leak past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientResponse {
    pub status: u16,
    pub code: &'static str,
    pub message: &'static str,
}

/// Map an error kind onto its client response. Total over [`ErrorKind`].
pub fn client_response(kind: ErrorKind) -> ClientResponse {
    match kind {
        ErrorKind::ScannedNoText => ClientResponse {
            status: 422,
            code: "SCANNED_NO_TEXT",
            message: "PDF appears to be scanned images; upload a text-based PDF or DOCX",
        },
        ErrorKind::PasswordProtected => ClientResponse {
            status: 400,
            code: "PASSWORD_PROTECTED",
            message: "Password-protected PDFs are not supported",
        },
        ErrorKind::InvalidOrCorrupt => ClientResponse {
            status: 400,
            code: "INVALID_OR_CORRUPT",
            message: "Invalid or corrupted PDF",
        },
        ErrorKind::TooLarge => ClientResponse {
            status: 413,
            code: "TOO_LARGE",
            message: "File exceeds maximum size",
        },
        ErrorKind::UnsupportedFormat => ClientResponse {
            status: 400,
            code: "UNSUPPORTED_FORMAT",
            message: "Unsupported file type",
        },
        ErrorKind::TimedOut => ClientResponse {
            status: 503,
            code: "TIMED_OUT",
            message: "Processing temporarily unavailable; retry or use DOCX",
        },
        ErrorKind::DecoderUnavailable => ClientResponse {
            status: 503,
            code: "DECODER_UNAVAILABLE",
            message: "Processing temporarily unavailable; retry or use DOCX",
        },
        ErrorKind::Unknown => ClientResponse {
            status: 500,
            code: "UNKNOWN",
            message: "Failed to extract text",
        },
    }
}

impl From<&ExtractionError> for ClientResponse {
    fn from(err: &ExtractionError) -> Self {
        client_response(err.kind)
    }
}
