use thiserror::Error;

/// Raw output of a single decoder pass over a PDF.
///
/// The engine owns final cleanup (trimming, scanned-document heuristics);
/// decoders report what they read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub page_count: Option<usize>,
}

/// Failure reported by a decoder adapter.
///
/// Adapters translate library errors into this closed set so the engine can
/// classify them without knowing which decoding crate produced them.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("document is password-protected")]
    Encrypted,
    #[error("invalid PDF structure: {0}")]
    Invalid(String),
    #[error("document contains no extractable text")]
    NoText,
    #[error("decoder unavailable: {0}")]
    Unavailable(String),
    #[error("decode failed: {0}")]
    Other(String),
}

/// A synchronous PDF text decoder.
///
/// Implementors do blocking CPU work; the engine runs them on the blocking
/// pool and applies the per-attempt deadline around them. Two concrete
/// strategies exist (text-layer and page-walk) and are invoked in a fixed
/// order — this is a reliability chain, not a plugin registry.
pub trait PdfDecoder: Send + Sync {
    /// A short stable name for logs (e.g. "text-layer", "page-walk").
    fn name(&self) -> &'static str;

    /// Decode the document's text content from raw bytes.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedText, DecodeError>;
}
