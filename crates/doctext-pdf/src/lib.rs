//! Concrete PDF decoder adapters.
//!
//! Two strategies, invoked in fixed order by the engine in `doctext-core`:
//!
//! - [`TextLayerDecoder`] reads the embedded text layer directly via
//!   `pdf-extract`. Fast; the default path.
//! - [`PageWalkDecoder`] opens the document with `lopdf` and decodes each
//!   page's content stream independently. Slower, more tolerant of
//!   structural quirks.
//!
//! Adapters never touch the error taxonomy directly: they report
//! [`DecodeError`](doctext_core::DecodeError) values and leave
//! classification to the engine.

pub mod page_walk;
pub mod text;
pub mod text_layer;

pub use page_walk::PageWalkDecoder;
pub use text_layer::TextLayerDecoder;
