//! End-to-end tests for [`DocumentExtractor`] over the formats the service
//! accepts, using the real decoder adapters. PDF happy paths need binary
//! fixtures the repo does not carry, so the PDF cases here pin the failure
//! classification; the decode chain itself is covered by the engine tests
//! in `doctext-core`.

use doctext_ingest::{DocumentExtractor, ErrorKind, ExtractionConfig, ExtractionRequest};

fn extractor() -> DocumentExtractor {
    DocumentExtractor::new(ExtractionConfig::default())
}

#[tokio::test]
async fn txt_upload_is_decoded_and_trimmed() {
    let request = ExtractionRequest::new(
        b"  Jane Doe\nRust, C++, distributed storage\n".to_vec(),
        "text/plain; charset=utf-8",
        "resume.txt",
    );
    let result = extractor().extract(request).await.unwrap();
    assert_eq!(result.text, "Jane Doe\nRust, C++, distributed storage");
    assert_eq!(result.page_count, None);
}

#[tokio::test]
async fn empty_txt_upload_is_a_legitimate_empty_document() {
    let request = ExtractionRequest::new(Vec::new(), "text/plain", "empty.txt");
    let result = extractor().extract(request).await.unwrap();
    assert_eq!(result.text, "");
}

#[tokio::test]
async fn non_utf8_txt_classifies_corrupt() {
    let request = ExtractionRequest::new(vec![0xff, 0xfe, 0x80], "text/plain", "weird.txt");
    let err = extractor().extract(request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidOrCorrupt);
}

#[tokio::test]
async fn oversized_upload_rejected_before_any_decoding() {
    let config = ExtractionConfig {
        max_file_size_bytes: 8,
        ..ExtractionConfig::default()
    };
    // Not even a recognizable format: the size check runs first.
    let request = ExtractionRequest::new(vec![0u8; 64], "application/x-unknown", "blob.bin");
    let err = DocumentExtractor::new(config).extract(request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::TooLarge);
}

#[tokio::test]
async fn unknown_format_rejected_with_mime_in_message() {
    let request = ExtractionRequest::new(b"GIF89a".to_vec(), "image/gif", "photo.gif");
    let err = extractor().extract(request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
    assert!(err.message.contains("image/gif"));
}

#[tokio::test]
async fn legacy_doc_rejected() {
    let request = ExtractionRequest::new(b"\xd0\xcf\x11\xe0".to_vec(), "application/msword", "cv.doc");
    let err = extractor().extract(request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
}

#[tokio::test]
async fn invalid_docx_classifies_corrupt() {
    let request = ExtractionRequest::new(
        b"PK\x03\x04 but nothing else".to_vec(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "cv.docx",
    );
    let err = extractor().extract(request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidOrCorrupt);
}

#[tokio::test]
async fn garbage_pdf_fails_classified_through_both_decoders() {
    let request = ExtractionRequest::new(
        b"%PDF-1.7 followed by garbage".to_vec(),
        "application/pdf",
        "cv.pdf",
    );
    let err = extractor().extract(request).await.unwrap_err();
    // Both decoders reject it; the page walk's diagnosis is final. The exact
    // kind depends on the library's message, but it must stay in the closed
    // taxonomy and must not be a success or a timeout.
    assert!(
        matches!(
            err.kind,
            ErrorKind::InvalidOrCorrupt | ErrorKind::ScannedNoText | ErrorKind::Unknown
        ),
        "unexpected kind {:?}",
        err.kind
    );
}

#[tokio::test]
async fn same_bytes_same_outcome() {
    let bytes = b"  Jane Doe, ten years of Rust  ".to_vec();
    let first = extractor()
        .extract(ExtractionRequest::new(bytes.clone(), "text/plain", "a.txt"))
        .await
        .unwrap();
    let second = extractor()
        .extract(ExtractionRequest::new(bytes, "text/plain", "a.txt"))
        .await
        .unwrap();
    assert_eq!(first, second);
}
