use crate::{ErrorKind, ExtractionError, SourceFormat};

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const LEGACY_DOC_MIME: &str = "application/msword";

/// Resolve the source format of an upload from its declared MIME type and
/// filename.
///
/// Precedence: exact MIME match first, file-extension match second (both
/// ASCII case-insensitive; MIME parameters like `; charset=utf-8` are
/// ignored). Legacy `.doc` / `application/msword` is deliberately
/// unsupported — it is not reliably decodable without a native converter.
///
/// Pure classification; no side effects.
pub fn detect_format(declared_mime: &str, file_name: &str) -> Result<SourceFormat, ExtractionError> {
    let mime = normalize_mime(declared_mime);

    match mime.as_str() {
        PDF_MIME => return Ok(SourceFormat::Pdf),
        DOCX_MIME => return Ok(SourceFormat::Docx),
        LEGACY_DOC_MIME => return Err(legacy_doc_error()),
        m if m.starts_with("text/") => return Ok(SourceFormat::Txt),
        _ => {}
    }

    match extension(file_name).as_deref() {
        Some("pdf") => Ok(SourceFormat::Pdf),
        Some("docx") => Ok(SourceFormat::Docx),
        Some("txt") => Ok(SourceFormat::Txt),
        Some("doc") => Err(legacy_doc_error()),
        _ => Err(ExtractionError::new(
            ErrorKind::UnsupportedFormat,
            format!(
                "unsupported file type: {} ({})",
                if mime.is_empty() { "<no MIME type>" } else { &mime },
                file_name
            ),
        )),
    }
}

fn normalize_mime(declared: &str) -> String {
    declared
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

fn extension(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn legacy_doc_error() -> ExtractionError {
    ExtractionError::new(
        ErrorKind::UnsupportedFormat,
        "legacy .doc files are not supported; save as .docx or PDF",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_match_wins_over_extension() {
        // Declared MIME says PDF even though the filename says otherwise.
        let format = detect_format("application/pdf", "resume.txt").unwrap();
        assert_eq!(format, SourceFormat::Pdf);
    }

    #[test]
    fn extension_used_when_mime_unknown() {
        assert_eq!(
            detect_format("application/octet-stream", "resume.PDF").unwrap(),
            SourceFormat::Pdf
        );
        assert_eq!(
            detect_format("", "job-description.Docx").unwrap(),
            SourceFormat::Docx
        );
        assert_eq!(detect_format("", "notes.TXT").unwrap(), SourceFormat::Txt);
    }

    #[test]
    fn any_text_mime_is_txt() {
        assert_eq!(detect_format("text/plain", "upload").unwrap(), SourceFormat::Txt);
        assert_eq!(detect_format("text/markdown", "upload").unwrap(), SourceFormat::Txt);
    }

    #[test]
    fn mime_parameters_are_ignored() {
        assert_eq!(
            detect_format("text/plain; charset=utf-8", "upload").unwrap(),
            SourceFormat::Txt
        );
    }

    #[test]
    fn docx_mime_recognized() {
        let format = detect_format(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "upload",
        )
        .unwrap();
        assert_eq!(format, SourceFormat::Docx);
    }

    #[test]
    fn legacy_doc_rejected_by_mime_and_extension() {
        for (mime, name) in [("application/msword", "cv.bin"), ("", "cv.doc")] {
            let err = detect_format(mime, name).unwrap_err();
            assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
        }
    }

    #[test]
    fn unknown_pair_rejected_with_mime_in_message() {
        let err = detect_format("image/png", "scan.png").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
        assert!(err.message.contains("image/png"));
    }
}
