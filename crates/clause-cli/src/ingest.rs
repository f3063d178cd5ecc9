//! File ingestion: turn files on disk into [`Document`]s.
//!
//! Only plain text is decoded here. Word-processor and page-layout formats
//! are reported as unsupported and left to an external converter.

use std::path::Path;

use clause_core::errors::IngestError;
use clause_core::models::Document;
use tracing::debug;

/// Read one file into a document.
pub fn ingest_file(path: &Path) -> Result<Document, IngestError> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let is_text = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_text {
        return Err(IngestError::UnsupportedFileType { filename });
    }

    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let text = decode_text(&filename, bytes)?;
    debug!(%filename, characters = text.chars().count(), "ingested");
    Ok(Document { filename, text })
}

/// Decode UTF-8 text content.
pub fn decode_text(filename: &str, bytes: Vec<u8>) -> Result<String, IngestError> {
    String::from_utf8(bytes).map_err(|e| IngestError::DecodeFailed {
        filename: filename.to_string(),
        format: "TXT".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clause_core::errors::ClauseErrorCode;
    use std::io::Write;

    #[test]
    fn reads_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lease.TXT");
        std::fs::write(&path, "Tenants must give 30 days notice.").unwrap();

        let doc = ingest_file(&path).unwrap();
        assert_eq!(doc.filename, "Lease.TXT");
        assert_eq!(doc.text, "Tenants must give 30 days notice.");
    }

    #[test]
    fn rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.docx");
        std::fs::write(&path, b"PK\x03\x04").unwrap();

        let err = ingest_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_FILE_TYPE");
        assert_eq!(err.source_name(), "contract.docx");
    }

    #[test]
    fn invalid_utf8_is_decode_failure() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = ingest_file(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::DecodeFailed { .. }));
        assert!(err.to_string().contains("TXT"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ingest_file(Path::new("/nonexistent/policy.txt")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
