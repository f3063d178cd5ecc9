use super::error_code::{self, ClauseErrorCode};

/// Document ingestion errors. A document that fails ingestion never
/// reaches the analysis engine.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unsupported file type: {filename}")]
    UnsupportedFileType { filename: String },

    #[error("error reading {format}: {filename}: {reason}")]
    DecodeFailed {
        filename: String,
        format: String,
        reason: String,
    },

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// The file name or path the failure refers to.
    pub fn source_name(&self) -> &str {
        match self {
            Self::UnsupportedFileType { filename } | Self::DecodeFailed { filename, .. } => {
                filename
            }
            Self::Io { path, .. } => path,
        }
    }
}

impl ClauseErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFileType { .. } => error_code::UNSUPPORTED_FILE_TYPE,
            Self::DecodeFailed { .. } => error_code::DECODE_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
