//! Error types. One enum per subsystem, unified under [`ClauseError`].

mod config_error;
pub mod error_code;
mod ingest_error;

pub use config_error::ConfigError;
pub use error_code::ClauseErrorCode;
pub use ingest_error::IngestError;

/// Top-level error for the Clause workspace.
#[derive(Debug, thiserror::Error)]
pub enum ClauseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClauseErrorCode for ClauseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type ClauseResult<T> = Result<T, ClauseError>;
