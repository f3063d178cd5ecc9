//! Stable error codes for callers that cross a process boundary.

/// Every error enum implements this to provide a structured error code string.
pub trait ClauseErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNSUPPORTED_FILE_TYPE: &str = "UNSUPPORTED_FILE_TYPE";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
