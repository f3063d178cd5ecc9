use crate::constants;

// Analysis defaults
pub const DEFAULT_MAX_CONTRADICTIONS: usize = constants::DEFAULT_MAX_CONTRADICTIONS;
pub const DEFAULT_MAX_PHRASES_PER_DOCUMENT: Option<usize> = None;

// Observability defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
