/// Clause system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentences shorter than this many characters (after trimming) are never key phrases.
pub const MIN_KEY_PHRASE_CHARS: usize = 16;

/// Phrase pairs whose similarity ratio exceeds this are restatements, not conflicts.
pub const NEAR_DUPLICATE_RATIO: f64 = 0.7;

/// Percentage-point gap at which a percentage conflict becomes high severity.
pub const PERCENTAGE_HIGH_SEVERITY_GAP: f64 = 10.0;

/// Gap (in the shared unit) at which a time-period conflict becomes high severity.
pub const TIME_PERIOD_HIGH_SEVERITY_GAP: u64 = 7;

/// Default cap on contradictions returned from a single aggregation.
pub const DEFAULT_MAX_CONTRADICTIONS: usize = 15;

/// Number of entries kept in a report's "most common conflict types" list.
pub const REPORT_TOP_CONFLICT_TYPES: usize = 5;

/// Environment variable read for tracing filter directives.
pub const LOG_ENV_VAR: &str = "CLAUSE_LOG";
