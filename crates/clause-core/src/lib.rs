//! # clause-core
//!
//! Foundation crate for the Clause document conflict detector.
//! Defines the document and contradiction models, errors, config, and
//! the fixed policy constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ClauseConfig;
pub use errors::{ClauseError, ClauseResult};
pub use models::{ConflictType, Contradiction, Document, Severity};
