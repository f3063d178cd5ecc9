//! # clause-report
//!
//! Turns a list of contradictions into a prioritized report: counts per
//! severity, the most common conflict types, and one remediation
//! recommendation per contradiction with a fixed impact and timeline.

pub mod priority;
pub mod summarizer;

pub use summarizer::{
    summarize, DetailedReport, Recommendation, Recommendations, ReportMetadata, ReportSummary,
};
