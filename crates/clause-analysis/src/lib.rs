//! # clause-analysis
//!
//! Contradiction detection across a set of decoded documents.
//!
//! ## Pipeline
//! 1. **Extraction**: split each document into sentences, keep the ones
//!    matching a policy pattern (obligations, deadlines, bounds, ...)
//! 2. **Comparison**: for each phrase pair from two different documents,
//!    skip near-duplicates, then look for percentage and time-period conflicts
//! 3. **Aggregation**: deduplicate, attach ids and document names, cap the output
//!
//! [`AnalysisEngine`] wraps the pipeline for batches of ingested files,
//! dropping files that failed to decode.

pub mod aggregator;
pub mod comparison;
pub mod engine;
pub mod extraction;

pub use aggregator::{aggregate, ContradictionAggregator};
pub use engine::AnalysisEngine;
