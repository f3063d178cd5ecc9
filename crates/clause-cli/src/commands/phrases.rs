use std::path::Path;

use clause_analysis::extraction;
use serde::Serialize;

use crate::ingest;

#[derive(Debug, Serialize)]
struct PhraseListing {
    filename: String,
    phrases: Vec<clause_core::models::KeyPhrase>,
}

/// Print the key phrases of one document with their categories.
pub fn handle(file: &Path, pretty: bool) -> anyhow::Result<()> {
    let doc = ingest::ingest_file(file)?;
    let listing = PhraseListing {
        phrases: extraction::extract_classified(&doc.text),
        filename: doc.filename,
    };
    super::print_json(&listing, pretty)
}
