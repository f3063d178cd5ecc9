//! Test fixture loader for Clause golden datasets.
//!
//! Provides typed deserialization of the golden JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

// ---------------------------------------------------------------------------
// Golden contradiction cases
// ---------------------------------------------------------------------------

/// One golden case: a document set and the contradictions it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input: GoldenInput,
    pub expected: GoldenExpected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenInput {
    pub documents: Vec<GoldenDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenDocument {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpected {
    /// Key phrases per input document, in document order. Optional.
    #[serde(default)]
    pub key_phrases: Option<Vec<Vec<String>>>,
    /// Contradictions in discovery order.
    pub contradictions: Vec<ExpectedContradiction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedContradiction {
    pub doc1_name: String,
    pub doc2_name: String,
    pub doc1_text: String,
    pub doc2_text: String,
    #[serde(rename = "type")]
    pub conflict_type: String,
    pub severity: String,
}

/// Load every golden contradiction case.
pub fn load_golden_cases() -> Vec<GoldenCase> {
    list_fixtures("golden")
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            load_fixture(&format!("golden/{name}"))
        })
        .collect()
}
