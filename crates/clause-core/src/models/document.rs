use serde::{Deserialize, Serialize};

/// A decoded document handed to the analysis engine.
///
/// `text` is plain text regardless of the original file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub text: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}
