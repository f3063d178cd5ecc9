use std::fmt;

use serde::{Deserialize, Serialize};

/// Which policy pattern admitted a sentence as a key phrase.
///
/// Declaration order is match priority: the first matching category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    /// must / should / shall / required ...
    Obligation,
    /// not allowed / prohibited / cannot ...
    Prohibition,
    /// deadline / due date / submit by ...
    Deadline,
    /// minimum / maximum / at least ...
    Bound,
    /// attendance / present / absent
    Attendance,
    /// notice period / advance notice / N days notice
    NoticePeriod,
    /// A number followed by a time unit or percent.
    NumericUnit,
    /// before / after / by / until followed by a word or number.
    RelativeDate,
}

impl PhraseCategory {
    pub const ALL: [PhraseCategory; 8] = [
        Self::Obligation,
        Self::Prohibition,
        Self::Deadline,
        Self::Bound,
        Self::Attendance,
        Self::NoticePeriod,
        Self::NumericUnit,
        Self::RelativeDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Obligation => "obligation",
            Self::Prohibition => "prohibition",
            Self::Deadline => "deadline",
            Self::Bound => "bound",
            Self::Attendance => "attendance",
            Self::NoticePeriod => "notice_period",
            Self::NumericUnit => "numeric_unit",
            Self::RelativeDate => "relative_date",
        }
    }
}

impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence that survived pattern filtering, with the category that admitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPhrase {
    pub text: String,
    pub category: PhraseCategory,
}
