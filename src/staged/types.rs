//! Staged file value type.

use crate::diff::{AddedLine, parse_added_lines};

/// One staged file and the lines its staged change adds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Repository-relative path, as reported by git.
    pub path: String,
    /// Added lines in ascending line-number order.
    pub lines: Vec<AddedLine>,
}

impl StagedFile {
    pub fn new(path: impl Into<String>, lines: Vec<AddedLine>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Build a staged file from its raw `--unified=0` diff text.
    pub fn from_diff(path: impl Into<String>, diff: &str) -> Self {
        Self::new(path, parse_added_lines(diff))
    }
}
