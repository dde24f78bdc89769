//! Public types for diff parsing.

/// A single line added by the staged change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLine {
    /// Line number in the post-commit file (1-based).
    pub line_number: usize,
    /// The content of the added line (without the leading '+').
    pub content: String,
}

impl AddedLine {
    pub fn new(line_number: usize, content: impl Into<String>) -> Self {
        Self {
            line_number,
            content: content.into(),
        }
    }
}
