//! Content matching for a single rule.

use crate::staged::StagedFile;

use super::rule::Rule;

/// One occurrence of a rule firing on one added line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    /// Repository-relative file path.
    pub file_name: String,
    /// Post-commit line number (1-based).
    pub line_number: usize,
    /// The matching line with leading whitespace stripped.
    pub matched_text: String,
}

impl MatchEntry {
    pub fn new(
        file_name: impl Into<String>,
        line_number: usize,
        matched_text: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            line_number,
            matched_text: matched_text.into(),
        }
    }
}

/// Formats as the `file:line` location.
impl std::fmt::Display for MatchEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file_name, self.line_number)
    }
}

/// Matches of one rule, split by severity.
///
/// Blocking is a per-rule property: at most one of the two lists is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMatches {
    pub errors: Vec<MatchEntry>,
    pub warnings: Vec<MatchEntry>,
}

/// Apply one rule to every staged file.
///
/// Files whose path does not pass the rule's filter are skipped without
/// scanning their lines. Each added line is tested in full; the stored
/// `matched_text` has its leading whitespace stripped for display.
///
/// Output order is the order of `files`, then ascending line number.
pub fn match_rule(rule: &Rule, files: &[StagedFile]) -> RuleMatches {
    let entries: Vec<MatchEntry> = files
        .iter()
        .filter(|file| rule.applies_to(&file.path))
        .flat_map(|file| {
            file.lines
                .iter()
                .filter(|line| rule.pattern.is_match(&line.content))
                .map(|line| {
                    MatchEntry::new(&file.path, line.line_number, line.content.trim_start())
                })
        })
        .collect();

    if rule.blocking {
        RuleMatches {
            errors: entries,
            warnings: Vec::new(),
        }
    } else {
        RuleMatches {
            errors: Vec::new(),
            warnings: entries,
        }
    }
}
