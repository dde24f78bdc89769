//! Aggregation of all rule matches.

use crate::staged::StagedFile;
use tracing::debug;

use super::matcher::{MatchEntry, match_rule};
use super::rule::Rule;

/// The matches of one rule, labelled with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub message: String,
    pub entries: Vec<MatchEntry>,
}

/// All matches of a run, grouped per rule and split by severity.
///
/// Groups keep rule declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedResult {
    pub blocking: Vec<MatchGroup>,
    pub warnings: Vec<MatchGroup>,
}

impl AggregatedResult {
    /// Whether the commit must be rejected. Warnings never block.
    pub fn is_blocked(&self) -> bool {
        !self.blocking.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.blocking.iter().map(|g| g.entries.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.iter().map(|g| g.entries.len()).sum()
    }
}

/// Run every rule against the staged files.
///
/// Rules are independent; a rule without matches contributes no group.
pub fn aggregate(rules: &[Rule], files: &[StagedFile]) -> AggregatedResult {
    let mut result = AggregatedResult::default();

    for rule in rules {
        let matches = match_rule(rule, files);
        debug!(
            rule = %rule.message,
            errors = matches.errors.len(),
            warnings = matches.warnings.len(),
            "rule checked"
        );

        if !matches.errors.is_empty() {
            result.blocking.push(MatchGroup {
                message: rule.message.clone(),
                entries: matches.errors,
            });
        }
        if !matches.warnings.is_empty() {
            result.warnings.push(MatchGroup {
                message: rule.message.clone(),
                entries: matches.warnings,
            });
        }
    }

    result
}
