//! Configuration types and defaults.

use serde::Deserialize;

/// Output options.
///
/// `camelCase` aliases are accepted so configs embedded in `package.json`
/// can keep JavaScript naming.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Print the matched line text under each location.
    #[serde(alias = "offendingContent")]
    pub offending_content: bool,

    /// Print the compiled rules before scanning.
    #[serde(alias = "rulesSummary")]
    pub rules_summary: bool,

    /// Print an error/warning count line after the report.
    #[serde(alias = "shortStats")]
    pub short_stats: bool,

    /// Raise the log level to debug.
    pub verbose: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            offending_content: true,
            rules_summary: false,
            short_stats: true,
            verbose: false,
        }
    }
}

/// A rule as written in the configuration, before compilation.
///
/// `filter` and `pattern` accept either a bare regex (`console\.log`) or the
/// delimited form with flags (`/^[<>|=]{4,}/m`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleSpec {
    /// Only check files whose path matches this pattern.
    #[serde(default)]
    pub filter: Option<String>,

    /// Message printed above the rule's matches.
    pub message: String,

    /// Whether a match fails the commit (default) or only warns.
    #[serde(default = "default_true")]
    pub blocking: bool,

    /// Pattern tested against every added line.
    #[serde(alias = "regex")]
    pub pattern: String,
}

impl RuleSpec {
    /// Create a blocking rule without filter.
    pub fn new(message: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            filter: None,
            message: message.into(),
            blocking: true,
            pattern: pattern.into(),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn non_blocking(mut self) -> Self {
        self.blocking = false;
        self
    }
}

pub(crate) fn default_true() -> bool {
    true
}
