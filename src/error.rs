//! Error types for the git-precommit-checks hook.
//!
//! Uses thiserror for derive macros. Every variant is fatal: the hook aborts
//! before (or instead of) reporting any match. A blocking match is not an
//! error, see [`crate::hook::HookOutcome`].

use crate::exit_codes;
use thiserror::Error;

/// Which field of a rule failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternField {
    Filter,
    Pattern,
}

impl std::fmt::Display for PatternField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternField::Filter => write!(f, "filter"),
            PatternField::Pattern => write!(f, "pattern"),
        }
    }
}

/// Main error type for hook operations.
#[derive(Error, Debug)]
pub enum PrecommitError {
    /// Configuration is present but unreadable, unparseable or invalid.
    #[error("invalid configuration: {0}")]
    ConfigLoad(String),

    /// A rule's filter or pattern does not compile.
    #[error("invalid {field} in rule \"{rule}\": {reason}")]
    InvalidPattern {
        /// The offending rule's message.
        rule: String,
        field: PatternField,
        reason: String,
    },

    /// The staged-file source (git) failed.
    #[error("git operation failed: {0}")]
    SourceUnavailable(String),

    /// The hook was invoked incorrectly.
    #[error("{0}")]
    UserError(String),
}

impl PrecommitError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrecommitError::ConfigLoad(_) => exit_codes::DATA_ERROR,
            PrecommitError::InvalidPattern { .. } => exit_codes::DATA_ERROR,
            PrecommitError::SourceUnavailable(_) => exit_codes::GIT_FAILURE,
            PrecommitError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, PrecommitError>;
