//! The pre-commit run.
//!
//! A run has two phases:
//!
//! 1. Gather: compile every rule, list the staged files and fetch all their
//!    diffs. Any failure aborts the run before a single rule is evaluated.
//! 2. Match: evaluate the rules and hand the grouped result to the reporter.
//!
//! The exit code is derived from the [`HookOutcome`] alone.

use tracing::{debug, info};

use crate::config::{DisplayOptions, RuleSpec};
use crate::error::Result;
use crate::exit_codes;
use crate::report::{Level, Reporter};
use crate::rules::{AggregatedResult, aggregate, compile_rules};
use crate::staged::{StagedFileSource, gather_staged_files};

/// Title shown in front of every notice.
pub const HOOK_TITLE: &str = "contents checks";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// No rule configured; git was not queried.
    NoRules,
    /// Nothing staged; no rule was evaluated.
    NoStagedFiles,
    /// No blocking match. The result may still hold warnings.
    Passed(AggregatedResult),
    /// At least one blocking rule matched.
    Blocked(AggregatedResult),
}

impl HookOutcome {
    /// Process exit code: only a blocking match fails the commit.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookOutcome::Blocked(_) => exit_codes::CHECKS_FAILED,
            HookOutcome::NoRules | HookOutcome::NoStagedFiles | HookOutcome::Passed(_) => {
                exit_codes::SUCCESS
            }
        }
    }
}

/// Run the hook over the staged change set.
///
/// # Arguments
///
/// * `specs` - Configured rules, in declaration order
/// * `display` - Output options
/// * `source` - Staged files and their diffs
/// * `reporter` - Receives notices and the grouped matches
///
/// # Returns
///
/// * `Ok(HookOutcome)` - The run completed (whether or not it blocks)
/// * `Err(PrecommitError::InvalidPattern)` - A rule does not compile; nothing was scanned
/// * `Err(PrecommitError::SourceUnavailable)` - Listing or fetching a diff failed
pub fn run_hook<S, R>(
    specs: &[RuleSpec],
    display: &DisplayOptions,
    source: &S,
    reporter: &mut R,
) -> Result<HookOutcome>
where
    S: StagedFileSource + ?Sized,
    R: Reporter + ?Sized,
{
    if specs.is_empty() {
        reporter.notice(
            Level::Warning,
            HOOK_TITLE,
            "no rules configured. Add them to `git-precommit-checks.yaml` or the \
             \"git-precommit-checks\" key of `package.json`.",
        );
        return Ok(HookOutcome::NoRules);
    }

    let rules = compile_rules(specs)?;
    if display.rules_summary {
        reporter.rules_summary(&rules);
    }

    let paths = source.list_staged_files()?;
    if paths.is_empty() {
        reporter.notice(
            Level::Warning,
            HOOK_TITLE,
            "there is no file to check. Did you forget to `git add`?",
        );
        return Ok(HookOutcome::NoStagedFiles);
    }

    info!(files = paths.len(), rules = rules.len(), "processing staged files");
    let files = gather_staged_files(source, &paths)?;
    let added: usize = files.iter().map(|f| f.lines.len()).sum();
    debug!(added, "all staged diffs parsed");

    let result = aggregate(&rules, &files);
    info!(
        errors = result.error_count(),
        warnings = result.warning_count(),
        "all files were checked"
    );

    reporter.report(HOOK_TITLE, &result);

    if result.is_blocked() {
        Ok(HookOutcome::Blocked(result))
    } else {
        reporter.notice(
            Level::Success,
            HOOK_TITLE,
            "everything went fine! Good job! 👏",
        );
        Ok(HookOutcome::Passed(result))
    }
}
