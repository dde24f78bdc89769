//! Implementation of the `check` command (the hook itself).

use crate::cli::GlobalArgs;
use crate::error::{PrecommitError, Result};
use crate::git::get_repo_root;
use crate::hook::run_hook;
use crate::report::ConsoleReporter;
use crate::staged::GitStagedSource;

use super::resolve_config;

/// Execute `git-precommit-checks check`.
///
/// # Exit Codes
///
/// - 0: No blocking match (warnings may have been printed), no rules, or nothing staged
/// - 1: A blocking rule matched
/// - 2: `--config` points to a missing file
/// - 3: Git failure
/// - 65: Malformed configuration or invalid pattern
pub fn cmd_check(global: &GlobalArgs) -> Result<i32> {
    let cwd = std::env::current_dir().map_err(|e| {
        PrecommitError::UserError(format!("failed to read current directory: {}", e))
    })?;
    let repo_root = get_repo_root(&cwd)?;
    let discovered = resolve_config(global, &repo_root)?;

    let mut source = GitStagedSource::new(&repo_root);
    if let Some(rel) = discovered
        .as_ref()
        .and_then(|found| found.repo_relative_path(&repo_root))
    {
        source = source.exclude(rel);
    }

    let (display, rules) = discovered
        .map(|found| (found.config.display, found.config.rules))
        .unwrap_or_default();

    let mut reporter = ConsoleReporter::stdout(display.clone(), global.no_color);
    let outcome = run_hook(&rules, &display, &source, &mut reporter)?;

    Ok(outcome.exit_code())
}
