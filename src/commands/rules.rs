//! Implementation of the `rules` command.

use crate::cli::GlobalArgs;
use crate::error::{PrecommitError, Result};
use crate::exit_codes;
use crate::git::get_repo_root;
use crate::hook::HOOK_TITLE;
use crate::report::{ConsoleReporter, Level, Reporter};
use crate::rules::compile_rules;

use super::resolve_config;

/// Execute `git-precommit-checks rules`: compile and list the configured rules.
///
/// Uses the same discovery as `check`, so an invalid rule fails here with the
/// same error the hook would report.
pub fn cmd_rules(global: &GlobalArgs) -> Result<i32> {
    let cwd = std::env::current_dir().map_err(|e| {
        PrecommitError::UserError(format!("failed to read current directory: {}", e))
    })?;
    let repo_root = get_repo_root(&cwd)?;
    let discovered = resolve_config(global, &repo_root)?;

    let Some(found) = discovered else {
        let mut reporter = ConsoleReporter::stdout(Default::default(), global.no_color);
        reporter.notice(
            Level::Warning,
            HOOK_TITLE,
            "no configuration found; every commit passes.",
        );
        return Ok(exit_codes::SUCCESS);
    };

    if found.config.has_no_rules() {
        let mut reporter = ConsoleReporter::stdout(found.config.display, global.no_color);
        reporter.notice(
            Level::Warning,
            HOOK_TITLE,
            &format!("{} defines no rules; every commit passes.", found.path.display()),
        );
        return Ok(exit_codes::SUCCESS);
    }

    let rules = compile_rules(&found.config.rules)?;
    let mut reporter = ConsoleReporter::stdout(found.config.display, global.no_color);
    reporter.notice(
        Level::Success,
        HOOK_TITLE,
        &format!("configuration read from {}", found.path.display()),
    );
    reporter.rules_summary(&rules);

    Ok(exit_codes::SUCCESS)
}
