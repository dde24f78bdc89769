//! Command implementations for git-precommit-checks.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config resolution both commands share.

mod check;
mod rules;


use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::{Config, DiscoveredConfig};
use crate::error::{PrecommitError, Result};
use crate::logging;
use std::path::Path;

pub use check::cmd_check;
pub use rules::cmd_rules;

/// Dispatch a command to its implementation.
///
/// Returns the process exit code on completion; fatal errors are returned
/// as `Err` and carry their own exit code.
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.selected_command() {
        Command::Check => cmd_check(&cli.global),
        Command::Rules => cmd_rules(&cli.global),
    }
}

/// Resolve the configuration for the repository at `repo_root`, then set up
/// logging with the combined CLI and config verbosity.
///
/// An explicit `--config` path must exist; without it, discovery may find
/// nothing, which means "no rules".
fn resolve_config(global: &GlobalArgs, repo_root: &Path) -> Result<Option<DiscoveredConfig>> {
    let discovered = match &global.config {
        Some(path) => {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                std::env::current_dir()
                    .map_err(|e| {
                        PrecommitError::UserError(format!(
                            "failed to read current directory: {}",
                            e
                        ))
                    })?
                    .join(path)
            };
            if !path.is_file() {
                return Err(PrecommitError::UserError(format!(
                    "config file '{}' does not exist.\n\n\
                     Fix: pass an existing file to --config, or omit it to use discovery.",
                    path.display()
                )));
            }
            let config = Config::load(&path)?;
            Some(DiscoveredConfig { path, config })
        }
        None => Config::discover(repo_root)?,
    };

    let config_verbose = discovered
        .as_ref()
        .is_some_and(|found| found.config.display.verbose);
    logging::init(if config_verbose {
        global.verbose.max(2)
    } else {
        global.verbose
    });

    if let Some(found) = &discovered {
        tracing::debug!(path = %found.path.display(), rules = found.config.rules.len(), "configuration loaded");
    }

    Ok(discovered)
}
