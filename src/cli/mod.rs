//! CLI argument parsing for git-precommit-checks.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Block commits whose staged additions match configured patterns.
///
/// Rules are read from `git-precommit-checks.yaml` (or `.yml`, `.json`, or
/// the "git-precommit-checks" key of `package.json`) at the repository root.
/// Only lines added by the staged change are checked.
#[derive(Parser, Debug)]
#[command(name = "git-precommit-checks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `check` when omitted, so the binary can be used as the hook itself.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Use this config file instead of discovering one.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Check the staged additions against the configured rules.
    ///
    /// Exits 1 when a blocking rule matches, 0 otherwise.
    Check,

    /// Load and compile the configured rules, then list them.
    ///
    /// Does not read staged changes.
    Rules,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run, `check` when none was given.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Check)
    }
}
