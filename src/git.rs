//! Git command runner for the hook.
//!
//! Provides a thin wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{PrecommitError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, with trailing line terminators removed.
    ///
    /// Only line terminators are stripped so that trailing whitespace on the
    /// last diff line survives.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout)
                .trim_end_matches(['\n', '\r'])
                .to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns the non-empty entries of NUL-separated stdout (`-z` output).
    ///
    /// Entries are taken verbatim: git does not quote paths in this mode.
    pub fn nul_entries(&self) -> Vec<&str> {
        self.stdout.split('\0').filter(|e| !e.is_empty()).collect()
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(PrecommitError::SourceUnavailable)` - If git could not be spawned
///   or exited non-zero
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["diff", "--staged", "--name-only"])?;
/// println!("Staged: {}", output.stdout);
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            PrecommitError::SourceUnavailable(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(PrecommitError::SourceUnavailable(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Works from any subdirectory of the repository. Outside a repository this
/// fails with `SourceUnavailable`, since the hook cannot list staged files.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git(cwd.as_ref(), &["rev-parse", "--show-toplevel"]).map_err(|e| {
        PrecommitError::SourceUnavailable(format!(
            "not inside a git repository ({}). Run the hook from within a git repository.",
            e
        ))
    })?;
    Ok(PathBuf::from(output.stdout.trim()))
}
