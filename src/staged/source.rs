//! Sources of staged files.

use crate::error::Result;
use crate::git::run_git;
use std::path::{Path, PathBuf};

/// Supplies the staged change set to the hook.
///
/// Implementations must be `Sync`: diffs are fetched from several threads.
pub trait StagedFileSource: Sync {
    /// List the paths of added, copied or modified staged files.
    fn list_staged_files(&self) -> Result<Vec<String>>;

    /// Fetch the zero-context unified diff of one staged file.
    fn fetch_diff(&self, path: &str) -> Result<String>;
}

/// Staged file source backed by the git CLI.
#[derive(Debug, Clone)]
pub struct GitStagedSource {
    repo_root: PathBuf,
    /// Repository-relative paths never reported as staged (the hook's own config).
    excluded: Vec<String>,
}

impl GitStagedSource {
    /// Create a source for the repository rooted at `repo_root`.
    pub fn new<P: AsRef<Path>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.as_ref().to_path_buf(),
            excluded: Vec::new(),
        }
    }

    /// Exclude a repository-relative path from the staged listing.
    pub fn exclude(mut self, path: impl Into<String>) -> Self {
        self.excluded.push(path.into().replace('\\', "/"));
        self
    }
}

impl StagedFileSource for GitStagedSource {
    /// Runs `git diff --staged --diff-filter=ACM --name-only -z`.
    ///
    /// NUL-separated output keeps names with quotes, backslashes or newlines
    /// unquoted, so they can be passed back to `fetch_diff` as is.
    fn list_staged_files(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.repo_root,
            &["diff", "--staged", "--diff-filter=ACM", "--name-only", "-z"],
        )?;

        Ok(output
            .nul_entries()
            .into_iter()
            .filter(|path| !self.excluded.iter().any(|ex| ex == path))
            .map(String::from)
            .collect())
    }

    /// Runs `git --literal-pathspecs diff --staged --diff-filter=ACM --unified=0 -- <path>`.
    ///
    /// The path is matched literally: `a[1].js` must not pull in `a1.js`.
    fn fetch_diff(&self, path: &str) -> Result<String> {
        let output = run_git(
            &self.repo_root,
            &[
                "--literal-pathspecs",
                "diff",
                "--staged",
                "--diff-filter=ACM",
                "--unified=0",
                "--no-color",
                "--no-ext-diff",
                "--",
                path,
            ],
        )?;
        Ok(output.stdout)
    }
}
