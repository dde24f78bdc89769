use crate::error::{PrecommitError, Result};
use crate::staged::StagedFileSource;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a repository with one commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "core.autocrlf", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Write `content` to `rel_path` (creating parent directories) and stage it.
pub(crate) fn write_and_stage(repo_dir: &Path, rel_path: &str, content: &str) {
    let full = repo_dir.join(rel_path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full, content).unwrap();
    git(repo_dir, &["--literal-pathspecs", "add", rel_path]);
}

/// Commit everything that is currently staged.
pub(crate) fn commit_staged(repo_dir: &Path, message: &str) {
    git(repo_dir, &["commit", "-m", message]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// In-memory staged file source.
#[derive(Default)]
pub(crate) struct MemorySource {
    files: Vec<(String, String)>,
    failing_path: Option<String>,
    pub(crate) list_calls: AtomicUsize,
    pub(crate) fetch_calls: AtomicUsize,
}

impl MemorySource {
    /// Files as (path, raw diff) pairs, listed in the given order.
    pub(crate) fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(p, d)| (p.to_string(), d.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    /// Make `fetch_diff` fail for `path`.
    pub(crate) fn failing_on(mut self, path: &str) -> Self {
        self.failing_path = Some(path.to_string());
        self
    }
}

impl StagedFileSource for MemorySource {
    fn list_staged_files(&self) -> Result<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.files.iter().map(|(p, _)| p.clone()).collect())
    }

    fn fetch_diff(&self, path: &str) -> Result<String> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_path.as_deref() == Some(path) {
            return Err(PrecommitError::SourceUnavailable(format!(
                "git diff failed for {}",
                path
            )));
        }
        Ok(self
            .files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, d)| d.clone())
            .unwrap_or_default())
    }
}
