//! Tests for staged file collection.

use super::{GitStagedSource, StagedFile, StagedFileSource, gather_staged_files};
use crate::diff::AddedLine;
use crate::error::PrecommitError;
use crate::test_support::{MemorySource, commit_staged, create_test_repo, write_and_stage};
use std::sync::atomic::Ordering;
use tempfile::TempDir;

// =========================================================================
// Gather phase
// =========================================================================

#[test]
fn test_gather_keeps_listing_order() {
    let source = MemorySource::new(&[
        ("b.rs", "@@ -0,0 +1 @@\n+second file\n"),
        ("a.rs", "@@ -0,0 +3 @@\n+first file\n"),
        ("c.rs", ""),
    ]);
    let paths = source.list_staged_files().unwrap();

    let files = gather_staged_files(&source, &paths).unwrap();

    assert_eq!(
        files,
        vec![
            StagedFile::new("b.rs", vec![AddedLine::new(1, "second file")]),
            StagedFile::new("a.rs", vec![AddedLine::new(3, "first file")]),
            StagedFile::new("c.rs", vec![]),
        ]
    );
    assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_gather_fails_fast_on_any_fetch_error() {
    let source = MemorySource::new(&[
        ("ok.rs", "@@ -0,0 +1 @@\n+fine\n"),
        ("broken.rs", "@@ -0,0 +1 @@\n+never seen\n"),
    ])
    .failing_on("broken.rs");
    let paths = source.list_staged_files().unwrap();

    let err = gather_staged_files(&source, &paths).unwrap_err();

    assert!(matches!(err, PrecommitError::SourceUnavailable(_)));
    assert!(err.to_string().contains("broken.rs"));
}

#[test]
fn test_gather_empty_listing() {
    let source = MemorySource::new(&[]);
    let files = gather_staged_files(&source, &[]).unwrap();
    assert!(files.is_empty());
    assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_staged_file_from_diff() {
    let file = StagedFile::from_diff("./problem.js", "@@ -1 +2 @@\n-old\n+what a beautiful FIXME here!\n");
    assert_eq!(file.path, "./problem.js");
    assert_eq!(file.lines, vec![AddedLine::new(2, "what a beautiful FIXME here!")]);
}

// =========================================================================
// Git-backed source
// =========================================================================

fn repo_with_history() -> TempDir {
    let repo = create_test_repo();
    write_and_stage(repo.path(), "src/app.js", "line 1\nline 2\nline 3\n");
    write_and_stage(repo.path(), "old.txt", "to be removed\n");
    commit_staged(repo.path(), "Add app");
    repo
}

#[test]
fn test_git_source_lists_added_and_modified_files() {
    let repo = repo_with_history();
    write_and_stage(repo.path(), "src/app.js", "line 1\nline 2\nnew FIXME\nline 3\n");
    write_and_stage(repo.path(), "new.rb", "puts 'hi'\n");
    crate::test_support::git(repo.path(), &["rm", "-q", "old.txt"]);

    let source = GitStagedSource::new(repo.path());
    let mut files = source.list_staged_files().unwrap();
    files.sort();

    // Deleted files are excluded by --diff-filter=ACM
    assert_eq!(files, vec!["new.rb".to_string(), "src/app.js".to_string()]);
}

#[test]
fn test_git_source_ignores_unstaged_changes() {
    let repo = repo_with_history();
    std::fs::write(repo.path().join("src/app.js"), "changed but not staged\n").unwrap();

    let source = GitStagedSource::new(repo.path());

    assert!(source.list_staged_files().unwrap().is_empty());
}

#[test]
fn test_git_source_excludes_config_file() {
    let repo = create_test_repo();
    write_and_stage(repo.path(), "git-precommit-checks.yaml", "rules: []\n");
    write_and_stage(repo.path(), "main.js", "console.log(1)\n");

    let source = GitStagedSource::new(repo.path()).exclude("git-precommit-checks.yaml");

    assert_eq!(source.list_staged_files().unwrap(), vec!["main.js".to_string()]);
}

#[test]
fn test_git_source_glob_characters_match_only_that_file() {
    let repo = create_test_repo();
    write_and_stage(repo.path(), "a[1].js", "clean\n");
    write_and_stage(repo.path(), "a1.js", "FIXME here\n");

    let source = GitStagedSource::new(repo.path());
    let paths = vec!["a[1].js".to_string()];
    let files = gather_staged_files(&source, &paths).unwrap();

    assert_eq!(
        files,
        vec![StagedFile::new("a[1].js", vec![AddedLine::new(1, "clean")])]
    );
}

#[test]
fn test_git_source_handles_names_git_would_quote() {
    let repo = create_test_repo();
    write_and_stage(repo.path(), "say\"hi\".js", "FIXME here\n");
    write_and_stage(repo.path(), "back\\slash.rb", "# FIXME too\n");

    let source = GitStagedSource::new(repo.path());
    let mut paths = source.list_staged_files().unwrap();
    paths.sort();
    assert_eq!(
        paths,
        vec!["back\\slash.rb".to_string(), "say\"hi\".js".to_string()]
    );

    let files = gather_staged_files(&source, &paths).unwrap();

    assert_eq!(files[0].lines, vec![AddedLine::new(1, "# FIXME too")]);
    assert_eq!(files[1].lines, vec![AddedLine::new(1, "FIXME here")]);
}

#[test]
fn test_git_source_diff_yields_post_commit_line_numbers() {
    let repo = repo_with_history();
    write_and_stage(
        repo.path(),
        "src/app.js",
        "line 1\ninserted FIXME\nline 2\nline 3\nappended\n",
    );

    let source = GitStagedSource::new(repo.path());
    let paths = source.list_staged_files().unwrap();
    let files = gather_staged_files(&source, &paths).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "src/app.js");
    assert_eq!(
        files[0].lines,
        vec![
            AddedLine::new(2, "inserted FIXME"),
            AddedLine::new(5, "appended"),
        ]
    );
}

#[test]
fn test_git_source_new_file_with_hunk_marker_content() {
    let repo = create_test_repo();
    write_and_stage(
        repo.path(),
        "notes.md",
        "# Title\n@@ -0,0 +1,5 @@ fake header\nFIXME\n",
    );

    let source = GitStagedSource::new(repo.path());
    let diff = source.fetch_diff("notes.md").unwrap();
    let file = StagedFile::from_diff("notes.md", &diff);

    assert_eq!(
        file.lines,
        vec![
            AddedLine::new(1, "# Title"),
            AddedLine::new(2, "@@ -0,0 +1,5 @@ fake header"),
            AddedLine::new(3, "FIXME"),
        ]
    );
}

#[test]
fn test_git_source_outside_repo_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let source = GitStagedSource::new(dir.path());

    let err = source.list_staged_files().unwrap_err();

    assert!(matches!(err, PrecommitError::SourceUnavailable(_)));
}
