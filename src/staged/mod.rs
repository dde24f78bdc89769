//! Staged file collection for the hook.
//!
//! The hook reads its input through the [`StagedFileSource`] trait: a list of
//! staged paths and, for each path, its zero-context diff. [`GitStagedSource`]
//! implements it on top of the git CLI; tests use in-memory sources.
//!
//! [`gather_staged_files`] is the gather phase of a run: it fetches every
//! diff concurrently and only returns once all of them succeeded.

mod gather;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use gather::gather_staged_files;
pub use source::{GitStagedSource, StagedFileSource};
pub use types::StagedFile;
