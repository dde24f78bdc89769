//! Staged diff parsing for the pre-commit hook.
//!
//! Turns the `git diff --staged --unified=0 -- <file>` output of a single
//! file into the ordered list of lines that the commit adds, each tagged
//! with its post-commit line number.
//!
//! The parsing is deterministic and purely syntactic:
//! - Hunk headers are lines starting with `@@`
//! - Added lines are lines starting with `+` inside an open hunk
//! - Removed lines, file-stat lines and "\ No newline" markers are skipped

mod api;
mod helpers;
mod parser;


pub use api::AddedLine;
pub use parser::parse_added_lines;
