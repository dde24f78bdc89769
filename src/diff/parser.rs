//! Core diff parsing logic.

use tracing::trace;

use super::api::AddedLine;
use super::helpers::parse_hunk_header;

/// Parse added lines from one file's zero-context unified diff.
///
/// Scans line by line. A valid hunk header sets the running line counter to
/// its new-file start; each `+` line inside the hunk is emitted with the
/// current counter, which is then incremented. Everything else is skipped
/// without touching the counter.
///
/// Header detection is anchored at the start of the line, so an added line
/// whose text begins with `@@` (raw form `+@@ ...`) is content, not a header.
///
/// A malformed header closes the current hunk: added lines are ignored until
/// the next valid header.
///
/// `+++` is only a file-stat line before the first hunk. Inside a hunk it is
/// an added line whose text starts with `++` (e.g. `++i;`), since git never
/// emits file headers there for a single-file diff.
///
/// # Arguments
///
/// * `diff_output` - Raw `git diff --unified=0` output for a single file
///
/// # Returns
///
/// The added lines, in diff order (ascending line numbers). Empty input or
/// input without hunks yields an empty list.
pub fn parse_added_lines(diff_output: &str) -> Vec<AddedLine> {
    let mut result = Vec::new();
    // Current line number in the new file; None until a valid header is seen.
    let mut new_line: Option<usize> = None;

    for line in diff_output.lines() {
        if line.starts_with("@@") {
            new_line = parse_hunk_header(line);
            if new_line.is_none() {
                trace!(header = line, "skipping malformed hunk header");
            }
            continue;
        }

        // "+++ b/path" and friends only occur before the first hunk, where
        // no counter is open yet.
        let Some(current) = new_line.as_mut() else {
            continue;
        };

        if let Some(content) = line.strip_prefix('+') {
            result.push(AddedLine::new(*current, content));
            *current += 1;
        }
    }

    result
}
