//! Helper functions for diff parsing.

/// Parse the new-file start line out of a hunk header.
///
/// Format: "@@ -old_start[,old_len] +new_start[,new_len] @@[ context]"
///
/// Returns `new_start`, or None if the header is malformed.
pub(super) fn parse_hunk_header(line: &str) -> Option<usize> {
    let line = line.strip_prefix("@@ ")?;

    // The range part ends at the closing " @@"; anything after it is context.
    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let mut parts = range_part.split_whitespace();
    let old_part = parts.next()?.strip_prefix('-')?;
    let new_part = parts.next()?.strip_prefix('+')?;
    if parts.next().is_some() {
        return None;
    }

    // The old range must be well-formed too, even though only the new start is used.
    parse_range(old_part)?;
    let (new_start, _) = parse_range(new_part)?;

    Some(new_start)
}

/// Parse a range specification into (start, count).
///
/// Format: "start" or "start,count"; count defaults to 1.
fn parse_range(range: &str) -> Option<(usize, usize)> {
    match range.split_once(',') {
        Some((start, count)) => Some((start.parse().ok()?, count.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}
