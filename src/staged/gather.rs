//! Gather phase: fetch and parse every staged diff.

use rayon::prelude::*;
use tracing::debug;

use super::source::StagedFileSource;
use super::types::StagedFile;
use crate::error::Result;

/// Fetch and parse the diff of every file in `paths`.
///
/// Fetches run concurrently, each into its own slot, and the result keeps the
/// order of `paths`. The first failing fetch fails the whole gather: a partial
/// scan could miss a blocking match.
pub fn gather_staged_files<S: StagedFileSource + ?Sized>(
    source: &S,
    paths: &[String],
) -> Result<Vec<StagedFile>> {
    let files = paths
        .par_iter()
        .map(|path| {
            let diff = source.fetch_diff(path)?;
            let file = StagedFile::from_diff(path.as_str(), &diff);
            debug!(path = %path, added = file.lines.len(), "parsed staged diff");
            Ok(file)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(files)
}
