use crate::guard::{expected_guard, render_fixed, split_lines, MIN_GUARDED_LINES};
use crate::services::storage::{read_header, write_header};
use std::path::Path;
use tracing::debug;

/// Rewrites the guard anchors of one header. Returns whether the file was written.
pub fn fix_header_guard(path: &Path, root: &Path) -> anyhow::Result<bool> {
    let content = read_header(path)?;
    let lines = split_lines(&content);
    if lines.len() < MIN_GUARDED_LINES {
        return Ok(false);
    }

    let expected = expected_guard(path, root)?;
    match render_fixed(&lines, &expected) {
        Some(fixed) => {
            write_header(path, &fixed)?;
            debug!(path = %path.display(), expected = %expected, "rewrote guard");
            Ok(true)
        }
        None => Ok(false),
    }
}
