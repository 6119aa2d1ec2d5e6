use crate::guard::is_header;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Expands one path argument into the header files it names.
///
/// A file argument is taken as-is (subject to the extension filter); a
/// directory is walked recursively in file-name order.
pub fn expand_path(arg: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let path = arg
        .canonicalize()
        .with_context(|| format!("cannot resolve path {}", arg.display()))?;

    if path.is_file() {
        if is_header(&path) {
            return Ok(vec![path]);
        }
        debug!(path = %path.display(), "skipping non-header file");
        return Ok(vec![]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
        if entry.path().is_file() && is_header(entry.path()) {
            files.push(entry.into_path());
        }
    }
    debug!(dir = %path.display(), headers = files.len(), "expanded directory");
    Ok(files)
}

pub fn header_candidates(args: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        files.extend(expand_path(arg)?);
    }
    Ok(files)
}
