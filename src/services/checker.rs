use crate::domain::models::CheckOutcome;
use crate::guard::{expected_guard, split_lines, GuardScan, MIN_GUARDED_LINES};
use crate::services::storage::read_header;
use std::path::Path;
use tracing::debug;

/// Checks the guard of one header without touching it.
pub fn check_header_guard(path: &Path, root: &Path) -> anyhow::Result<CheckOutcome> {
    let content = read_header(path)?;
    let lines = split_lines(&content);
    if lines.len() < MIN_GUARDED_LINES {
        debug!(path = %path.display(), "too short to carry a guard");
        return Ok(CheckOutcome::Valid);
    }

    let expected = expected_guard(path, root)?;
    let scan = GuardScan::scan(&lines);
    if !scan.has_guard() {
        debug!(path = %path.display(), "no include guard found");
    }

    if scan.matches(&expected) {
        Ok(CheckOutcome::Valid)
    } else {
        debug!(path = %path.display(), expected = %expected, "guard mismatch");
        Ok(CheckOutcome::Invalid { expected })
    }
}
