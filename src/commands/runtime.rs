use crate::cli::Cli;
use crate::domain::models::{CheckOutcome, CheckReport, FixReport, Violation};
use crate::services::checker::check_header_guard;
use crate::services::discovery::header_candidates;
use crate::services::fixer::fix_header_guard;
use crate::services::output::{print_check_report, print_fix_report, relative_display};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let root = cli.resolved_root()?;
    let files = header_candidates(&cli.paths)?;
    info!(root = %root.display(), files = files.len(), check = cli.check, "starting run");

    if cli.check {
        let report = handle_check(&root, &files)?;
        print_check_report(cli.json, &report)?;
        if report.violations.is_empty() {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::from(1))
        }
    } else {
        let report = handle_fix(&root, &files)?;
        print_fix_report(cli.json, &report)?;
        Ok(ExitCode::SUCCESS)
    }
}

pub fn handle_check(root: &Path, files: &[PathBuf]) -> anyhow::Result<CheckReport> {
    let mut report = CheckReport::default();
    for f in files {
        report.checked += 1;
        if let CheckOutcome::Invalid { expected } = check_header_guard(f, root)? {
            report.violations.push(Violation {
                path: relative_display(f, root)?,
                expected,
            });
        }
    }
    info!(
        checked = report.checked,
        violations = report.violations.len(),
        "check finished"
    );
    Ok(report)
}

pub fn handle_fix(root: &Path, files: &[PathBuf]) -> anyhow::Result<FixReport> {
    let mut report = FixReport::default();
    for f in files {
        report.checked += 1;
        if fix_header_guard(f, root)? {
            report.fixed.push(relative_display(f, root)?);
        }
    }
    info!(
        checked = report.checked,
        fixed = report.fixed.len(),
        "fix finished"
    );
    Ok(report)
}
