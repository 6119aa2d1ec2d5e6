use crate::domain::models::{CheckReport, FixReport, JsonOut};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}

pub fn print_rows<T>(data: &[T], row: impl Fn(&T) -> String) {
    for d in data {
        println!("{}", row(d));
    }
}

/// Path of `file` relative to `root`, as shown in reports.
pub fn relative_display(file: &Path, root: &Path) -> anyhow::Result<String> {
    let rel = file
        .strip_prefix(root)
        .with_context(|| format!("{} is not under root {}", file.display(), root.display()))?;
    Ok(rel.display().to_string())
}

pub fn print_check_report(json: bool, report: &CheckReport) -> anyhow::Result<()> {
    let ok = report.violations.is_empty();
    if json {
        return print_json(ok, report);
    }
    if ok {
        println!("All header guards are correct.");
    } else {
        println!(
            "Found {} files with incorrect guards:",
            report.violations.len()
        );
        print_rows(&report.violations, |v| {
            format!("  {}: expected {}", v.path, v.expected)
        });
    }
    Ok(())
}

pub fn print_fix_report(json: bool, report: &FixReport) -> anyhow::Result<()> {
    if json {
        return print_json(true, report);
    }
    if report.fixed.is_empty() {
        println!("No header guards needed fixing.");
    } else {
        println!("Fixed {} files:", report.fixed.len());
        print_rows(&report.fixed, |p| format!("  {}", p));
    }
    Ok(())
}
