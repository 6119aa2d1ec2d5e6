//! Include-guard naming and anchor-line recognition.
//!
//! Everything in here is pure: callers read the file, hand over its lines and
//! decide what to do with the result. Check and fix both go through
//! [`GuardScan::scan`], so they always agree on which lines form the guard.
//!
//! Known limitation: anchors are only searched for in the first
//! [`GUARD_SCAN_WINDOW`] lines, and the closing anchor is always the last
//! `#endif` in the file, even when a nested block ends after the guard's own
//! `#endif`.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Files shorter than this are never checked or rewritten.
pub const MIN_GUARDED_LINES: usize = 3;

/// Number of leading lines searched for the `#ifndef` / `#define` pair.
pub const GUARD_SCAN_WINDOW: usize = 10;

/// Extensions (without the dot) of files treated as headers.
pub const HEADER_EXTENSIONS: &[&str] = &["hpp", "h"];

static RE_IFNDEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#ifndef\s+(\w+)\s*$").expect("valid #ifndef regex"));

static RE_DEFINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#define\s+(\w+)\s*$").expect("valid #define regex"));

static RE_ENDIF_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#endif\s*//\s*(\w+)\s*$").expect("valid #endif comment regex")
});

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GuardError {
    #[error("{path} is not under root {root}")]
    NotUnderRoot { path: String, root: String },
    #[error("{0} has no path components below the root")]
    EmptyRelativePath(String),
    #[error("{0} has no file name")]
    MissingFileName(String),
}

fn segment(raw: &str) -> String {
    raw.to_uppercase().replace('-', "_")
}

/// Derives `TOPDIR[_SUBDIR...]_STEM_EXT` from the path of `file` below `root`.
pub fn expected_guard(file: &Path, root: &Path) -> Result<String, GuardError> {
    let rel = file
        .strip_prefix(root)
        .map_err(|_| GuardError::NotUnderRoot {
            path: file.display().to_string(),
            root: root.display().to_string(),
        })?;

    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let Some(first) = parts.first() else {
        return Err(GuardError::EmptyRelativePath(file.display().to_string()));
    };

    let mut segments = vec![segment(first)];
    if parts.len() > 2 {
        segments.extend(parts[1..parts.len() - 1].iter().map(|p| segment(p)));
    }

    let stem = rel
        .file_stem()
        .ok_or_else(|| GuardError::MissingFileName(file.display().to_string()))?;
    segments.push(segment(&stem.to_string_lossy()));
    segments.push(
        rel.extension()
            .map(|e| e.to_string_lossy().to_uppercase())
            .unwrap_or_default(),
    );

    Ok(segments.join("_"))
}

/// True when `path` carries one of the [`HEADER_EXTENSIONS`].
pub fn is_header(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| HEADER_EXTENSIONS.contains(&e))
}

/// Macro name of an `#ifndef NAME` line.
pub fn match_ifndef(line: &str) -> Option<&str> {
    RE_IFNDEF
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Macro name of a `#define NAME` line with no value.
pub fn match_define(line: &str) -> Option<&str> {
    RE_DEFINE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Macro name in the trailing comment of an `#endif // NAME` line.
pub fn match_endif_comment(line: &str) -> Option<&str> {
    RE_ENDIF_COMMENT
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn is_endif(line: &str) -> bool {
    line.trim().starts_with("#endif")
}

/// Splits file contents into lines, keeping each line's terminator.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Terminator to write back for a rewritten `line`: CRLF stays CRLF.
fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardScan {
    pub ifndef: Option<Anchor>,
    pub define: Option<Anchor>,
    /// Index of the last `#endif` line in the file.
    pub endif: Option<usize>,
    /// Macro named in that line's `// NAME` comment, if it has one.
    pub endif_name: Option<String>,
}

impl GuardScan {
    pub fn scan(lines: &[&str]) -> Self {
        let mut out = GuardScan::default();

        for (i, line) in lines.iter().take(GUARD_SCAN_WINDOW).enumerate() {
            if let Some(name) = match_ifndef(line) {
                out.ifndef = Some(Anchor {
                    index: i,
                    name: name.to_string(),
                });
            } else if let Some(name) = match_define(line) {
                out.define = Some(Anchor {
                    index: i,
                    name: name.to_string(),
                });
                break;
            }
        }

        if let Some((i, line)) = lines.iter().enumerate().rev().find(|(_, l)| is_endif(l)) {
            out.endif = Some(i);
            out.endif_name = match_endif_comment(line).map(str::to_string);
        }

        out
    }

    /// Both the `#ifndef` and the `#define` anchor were found.
    pub fn has_guard(&self) -> bool {
        self.ifndef.is_some() && self.define.is_some()
    }

    /// All three anchors name `expected`. A file without a guard is valid.
    pub fn matches(&self, expected: &str) -> bool {
        if !self.has_guard() {
            return true;
        }
        let named = |a: &Option<Anchor>| a.as_ref().is_some_and(|a| a.name == expected);
        named(&self.ifndef)
            && named(&self.define)
            && self.endif_name.as_deref() == Some(expected)
    }
}

/// Rewrites the anchor lines of `lines` to `expected`.
///
/// Returns the new file contents, or `None` when there is no guard or every
/// anchor already reads exactly as expected. Rewritten anchors keep their own
/// line ending; non-anchor lines are copied as-is.
pub fn render_fixed(lines: &[&str], expected: &str) -> Option<String> {
    let scan = GuardScan::scan(lines);
    let (Some(ifndef), Some(define)) = (&scan.ifndef, &scan.define) else {
        return None;
    };

    let anchor = |i: usize, directive: &str| {
        (i, format!("{} {}{}", directive, expected, line_ending(lines[i])))
    };
    let mut replacements = vec![
        anchor(ifndef.index, "#ifndef"),
        anchor(define.index, "#define"),
    ];
    if let Some(i) = scan.endif {
        replacements.push(anchor(i, "#endif //"));
    }
    replacements.retain(|(i, want)| lines[*i] != want.as_str());
    if replacements.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(lines.iter().map(|l| l.len()).sum());
    for (i, line) in lines.iter().enumerate() {
        match replacements.iter().find(|(idx, _)| *idx == i) {
            Some((_, want)) => out.push_str(want),
            None => out.push_str(line),
        }
    }
    Some(out)
}
