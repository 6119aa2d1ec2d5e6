use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Result of checking a single header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid,
    /// At least one anchor does not name the expected guard.
    Invalid { expected: String },
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckOutcome::Valid)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path relative to the root.
    pub path: String,
    pub expected: String,
}

#[derive(Debug, Serialize, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Serialize, Default)]
pub struct FixReport {
    pub checked: usize,
    /// Paths relative to the root.
    pub fixed: Vec<String>,
}
