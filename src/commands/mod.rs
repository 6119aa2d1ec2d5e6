//! Command handler layer.
//!
//! Owns the per-run orchestration: path expansion, the check or fix loop,
//! report printing and the process exit code.

pub mod runtime;

pub use runtime::run;
