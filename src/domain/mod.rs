//! Shared data model layer (structs only).
//!
//! ## Files
//! - `models.rs` — per-file outcomes and the check/fix report structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! These structs are the `--json` output schema. Keep field renames explicit.

pub mod models;
