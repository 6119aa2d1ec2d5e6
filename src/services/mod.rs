//! Service layer containing the per-file logic and its side effects.
//!
//! ## Service map
//! - `discovery.rs` — expand path arguments into candidate header files.
//! - `checker.rs` — read-only guard validation of one header.
//! - `fixer.rs` — in-place rewrite of one header's guard anchors.
//! - `storage.rs` — header read/write with path context on errors.
//! - `output.rs` — JSON/text report helpers.
//!
//! ## Conventions
//! - Naming and line matching live in `guard.rs` and stay pure.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod checker;
pub mod discovery;
pub mod fixer;
pub mod output;
pub mod storage;
