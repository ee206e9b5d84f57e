//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report/outcome structs in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — settings, outcome and report structs.
//! - `error.rs` — typed failures of individual diagnostic steps.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod error;
pub mod models;
