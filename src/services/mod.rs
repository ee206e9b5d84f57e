//! Service layer: the diagnostic steps and their side-effect seams.
//!
//! ## Service map
//! - `environment.rs` — `Environment` seam + working dir/executable/variables.
//! - `filesystem.rs` — `FileSystem` seam + the real implementation.
//! - `probe.rs` — config file existence/type/contents/JSON probe.
//! - `listing.rs` — directory listings with shared or independent failure scope.
//! - `report.rs` — report assembly and text rendering.
//! - `settings.rs` — settings file loading and flag precedence.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Steps never fail the run; failures become `Outcome::Failed` values.
//! - Process state and the filesystem are only reached through the seams.
//! - Keep command handlers thin; delegate to services.

pub mod environment;
pub mod filesystem;
pub mod listing;
pub mod logging;
pub mod output;
pub mod probe;
pub mod report;
pub mod settings;
