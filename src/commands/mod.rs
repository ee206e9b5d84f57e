//! Command handler layer.
//!
//! Matches the parsed CLI, runs the requested diagnostic sections and wires
//! their output. Diagnostic logic lives in `services/*`.

pub mod diagnose;

pub use diagnose::handle_commands;
