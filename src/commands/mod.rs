//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `analysis.rs` — analyze/scenarios command handling + export.
//! - `verify.rs` — verification report/reference-data commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod analysis;
pub mod verify;

pub use analysis::handle_analysis_commands;
pub use verify::handle_verify_commands;
