//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep model inputs, results and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — model inputs/results, budget sources, output envelopes.
//! - `constants.rs` — fixed reference data for the verification tool.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod constants;
pub mod models;
