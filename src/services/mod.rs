//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `model.rs` — cost-benefit computation + fixed scenario variants.
//! - `assumptions.rs` — model-input config loading (TOML overrides).
//! - `export.rs` — results artifact serialization.
//! - `verification.rs` — encampment-cost verification reporting.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod assumptions;
pub mod export;
pub mod model;
pub mod output;
pub mod verification;
