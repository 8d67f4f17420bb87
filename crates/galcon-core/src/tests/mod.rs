//! Cross-module tests for the tick pipeline.
//!
//! - `helpers.rs`: fixtures shared with the per-module unit tests
//! - `integration.rs`: multi-tick scenarios through `Game::step`
//! - `determinism.rs`: same inputs, same hashes
//! - `properties.rs`: proptest invariants

pub mod helpers;
