//! Crate-level test suites.
//!
//! - `determinism.rs`: same-seed reproducibility of generation and play
//! - `rules.rs`: property tests over the transition rules
//! - `helpers.rs`: state builders shared by both

mod determinism;
mod helpers;
