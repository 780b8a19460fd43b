//! # Farflung Arena
//!
//! Adversarial search, bots, and match orchestration for Farflung.
//!
//! The arena crate sits on top of [`farflung_core`]'s pure transition
//! engine. It provides:
//!
//! - **Search**: depth-limited minimax and alpha-beta over immutable
//!   game states, with pluggable heuristics and explicit-RNG tie
//!   randomization ([`search`]).
//! - **Bots**: baseline strategies and the search-driven player
//!   ([`bots`]).
//! - **Orchestration**: the [`play`] loop that runs two bots against
//!   each other under a per-move wall-clock budget and a turn cap
//!   ([`runner`]).
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use farflung_arena::bots::{BullyBot, RandomBot};
//! use farflung_arena::runner::{play, MatchConfig};
//! use farflung_core::GameState;
//!
//! let (initial, _seed) = GameState::generate(6, Some(42), true).unwrap();
//! let report = play(
//!     Arc::new(RandomBot::new(1)),
//!     Arc::new(BullyBot),
//!     initial,
//!     &MatchConfig::default(),
//! ).unwrap();
//! println!("winner: {:?} after {} plies", report.winner, report.plies);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export the engine crate for consumers that only depend on the arena.
pub use farflung_core;

pub mod bots;
pub mod error;
pub mod heuristic;
pub mod runner;
pub mod search;

pub use bots::{Bot, BullyBot, MinimaxBot, RandomBot};
pub use error::MatchError;
pub use heuristic::{Heuristic, ShipRatio, Weighted};
pub use runner::{play, Ending, MatchConfig, MatchReport};
pub use search::{alpha_beta, minimax, SearchOutcome};
