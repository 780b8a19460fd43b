//! # Farflung Core
//!
//! Deterministic game-state engine for Farflung, a two-player
//! planetary-conquest testbed for autonomous strategy programs.
//!
//! The crate provides the immutable value types (planets, fleets, maps,
//! game states) and the pure transition function that advances the game
//! one ply at a time: fleet movement, sequential combat resolution,
//! production scheduling, legality and termination rules.
//!
//! ## Determinism
//!
//! Given the same inputs, every operation here is bit-for-bit
//! reproducible:
//!
//! - States are immutable; [`GameState::next`] derives a fresh value
//!   and never mutates its parent.
//! - Fleets resolve in insertion order; moves enumerate in planet id
//!   order.
//! - All randomness (map generation, tie-break shuffling by callers)
//!   flows through explicitly seeded sources, never ambient state.
//!
//! ## Usage
//!
//! ```
//! use farflung_core::{GameState, Move};
//!
//! let (mut state, _seed) = GameState::generate(6, Some(42), true).unwrap();
//! while !state.finished() && state.turn() < 100 {
//!     // A trivial player: always the first enumerated move.
//!     let mv = state.moves()[0];
//!     state = state.next(mv).unwrap();
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fleet;
pub mod map;
pub mod planet;
pub mod player;
pub mod state;

mod engine;
mod generate;

pub use error::{MapError, TerminalStateError};
pub use fleet::Fleet;
pub use map::{Map, FLEET_SPEED};
pub use planet::{Planet, PlanetId};
pub use player::Player;
pub use state::{GameState, Move};

#[cfg(test)]
mod tests;
