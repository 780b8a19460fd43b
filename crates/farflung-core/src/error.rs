//! Core error types.
//!
//! Construction failures (bad map files, bad generation parameters) are
//! fatal and surface immediately as [`MapError`]. Calling
//! [`GameState::next`](crate::state::GameState::next) on a finished
//! state is a programming error and surfaces as [`TerminalStateError`].
//!
//! Note what is *not* here: an illegal move is not an error. The engine
//! records it as a revocation and the match ends with the offender
//! losing, all through normal state flow.

use thiserror::Error;

use crate::player::Player;

/// `next()` was invoked on a finished state.
///
/// Callers must check `finished()` before asking for a transition;
/// this error is never recovered silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("game state is finished; no next states exist")]
pub struct TerminalStateError;

/// A map could not be generated or loaded.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the map file did not parse as `x,y,production,garrison,owner`.
    #[error("map line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the map file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A coordinate fell outside the unit square.
    #[error("map line {line}: coordinate ({x}, {y}) outside [0,1]x[0,1]")]
    CoordinateOutOfRange {
        /// 1-based line number in the map file.
        line: usize,
        /// Offending x coordinate.
        x: f32,
        /// Offending y coordinate.
        y: f32,
    },

    /// A production rate fell outside `(0, 1]`.
    #[error("map line {line}: production rate {rate} outside (0,1]")]
    ProductionOutOfRange {
        /// 1-based line number in the map file.
        line: usize,
        /// Offending production rate.
        rate: f32,
    },

    /// No planet was owned by the given player.
    ///
    /// A loaded map must give each player at least one planet.
    #[error("map assigns no planet to {0}")]
    MissingHome(Player),

    /// Too few planets requested from the generator.
    #[error("generated maps need at least {required} planets, requested {requested}")]
    TooFewPlanets {
        /// Minimum number of planets (the two home planets).
        required: usize,
        /// Number actually requested.
        requested: usize,
    },
}
