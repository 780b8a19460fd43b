//! Match orchestration errors.
//!
//! These are the fatal failures: a misconstructed match or a bot whose
//! returned move is structurally invalid. Game-rule violations (moving
//! from an unowned planet) and timeouts are NOT errors; the former ends
//! the match by revocation, the latter substitutes a hold and plays on.

use thiserror::Error;

use farflung_core::{Move, Player, TerminalStateError};

/// A match could not be started or driven to completion.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The initial state did not have player 1 to move.
    #[error("the starting state must have player 1 to move, found {0}")]
    WrongStartingPlayer(Player),

    /// A bot returned a move that is structurally invalid for the map:
    /// an out-of-range planet id, or a source equal to its target.
    ///
    /// Distinct from an ownership violation, which is a game-rule
    /// matter the engine settles by revocation.
    #[error("bot {bot:?} returned malformed move {mv}: {reason}")]
    MalformedMove {
        /// Name of the offending bot.
        bot: String,
        /// The move as returned.
        mv: Move,
        /// Which shape rule it broke.
        reason: String,
    },

    /// The orchestrator asked a finished state for a transition.
    /// Indicates a bug in the play loop, never expected in practice.
    #[error(transparent)]
    Terminal(#[from] TerminalStateError),
}
