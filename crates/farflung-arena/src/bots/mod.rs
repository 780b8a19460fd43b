//! Bots: autonomous strategy programs.
//!
//! A bot is anything that can turn a game state into a move. The match
//! orchestrator runs `get_move` on a worker thread with a wall-clock
//! budget, so implementations must be `Send + Sync` and keep any
//! internal randomness behind interior mutability.

mod bully;
mod minimax;
mod random;

pub use bully::BullyBot;
pub use minimax::MinimaxBot;
pub use random::RandomBot;

use farflung_core::{GameState, Move};

/// A strategy program playing one side of a match.
pub trait Bot: Send + Sync {
    /// A short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Chooses a move for the state's active player.
    ///
    /// Returning [`Move::Hold`] is always safe. Returning a move whose
    /// source the bot does not own loses the game by revocation; the
    /// orchestrator separately rejects out-of-range planet ids as
    /// malformed.
    fn get_move(&self, state: &GameState) -> Move;
}
