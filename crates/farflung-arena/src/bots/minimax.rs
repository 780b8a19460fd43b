//! The search-driven bot: alpha-beta with a pluggable heuristic.

use std::sync::Mutex;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use farflung_core::{GameState, Move};

use crate::heuristic::{Heuristic, ShipRatio};
use crate::search::alpha_beta;

use super::Bot;

/// Chooses moves by depth-limited alpha-beta search.
///
/// With tie randomization enabled the bot shuffles move order each
/// node using its own seeded RNG, so two bots built with the same seed
/// play identical games; without it, the first move of equal value in
/// enumeration order is always taken.
pub struct MinimaxBot {
    depth: u32,
    heuristic: Box<dyn Heuristic>,
    tie_break: Option<Mutex<ChaCha8Rng>>,
}

impl MinimaxBot {
    /// A depth-4 searcher over the ship-ratio heuristic with randomized
    /// tie-breaks, matching the crate's usual tournament entrant.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_heuristic(4, Box::new(ShipRatio), Some(seed))
    }

    /// Full configuration: search depth, heuristic, and optional
    /// tie-break seed (`None` plays deterministically).
    #[must_use]
    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>, seed: Option<u64>) -> Self {
        Self {
            depth,
            heuristic,
            tie_break: seed.map(|s| Mutex::new(ChaCha8Rng::seed_from_u64(s))),
        }
    }
}

impl Bot for MinimaxBot {
    fn name(&self) -> &str {
        "minimax"
    }

    fn get_move(&self, state: &GameState) -> Move {
        let outcome = match &self.tie_break {
            Some(rng) => {
                let mut rng = rng.lock().expect("rng mutex poisoned");
                alpha_beta(state, self.depth, self.heuristic.as_ref(), Some(&mut *rng))
            }
            None => alpha_beta::<ChaCha8Rng>(state, self.depth, self.heuristic.as_ref(), None),
        };
        tracing::debug!(value = outcome.value, best = %outcome.best, "search finished");
        outcome.best
    }
}
