//! A bot that plays uniformly random legal moves.

use std::sync::Mutex;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use farflung_core::{GameState, Move};

use super::Bot;

/// Picks one of the legal moves uniformly at random.
///
/// Useful as a baseline opponent and for smoke-testing the match loop.
/// The RNG is seeded explicitly, so a match against a `RandomBot` with
/// a fixed seed replays identically.
pub struct RandomBot {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomBot {
    /// Creates a random bot drawing from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "random"
    }

    fn get_move(&self, state: &GameState) -> Move {
        let mut rng = self.rng.lock().expect("rng mutex poisoned");
        // moves() always contains at least Hold.
        *state
            .moves()
            .choose(&mut *rng)
            .unwrap_or(&Move::Hold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_a_legal_move() {
        let (state, _) = GameState::generate(6, Some(1), true).unwrap();
        let bot = RandomBot::new(42);
        for _ in 0..20 {
            let mv = bot.get_move(&state);
            assert!(state.moves().contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let (state, _) = GameState::generate(6, Some(1), true).unwrap();
        let a: Vec<Move> = {
            let bot = RandomBot::new(7);
            (0..10).map(|_| bot.get_move(&state)).collect()
        };
        let b: Vec<Move> = {
            let bot = RandomBot::new(7);
            (0..10).map(|_| bot.get_move(&state)).collect()
        };
        assert_eq!(a, b);
    }
}
