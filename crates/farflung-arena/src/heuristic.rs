//! Heuristic evaluation of unfinished states.
//!
//! The search treats a heuristic as an opaque oracle: any
//! `(state, player) -> value in [-1, 1]` estimator can be plugged in,
//! from the ship-ratio baseline here to a learned model living in
//! another crate.

use farflung_core::{GameState, Player};

/// An estimator of how good `state` looks for `player`.
///
/// Implementations must return values in `[-1, 1]`, where `1` reads as
/// a certain win and `-1` as a certain loss. `Send + Sync` so searches
/// can run on worker threads and, for plain minimax, across rayon
/// workers.
pub trait Heuristic: Send + Sync {
    /// Evaluates `state` from `player`'s point of view.
    fn evaluate(&self, state: &GameState, player: Player) -> f32;
}

/// Baseline heuristic: the player's share of all ships on the board,
/// rescaled to `[-1, 1]`.
///
/// Garrisons and fleets both count; neutral garrisons count toward the
/// total but toward neither player, so an even split over a mostly
/// neutral map sits near zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipRatio;

impl Heuristic for ShipRatio {
    fn evaluate(&self, state: &GameState, player: Player) -> f32 {
        let total = state.total_ships();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = state.ship_count(player) as f32 / total as f32;
        (ratio * 2.0 - 1.0).clamp(-1.0, 1.0)
    }
}

/// A weighted combination of heuristics, clamped back into `[-1, 1]`.
pub struct Weighted {
    terms: Vec<(f32, Box<dyn Heuristic>)>,
}

impl Weighted {
    /// Builds a combination from `(weight, heuristic)` terms.
    #[must_use]
    pub fn new(terms: Vec<(f32, Box<dyn Heuristic>)>) -> Self {
        Self { terms }
    }
}

impl Heuristic for Weighted {
    fn evaluate(&self, state: &GameState, player: Player) -> f32 {
        let sum: f32 = self
            .terms
            .iter()
            .map(|(weight, h)| weight * h.evaluate(state, player))
            .sum();
        sum.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_ratio_is_zero_for_an_even_split() {
        let input = "0.0, 0.0, 1.0, 50, 1\n1.0, 1.0, 1.0, 50, 2\n";
        let state = GameState::from_reader(input.as_bytes()).unwrap();
        assert!(ShipRatio.evaluate(&state, Player::One).abs() < 1e-6);
        assert!(ShipRatio.evaluate(&state, Player::Two).abs() < 1e-6);
    }

    #[test]
    fn ship_ratio_saturates_when_one_side_dominates() {
        let input = "0.0, 0.0, 1.0, 100, 1\n1.0, 1.0, 1.0, 0, 2\n";
        let state = GameState::from_reader(input.as_bytes()).unwrap();
        assert!((ShipRatio.evaluate(&state, Player::One) - 1.0).abs() < 1e-6);
        assert!((ShipRatio.evaluate(&state, Player::Two) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn neutral_garrisons_dilute_both_players() {
        let input = "0.0, 0.0, 1.0, 25, 1\n1.0, 1.0, 1.0, 25, 2\n0.5, 0.5, 0.5, 50, 0\n";
        let state = GameState::from_reader(input.as_bytes()).unwrap();
        // 25 of 100 ships: ratio 0.25, rescaled to -0.5.
        assert!((ShipRatio.evaluate(&state, Player::One) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn weighted_clamps_to_unit_interval() {
        let input = "0.0, 0.0, 1.0, 100, 1\n1.0, 1.0, 1.0, 0, 2\n";
        let state = GameState::from_reader(input.as_bytes()).unwrap();
        let h = Weighted::new(vec![(2.0, Box::new(ShipRatio)), (1.5, Box::new(ShipRatio))]);
        assert!((h.evaluate(&state, Player::One) - 1.0).abs() < 1e-6);
    }
}
