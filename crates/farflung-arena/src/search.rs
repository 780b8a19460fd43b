//! Depth-limited adversarial search: plain minimax and alpha-beta.
//!
//! Both searches operate purely over immutable [`GameState`] values and
//! explore strictly by calling [`GameState::next`]; nothing is mutated.
//! The searching player is fixed at the root: a node maximizes when its
//! active player is the root player and minimizes otherwise.
//!
//! # Equivalence
//!
//! Alpha-beta pruning narrows the search window but never changes the
//! computed value: for any state, depth, and heuristic, [`minimax`] and
//! [`alpha_beta`] return the same value (though possibly different
//! moves when several tie). The test suite checks this property.
//!
//! # Tie randomization
//!
//! Move ordering is the deterministic [`GameState::moves`] order unless
//! the caller supplies an RNG, in which case moves are shuffled before
//! iteration. The RNG is always explicit: a fixed seed reproduces the
//! same choice among equal-valued moves, and no ambient randomness is
//! ever consulted.

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

use farflung_core::{GameState, Move, Player};

use crate::heuristic::Heuristic;

/// Result of a search: the value of the best line found and the move
/// that starts it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Value in `[-1, 1]` from the root player's point of view.
    pub value: f32,
    /// The chosen move; [`Move::Hold`] when the root is terminal or at
    /// depth zero.
    pub best: Move,
}

/// Depth-limited alpha-beta search from `state` for its active player.
///
/// Terminal states are worth `+1` for a root-player win and `-1`
/// otherwise; states at the depth cutoff are valued by `heuristic`.
/// Supplying `rng` shuffles move order at every node for randomized
/// tie-breaking.
pub fn alpha_beta<R: Rng>(
    state: &GameState,
    max_depth: u32,
    heuristic: &dyn Heuristic,
    mut rng: Option<&mut R>,
) -> SearchOutcome {
    let me = state.active_player();
    ab_node(
        state,
        me,
        max_depth,
        heuristic,
        f32::NEG_INFINITY,
        f32::INFINITY,
        rng.as_deref_mut(),
    )
}

fn ab_node<R: Rng>(
    state: &GameState,
    me: Player,
    depth_left: u32,
    heuristic: &dyn Heuristic,
    mut alpha: f32,
    mut beta: f32,
    mut rng: Option<&mut R>,
) -> SearchOutcome {
    if let Some(outcome) = leaf_value(state, me, depth_left, heuristic) {
        return outcome;
    }

    let mut moves = state.moves();
    if let Some(rng) = rng.as_deref_mut() {
        moves.shuffle(rng);
    }

    let maximizing = state.active_player() == me;
    let mut best = SearchOutcome {
        value: if maximizing {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        },
        best: Move::Hold,
    };

    for mv in moves {
        let child = state
            .next(mv)
            .expect("state checked non-terminal before expansion");
        let value = ab_node(
            &child,
            me,
            depth_left - 1,
            heuristic,
            alpha,
            beta,
            rng.as_deref_mut(),
        )
        .value;

        if maximizing {
            if value > best.value {
                best = SearchOutcome { value, best: mv };
            }
            alpha = alpha.max(best.value);
        } else {
            if value < best.value {
                best = SearchOutcome { value, best: mv };
            }
            beta = beta.min(best.value);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Depth-limited plain minimax: identical contract and value as
/// [`alpha_beta`], with no pruning.
///
/// Root children are independent without pruning, so they are evaluated
/// in parallel across rayon workers; the best is then chosen by a
/// sequential scan in move order, which keeps the result identical to a
/// fully sequential search. `rng`, when supplied, shuffles the root
/// move order (interior orderings cannot affect the value).
pub fn minimax<R: Rng>(
    state: &GameState,
    max_depth: u32,
    heuristic: &dyn Heuristic,
    mut rng: Option<&mut R>,
) -> SearchOutcome {
    let me = state.active_player();
    if let Some(outcome) = leaf_value(state, me, max_depth, heuristic) {
        return outcome;
    }

    let mut moves = state.moves();
    if let Some(rng) = rng.as_deref_mut() {
        moves.shuffle(rng);
    }

    let scored: Vec<(Move, f32)> = moves
        .into_par_iter()
        .map(|mv| {
            let child = state
                .next(mv)
                .expect("state checked non-terminal before expansion");
            (mv, mm_node(&child, me, max_depth - 1, heuristic))
        })
        .collect();

    let mut best = SearchOutcome {
        value: f32::NEG_INFINITY,
        best: Move::Hold,
    };
    for (mv, value) in scored {
        if value > best.value {
            best = SearchOutcome { value, best: mv };
        }
    }
    best
}

fn mm_node(state: &GameState, me: Player, depth_left: u32, heuristic: &dyn Heuristic) -> f32 {
    if let Some(outcome) = leaf_value(state, me, depth_left, heuristic) {
        return outcome.value;
    }

    let maximizing = state.active_player() == me;
    let mut best = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };
    for mv in state.moves() {
        let child = state
            .next(mv)
            .expect("state checked non-terminal before expansion");
        let value = mm_node(&child, me, depth_left - 1, heuristic);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Terminal and depth-cutoff evaluation shared by both searches.
fn leaf_value(
    state: &GameState,
    me: Player,
    depth_left: u32,
    heuristic: &dyn Heuristic,
) -> Option<SearchOutcome> {
    if state.finished() {
        let value = if state.winner() == Some(me) { 1.0 } else { -1.0 };
        return Some(SearchOutcome {
            value,
            best: Move::Hold,
        });
    }
    if depth_left == 0 {
        return Some(SearchOutcome {
            value: heuristic.evaluate(state, me),
            best: Move::Hold,
        });
    }
    None
}
