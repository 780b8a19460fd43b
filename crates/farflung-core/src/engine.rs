//! The transition engine: `State x Move -> State`.
//!
//! One call to [`GameState::next`] processes exactly one ply, in a
//! fixed order:
//!
//! 1. **Legality** — moving from a planet the active player does not
//!    own records a revocation. Revocation is an outcome, not an error:
//!    the produced state is finished with the offender losing.
//! 2. **Dispatch** — a legal move sends half the source garrison
//!    (rounded down) as a new fleet. Garrisons of 1 or 0 make the move
//!    inert but still legal.
//! 3. **Fleet advancement** — every fleet, the new one included, moves
//!    one ply closer. Fleets reaching zero arrive now.
//! 4. **Arrival resolution** — arrivals resolve sequentially in fleet
//!    list order, each seeing the garrison left by the previous one.
//!    No simultaneous-combat merging.
//! 5. **Bookkeeping** — the active player flips; after player 2's ply
//!    the turn counter increments and production is applied.
//!
//! The input state is never touched; the successor is a fresh value
//! sharing only the `Arc<Map>`.

use std::sync::Arc;

use crate::error::TerminalStateError;
use crate::fleet::Fleet;
use crate::planet::PlanetId;
use crate::player::Player;
use crate::state::{GameState, Move};

impl GameState {
    /// Returns the state that results from the active player playing
    /// `mv`.
    ///
    /// # Errors
    ///
    /// [`TerminalStateError`] if this state is already finished.
    /// Callers must check [`finished`](GameState::finished) first.
    ///
    /// # Panics
    ///
    /// Panics if `mv` names a planet id that is not on this state's
    /// map. Moves produced by [`moves`](GameState::moves) are always
    /// in range; moves returned by untrusted bots go through the match
    /// orchestrator's shape validation first.
    pub fn next(&self, mv: Move) -> Result<GameState, TerminalStateError> {
        if self.finished() {
            return Err(TerminalStateError);
        }

        let mut owners = self.owners.clone();
        let mut garrisons = self.garrisons.clone();
        let mut fleets = self.fleets.clone();
        let mut revoked = self.revoked;

        // Steps 1 + 2: legality, then dispatch.
        if let Move::Send { source, target } = mv {
            if self.owner(source) != Some(self.active) {
                tracing::debug!(player = %self.active, %source, "illegal source, move revoked");
                revoked = Some(self.active);
            } else {
                let garrison = garrisons[source.as_usize()];
                if garrison > 1 {
                    let sent = garrison / 2;
                    garrisons[source.as_usize()] = garrison - sent;
                    fleets.push(Fleet::new(
                        source,
                        target,
                        self.active,
                        sent,
                        self.map.travel_time(source, target),
                    ));
                }
                // A garrison of 0 or 1 dispatches nothing; the move is
                // legal but inert.
            }
        }

        // Steps 3 + 4: advance every fleet; resolve arrivals in list
        // order. Surviving fleets keep their insertion order.
        let mut surviving = Vec::with_capacity(fleets.len());
        for fleet in &fleets {
            match fleet.advance() {
                Some(in_transit) => surviving.push(in_transit),
                None => resolve_arrival(fleet, &mut owners, &mut garrisons),
            }
        }

        // Step 5: flip the active player; after player 2's ply, count
        // the completed turn and apply production.
        let mut turn = self.turn;
        if self.active == Player::Two {
            turn += 1;
            apply_production(&self.map, &owners, &mut garrisons, turn);
        }

        Ok(GameState {
            map: Arc::clone(&self.map),
            owners,
            garrisons,
            fleets: surviving,
            active: self.active.opponent(),
            turn,
            revoked,
        })
    }
}

/// Resolves one arriving fleet against its target planet.
///
/// Reinforcement if the owners match; otherwise an attack, neutral
/// planets included. A defender reduced exactly to zero keeps the
/// planet.
fn resolve_arrival(fleet: &Fleet, owners: &mut [Option<Player>], garrisons: &mut [u32]) {
    let target = fleet.target().as_usize();

    if owners[target] == Some(fleet.owner()) {
        garrisons[target] += fleet.size();
        return;
    }

    let result = i64::from(garrisons[target]) - i64::from(fleet.size());
    if result < 0 {
        // Conquered: surviving attackers garrison the planet.
        tracing::debug!(
            planet = %fleet.target(),
            attacker = %fleet.owner(),
            survivors = -result,
            "planet conquered"
        );
        owners[target] = Some(fleet.owner());
        garrisons[target] = u32::try_from(-result).unwrap_or(u32::MAX);
    } else {
        garrisons[target] = u32::try_from(result).unwrap_or(0);
    }
}

/// Adds one ship to every producing planet whose interval divides the
/// just-completed turn. Neutral planets never produce.
fn apply_production(
    map: &crate::map::Map,
    owners: &[Option<Player>],
    garrisons: &mut [u32],
    turn: u32,
) {
    for (i, owner) in owners.iter().enumerate() {
        if owner.is_none() {
            continue;
        }
        let interval = map.planet(PlanetId(i)).growth_interval();
        if turn != 0 && turn % interval == 0 {
            garrisons[i] += 1;
        }
    }
}
