//! Game state: the sole unit of simulation.
//!
//! A [`GameState`] is an immutable snapshot of one ply: planet
//! ownership, garrisons, fleets in transit, whose turn it is, and the
//! turn counter. States are never mutated once published; the engine
//! ([`GameState::next`]) derives each successor as a fresh value, and
//! the map is shared by `Arc` across the whole lineage.
//!
//! # Determinism
//!
//! Everything observable about a state is deterministic: fleets keep
//! their insertion order, [`GameState::moves`] enumerates in planet id
//! order, and any randomness (map generation, tie-break shuffles) is
//! injected by the caller as an explicitly seeded source.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::fleet::Fleet;
use crate::map::Map;
use crate::planet::PlanetId;
use crate::player::Player;

// =============================================================================
// Move
// =============================================================================

/// A single player's action for one ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Move {
    /// Do nothing this ply. Always legal.
    #[default]
    Hold,
    /// Send half of the source planet's garrison (rounded down) toward
    /// the target planet.
    Send {
        /// Planet the ships depart from. Must be owned by the mover.
        source: PlanetId,
        /// Planet the ships head to. Any other planet, own planets
        /// included (reinforcement).
        target: PlanetId,
    },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Hold => write!(f, "hold"),
            Move::Send { source, target } => write!(f, "{source}>{target}"),
        }
    }
}

// =============================================================================
// GameState
// =============================================================================

/// Immutable snapshot of the game at one ply.
///
/// Constructed by [`generate`](GameState::generate) or
/// [`load`](GameState::load); every later state is derived by exactly
/// one call to [`next`](GameState::next) on its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Shared, never cloned per state.
    pub(crate) map: Arc<Map>,
    /// Planet ownership by id; `None` is neutral.
    pub(crate) owners: Vec<Option<Player>>,
    /// Ships stationed at each planet, by id.
    pub(crate) garrisons: Vec<u32>,
    /// Fleets in transit, in dispatch order.
    pub(crate) fleets: Vec<Fleet>,
    /// The player whose ply it is.
    pub(crate) active: Player,
    /// Full turns completed (a turn is one ply by each player).
    pub(crate) turn: u32,
    /// Set once a player forfeits via an illegal move; permanent.
    pub(crate) revoked: Option<Player>,
}

impl GameState {
    /// Builds the initial state over a map: owners and garrisons by
    /// planet id, no fleets, player 1 to move, turn 0.
    ///
    /// # Panics
    ///
    /// Panics if `owners` or `garrisons` do not have one entry per
    /// planet. Map loading and generation produce well-formed inputs;
    /// direct callers must too.
    #[must_use]
    pub fn new(map: Arc<Map>, owners: Vec<Option<Player>>, garrisons: Vec<u32>) -> Self {
        assert_eq!(owners.len(), map.len(), "one owner entry per planet");
        assert_eq!(garrisons.len(), map.len(), "one garrison entry per planet");
        Self {
            map,
            owners,
            garrisons,
            fleets: Vec::new(),
            active: Player::One,
            turn: 0,
            revoked: None,
        }
    }

    /// The same state with a fleet added in transit.
    ///
    /// Scenario setup only; mid-game fleets come from the engine.
    #[must_use]
    pub fn with_fleet(mut self, fleet: Fleet) -> Self {
        self.fleets.push(fleet);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The shared map.
    #[must_use]
    pub fn map(&self) -> &Arc<Map> {
        &self.map
    }

    /// Owner of a planet; `None` is neutral.
    #[must_use]
    pub fn owner(&self, id: PlanetId) -> Option<Player> {
        self.owners[id.as_usize()]
    }

    /// Ships stationed at a planet.
    #[must_use]
    pub fn garrison(&self, id: PlanetId) -> u32 {
        self.garrisons[id.as_usize()]
    }

    /// Fleets in transit, in dispatch order.
    #[must_use]
    pub fn fleets(&self) -> &[Fleet] {
        &self.fleets
    }

    /// The player whose ply it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Full turns completed. Increments after each of player 2's plies.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player who forfeited with an illegal move, if any.
    #[must_use]
    pub fn revoked(&self) -> Option<Player> {
        self.revoked
    }

    /// Ids of the planets owned by `player`, in id order.
    pub fn planets_owned_by(&self, player: Player) -> impl Iterator<Item = PlanetId> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter(move |(_, owner)| **owner == Some(player))
            .map(|(i, _)| PlanetId(i))
    }

    /// Total ships belonging to `player`: garrisons plus fleets in flight.
    #[must_use]
    pub fn ship_count(&self, player: Player) -> u64 {
        let stationed: u64 = self
            .planets_owned_by(player)
            .map(|id| u64::from(self.garrison(id)))
            .sum();
        let in_flight: u64 = self
            .fleets
            .iter()
            .filter(|f| f.owner() == player)
            .map(|f| u64::from(f.size()))
            .sum();
        stationed + in_flight
    }

    /// Total ships on the board, both players and neutral garrisons.
    #[must_use]
    pub fn total_ships(&self) -> u64 {
        let stationed: u64 = self.garrisons.iter().map(|&g| u64::from(g)).sum();
        let in_flight: u64 = self.fleets.iter().map(|f| u64::from(f.size())).sum();
        stationed + in_flight
    }

    // -------------------------------------------------------------------------
    // Rules queries
    // -------------------------------------------------------------------------

    /// All legal moves for the active player.
    ///
    /// [`Move::Hold`] first, then every `(source, target)` pair in
    /// planet id order where the source is an active-player planet with
    /// garrison strictly greater than 1 and the target is any other
    /// planet (own planets included, for reinforcement). The order is
    /// deterministic; callers wanting randomized tie-breaks shuffle the
    /// result themselves with an explicit RNG.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = vec![Move::Hold];
        for source in self.planets_owned_by(self.active) {
            if self.garrison(source) <= 1 {
                continue;
            }
            for target in self.map.planet_ids() {
                if target != source {
                    moves.push(Move::Send { source, target });
                }
            }
        }
        moves
    }

    /// True once a player was eliminated or revoked.
    ///
    /// A player is eliminated only with zero planets AND zero fleets in
    /// flight; ships still traveling can reconquer.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.revoked.is_some()
            || self.eliminated(Player::One)
            || self.eliminated(Player::Two)
    }

    /// The winner, or `None` while the game is still running.
    ///
    /// A revoking player loses; otherwise the surviving player wins.
    /// There are no draws.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if let Some(offender) = self.revoked {
            return Some(offender.opponent());
        }
        if self.eliminated(Player::One) {
            Some(Player::Two)
        } else if self.eliminated(Player::Two) {
            Some(Player::One)
        } else {
            None
        }
    }

    fn eliminated(&self, player: Player) -> bool {
        self.planets_owned_by(player).next().is_none()
            && !self.fleets.iter().any(|f| f.owner() == player)
    }
}
