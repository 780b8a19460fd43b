//! Fleets: ship groups in transit between planets.
//!
//! A [`Fleet`] is an immutable value. Advancing it one ply produces a
//! fresh value with the distance decremented, or signals arrival; the
//! engine then resolves the arrival against the target planet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planet::PlanetId;
use crate::player::Player;

/// A group of ships in transit from one planet to another.
///
/// The source planet is not needed for combat resolution but is kept
/// for visualization and debugging, mirroring the wire format external
/// viewers consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fleet {
    source: PlanetId,
    target: PlanetId,
    owner: Player,
    size: u32,
    distance: u32,
}

impl Fleet {
    /// Creates a fleet `distance` plies away from its target.
    ///
    /// Every fleet stored in a published state has `distance >= 1`;
    /// the engine removes fleets in the same transition that brings
    /// them to zero.
    #[must_use]
    pub fn new(source: PlanetId, target: PlanetId, owner: Player, size: u32, distance: u32) -> Self {
        Self {
            source,
            target,
            owner,
            size,
            distance,
        }
    }

    /// The planet this fleet departed from.
    #[must_use]
    pub fn source(&self) -> PlanetId {
        self.source
    }

    /// The planet this fleet is headed to.
    #[must_use]
    pub fn target(&self) -> PlanetId {
        self.target
    }

    /// The player the fleet fights for.
    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Number of ships in the fleet.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Plies remaining until arrival.
    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// The same fleet one ply later, or `None` if it arrives this ply.
    #[must_use]
    pub fn advance(&self) -> Option<Fleet> {
        if self.distance <= 1 {
            None
        } else {
            Some(Fleet {
                distance: self.distance - 1,
                ..*self
            })
        }
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}>{} s{} o{} d{}]",
            self.source,
            self.target,
            self.size,
            self.owner.index(),
            self.distance
        )
    }
}
