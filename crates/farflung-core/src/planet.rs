//! Planet descriptors.
//!
//! A [`Planet`] carries only the static map information: position and
//! production rate. Everything that changes as the game is played
//! (ownership, stationed ships) lives in the game state, keyed by
//! [`PlanetId`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable index of a planet within its [`Map`](crate::map::Map).
///
/// Ids are assigned at map construction and never change; every state
/// derived from the same map uses the same ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PlanetId(pub usize);

impl PlanetId {
    /// Returns the raw index.
    #[must_use]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PlanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static description of a single planet.
///
/// Positions live in the unit square `[0,1] x [0,1]`. The production
/// rate is a float in `(0, 1]`: a planet produces one ship every
/// `ceil(1 / rate)` full turns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    id: PlanetId,
    pos: Vec2,
    production: f32,
}

impl Planet {
    /// Creates a planet at `pos` with the given production rate.
    ///
    /// Callers are expected to keep `pos` inside the unit square and
    /// `production` in `(0, 1]`; map loading enforces both.
    #[must_use]
    pub fn new(id: PlanetId, pos: Vec2, production: f32) -> Self {
        Self { id, pos, production }
    }

    /// The planet's stable id.
    #[must_use]
    pub fn id(&self) -> PlanetId {
        self.id
    }

    /// Center point of the planet in the unit-square playing area.
    #[must_use]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Production rate in `(0, 1]`.
    #[must_use]
    pub fn production(&self) -> f32 {
        self.production
    }

    /// Number of full turns between produced ships: `ceil(1 / production)`.
    #[must_use]
    pub fn growth_interval(&self) -> u32 {
        // production is in (0, 1], so the quotient is >= 1 and finite.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let interval = (1.0 / self.production).ceil() as u32;
        interval.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_interval_rounds_up() {
        let p = |rate| Planet::new(PlanetId(0), Vec2::ZERO, rate).growth_interval();
        assert_eq!(p(1.0), 1);
        assert_eq!(p(0.5), 2);
        assert_eq!(p(0.34), 3);
        assert_eq!(p(0.1), 10);
    }

    #[test]
    fn growth_interval_is_at_least_one() {
        let p = Planet::new(PlanetId(0), Vec2::ZERO, 1.0);
        assert_eq!(p.growth_interval(), 1);
    }
}
