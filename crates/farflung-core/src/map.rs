//! The immutable map: planet positions, production rates, travel times.
//!
//! A [`Map`] is built once, wrapped in an `Arc`, and shared by reference
//! across every [`GameState`](crate::state::GameState) derived from it.
//! Nothing on a map ever changes during play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::planet::{Planet, PlanetId};

/// Universal fleet speed: distance covered per ply.
///
/// Chosen so a fleet crosses the unit square corner-to-corner
/// (distance `sqrt(2)`) in exactly ten plies.
pub const FLEET_SPEED: f32 = std::f32::consts::SQRT_2 / 10.0;

/// Ordered, immutable collection of planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    planets: Vec<Planet>,
}

impl Map {
    /// Builds a map from a list of planets.
    ///
    /// Planet ids are re-assigned to match the list position, so the id
    /// of `planets[i]` is always `PlanetId(i)`.
    #[must_use]
    pub fn new(planets: Vec<Planet>) -> Self {
        let planets = planets
            .into_iter()
            .enumerate()
            .map(|(i, p)| Planet::new(PlanetId(i), p.pos(), p.production()))
            .collect();
        Self { planets }
    }

    /// Number of planets on the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// True if the map has no planets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// The planet with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range. Ids obtained from the same map
    /// are always valid.
    #[must_use]
    pub fn planet(&self, id: PlanetId) -> &Planet {
        &self.planets[id.as_usize()]
    }

    /// The planet with the given id, or `None` if out of range.
    #[must_use]
    pub fn get(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(id.as_usize())
    }

    /// All planets, in id order.
    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }

    /// All planet ids, in order.
    pub fn planet_ids(&self) -> impl Iterator<Item = PlanetId> + '_ {
        (0..self.planets.len()).map(PlanetId)
    }

    /// Euclidean distance between two planet centers.
    #[must_use]
    pub fn distance(&self, a: PlanetId, b: PlanetId) -> f32 {
        self.planet(a).pos().distance(self.planet(b).pos())
    }

    /// Travel time between two planets, in plies.
    ///
    /// The Euclidean distance divided by [`FLEET_SPEED`], rounded to the
    /// nearest integer. Never less than 1: even adjacent planets take a
    /// full ply to reach, so a dispatch can never land before the ply
    /// that launched it resolves.
    #[must_use]
    pub fn travel_time(&self, a: PlanetId, b: PlanetId) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let plies = (self.distance(a, b) / FLEET_SPEED).round() as u32;
        plies.max(1)
    }

    /// Center of the playing area, used for symmetric map generation.
    #[must_use]
    pub fn center() -> Vec2 {
        Vec2::new(0.5, 0.5)
    }
}
