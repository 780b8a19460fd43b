//! Test setup utilities: small hand-built maps and states.

use std::sync::Arc;

use glam::Vec2;

use crate::map::Map;
use crate::planet::{Planet, PlanetId};
use crate::player::Player;
use crate::state::GameState;

/// A map with the two home corners and two neutral planets on the
/// diagonal. Production rates are small enough that short tests are
/// not disturbed by growth.
pub fn quiet_map() -> Arc<Map> {
    Arc::new(Map::new(vec![
        Planet::new(PlanetId(0), Vec2::new(0.0, 0.0), 0.01),
        Planet::new(PlanetId(1), Vec2::new(1.0, 1.0), 0.01),
        Planet::new(PlanetId(2), Vec2::new(0.3, 0.3), 0.01),
        Planet::new(PlanetId(3), Vec2::new(0.7, 0.7), 0.01),
    ]))
}

/// A duel on [`quiet_map`]: player 1 holds planet 0, player 2 planet 1,
/// the rest neutral with garrison 5.
pub fn duel_state(garrison_one: u32, garrison_two: u32) -> GameState {
    GameState::new(
        quiet_map(),
        vec![Some(Player::One), Some(Player::Two), None, None],
        vec![garrison_one, garrison_two, 5, 5],
    )
}
