//! Initial state construction: random generation and file loading.
//!
//! Generation is deterministic: the seed is either supplied or drawn
//! fresh, fed to a `ChaCha8Rng`, and returned alongside the state so a
//! map can always be reproduced. No ambient randomness is consulted.
//!
//! The on-disk format is one planet per line,
//! `x, y, production, garrison, owner`, with owner 0 (neutral), 1 or 2.
//! Blank lines and `#` comments are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::MapError;
use crate::map::Map;
use crate::planet::{Planet, PlanetId};
use crate::player::Player;
use crate::state::GameState;

/// Garrison stationed on each home planet at the start.
const HOME_GARRISON: u32 = 100;

impl GameState {
    /// Generates a random starting state.
    ///
    /// The two home planets sit at `(0,0)` (player 1) and `(1,1)`
    /// (player 2) with production rate 1 and a garrison of
    /// [`HOME_GARRISON`]. The remaining planets are neutral, with
    /// random positions, garrisons in `1..=100`, and production rates
    /// of the form `1/k` for `k in 1..=10`.
    ///
    /// With `symmetric` set, neutral planets are generated in pairs
    /// point-reflected through the board center, so both home corners
    /// see an identical map; an odd planet left over sits exactly at
    /// the center. Fair by construction.
    ///
    /// Returns the state together with the seed that produced it. The
    /// same seed always reproduces the same map.
    ///
    /// # Errors
    ///
    /// [`MapError::TooFewPlanets`] if `num_planets < 2`; the two homes
    /// are mandatory.
    pub fn generate(
        num_planets: usize,
        seed: Option<u64>,
        symmetric: bool,
    ) -> Result<(GameState, u64), MapError> {
        if num_planets < 2 {
            return Err(MapError::TooFewPlanets {
                required: 2,
                requested: num_planets,
            });
        }

        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut planets = vec![
            Planet::new(PlanetId(0), Vec2::new(0.0, 0.0), 1.0),
            Planet::new(PlanetId(1), Vec2::new(1.0, 1.0), 1.0),
        ];
        let mut garrisons = vec![HOME_GARRISON, HOME_GARRISON];
        let mut owners = vec![Some(Player::One), Some(Player::Two)];

        let push_neutral = |planets: &mut Vec<Planet>,
                                garrisons: &mut Vec<u32>,
                                owners: &mut Vec<Option<Player>>,
                                pos: Vec2,
                                production: f32,
                                garrison: u32| {
            planets.push(Planet::new(PlanetId(planets.len()), pos, production));
            garrisons.push(garrison);
            owners.push(None);
        };

        let rest = num_planets - 2;
        if symmetric {
            for _ in 0..rest / 2 {
                let pos = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());
                let production = random_production(&mut rng);
                let garrison = rng.gen_range(1..=100);
                push_neutral(&mut planets, &mut garrisons, &mut owners, pos, production, garrison);
                // Mirror twin: point reflection through the center.
                let mirrored = Map::center() * 2.0 - pos;
                push_neutral(
                    &mut planets,
                    &mut garrisons,
                    &mut owners,
                    mirrored,
                    production,
                    garrison,
                );
            }
            if rest % 2 == 1 {
                // The odd planet out is its own mirror image.
                let production = random_production(&mut rng);
                let garrison = rng.gen_range(1..=100);
                push_neutral(
                    &mut planets,
                    &mut garrisons,
                    &mut owners,
                    Map::center(),
                    production,
                    garrison,
                );
            }
        } else {
            for _ in 0..rest {
                let pos = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());
                let production = random_production(&mut rng);
                let garrison = rng.gen_range(1..=100);
                push_neutral(&mut planets, &mut garrisons, &mut owners, pos, production, garrison);
            }
        }

        tracing::debug!(seed, num_planets, symmetric, "generated map");

        let state = GameState::new(Arc::new(Map::new(planets)), owners, garrisons);
        Ok((state, seed))
    }

    /// Loads a starting state from a map file.
    ///
    /// # Errors
    ///
    /// [`MapError`] on I/O failure, on any malformed or out-of-range
    /// line, or if either player ends up without a planet.
    pub fn load(path: impl AsRef<Path>) -> Result<GameState, MapError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses a starting state from any reader of map-file lines.
    ///
    /// # Errors
    ///
    /// Same conditions as [`load`](GameState::load).
    pub fn from_reader(reader: impl Read) -> Result<GameState, MapError> {
        let mut planets = Vec::new();
        let mut garrisons = Vec::new();
        let mut owners = Vec::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (planet, garrison, owner) = parse_line(line, line_no)?;
            planets.push(planet);
            garrisons.push(garrison);
            owners.push(owner);
        }

        for player in [Player::One, Player::Two] {
            if !owners.contains(&Some(player)) {
                return Err(MapError::MissingHome(player));
            }
        }

        Ok(GameState::new(
            Arc::new(Map::new(planets)),
            owners,
            garrisons,
        ))
    }
}

/// Production rates come in steps of `1/k`: a planet produces one ship
/// every `k` turns, `k` uniform in `1..=10`.
fn random_production(rng: &mut ChaCha8Rng) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let k = rng.gen_range(1..=10) as f32;
    1.0 / k
}

fn parse_line(line: &str, line_no: usize) -> Result<(Planet, u32, Option<Player>), MapError> {
    let malformed = |reason: String| MapError::Malformed {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return Err(malformed(format!(
            "expected 5 fields (x, y, production, garrison, owner), got {}",
            fields.len()
        )));
    }

    let x: f32 = fields[0]
        .parse()
        .map_err(|_| malformed(format!("bad x coordinate {:?}", fields[0])))?;
    let y: f32 = fields[1]
        .parse()
        .map_err(|_| malformed(format!("bad y coordinate {:?}", fields[1])))?;
    let production: f32 = fields[2]
        .parse()
        .map_err(|_| malformed(format!("bad production rate {:?}", fields[2])))?;
    let garrison: u32 = fields[3]
        .parse()
        .map_err(|_| malformed(format!("bad garrison {:?}", fields[3])))?;
    let owner_id: u8 = fields[4]
        .parse()
        .map_err(|_| malformed(format!("bad owner {:?}", fields[4])))?;

    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        return Err(MapError::CoordinateOutOfRange { line: line_no, x, y });
    }
    if !(production > 0.0 && production <= 1.0) {
        return Err(MapError::ProductionOutOfRange {
            line: line_no,
            rate: production,
        });
    }

    let owner = match owner_id {
        0 => None,
        1 => Some(Player::One),
        2 => Some(Player::Two),
        other => return Err(malformed(format!("owner must be 0, 1 or 2, got {other}"))),
    };

    // The id is reassigned by Map::new; a placeholder is fine here.
    let planet = Planet::new(PlanetId(0), Vec2::new(x, y), production);
    Ok((planet, garrison, owner))
}
