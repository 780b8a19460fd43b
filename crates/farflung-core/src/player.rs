//! Player identities.
//!
//! Farflung is strictly two-player. [`Player`] identifies a side; planet
//! ownership uses `Option<Player>` with `None` for neutral planets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players in a match.
///
/// Serialized as the integers 1 and 2, matching the on-disk map format
/// and the convention used by external tournament drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Player 1, who always moves first.
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player's conventional integer id (1 or 2).
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index())
    }
}

impl From<Player> for u8 {
    fn from(p: Player) -> u8 {
        p.index()
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(format!("player id must be 1 or 2, got {other}")),
        }
    }
}
