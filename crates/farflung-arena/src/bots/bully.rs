//! A deterministic aggression baseline.

use farflung_core::{GameState, Move, PlanetId};

use super::Bot;

/// Sends ships from its strongest planet at the weakest planet it does
/// not own (enemy or neutral), every ply.
///
/// Fully deterministic; ties break toward the lower planet id because
/// enumeration is in id order and comparisons are strict.
#[derive(Debug, Clone, Copy, Default)]
pub struct BullyBot;

impl Bot for BullyBot {
    fn name(&self) -> &str {
        "bully"
    }

    fn get_move(&self, state: &GameState) -> Move {
        let me = state.active_player();

        // Strongest own planet with something worth sending.
        let mut source: Option<(PlanetId, u32)> = None;
        for id in state.planets_owned_by(me) {
            let strength = state.garrison(id);
            if strength > 1 && source.map_or(true, |(_, best)| strength > best) {
                source = Some((id, strength));
            }
        }

        // Weakest planet belonging to anyone else.
        let mut target: Option<(PlanetId, u32)> = None;
        for id in state.map().planet_ids() {
            if state.owner(id) == Some(me) {
                continue;
            }
            let strength = state.garrison(id);
            if target.map_or(true, |(_, best)| strength < best) {
                target = Some((id, strength));
            }
        }

        match (source, target) {
            (Some((source, _)), Some((target, _))) => Move::Send { source, target },
            _ => Move::Hold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farflung_core::Player;

    #[test]
    fn attacks_the_weakest_from_the_strongest() {
        let input = "\
0.0, 0.0, 1.0, 10, 1
0.2, 0.2, 1.0, 40, 1
1.0, 1.0, 1.0, 30, 2
0.5, 0.5, 0.5, 3, 0
";
        let state = GameState::from_reader(input.as_bytes()).unwrap();
        assert_eq!(state.active_player(), Player::One);
        assert_eq!(
            BullyBot.get_move(&state),
            Move::Send {
                source: PlanetId(1), // garrison 40
                target: PlanetId(3), // garrison 3
            }
        );
    }

    #[test]
    fn holds_when_nothing_can_be_sent() {
        let input = "0.0, 0.0, 1.0, 1, 1\n1.0, 1.0, 1.0, 30, 2\n";
        let state = GameState::from_reader(input.as_bytes()).unwrap();
        assert_eq!(BullyBot.get_move(&state), Move::Hold);
    }
}
