//! The match orchestrator: drives alternating plies to completion.
//!
//! Each ply walks a fixed sequence: solicit the mover's bot on a worker
//! thread under a wall-clock budget, validate the returned move's
//! shape, apply it through the transition engine, then either continue
//! with the other player or stop (victory, revocation, or the turn
//! cap). The only channel between orchestrator and bot is the one move
//! value: a bot that overruns its budget is abandoned, its eventual
//! result discarded, and a hold substituted, so a cancelled computation
//! can never touch the state lineage.
//!
//! Timeouts and revocations are reported in the [`MatchReport`], never
//! raised; construction problems and malformed moves abort the match
//! with a [`MatchError`] naming the responsible party.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use farflung_core::{GameState, Move, Player};

use crate::bots::Bot;
use crate::error::MatchError;

// =============================================================================
// Configuration and report
// =============================================================================

/// Knobs for a single match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Wall-clock budget per move; overruns substitute a hold.
    pub move_budget: Duration,
    /// Full-turn cap; reaching it ends the match with no winner.
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_budget: Duration::from_secs(5),
            max_turns: 100,
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// A player eliminated the other.
    Victory,
    /// The named player forfeited with an illegal move.
    Revoked(Player),
    /// The turn cap was reached with the game still running.
    TurnLimit,
}

/// Outcome of a completed match, serializable for tournament drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// The winner, or `None` when the turn cap cut the game short.
    pub winner: Option<Player>,
    /// Why the match stopped.
    pub ending: Ending,
    /// Plies actually played.
    pub plies: u32,
    /// Move timeouts per player (player 1 first).
    pub timeouts: [u32; 2],
}

// =============================================================================
// Play loop
// =============================================================================

/// Plays a full match between two bots from `initial`.
///
/// # Errors
///
/// [`MatchError::WrongStartingPlayer`] unless player 1 is to move in
/// `initial`; [`MatchError::MalformedMove`] if a bot returns a move
/// naming planets that do not exist or a source equal to its target.
pub fn play(
    player_one: Arc<dyn Bot>,
    player_two: Arc<dyn Bot>,
    initial: GameState,
    config: &MatchConfig,
) -> Result<MatchReport, MatchError> {
    if initial.active_player() != Player::One {
        return Err(MatchError::WrongStartingPlayer(initial.active_player()));
    }

    tracing::info!(
        player_one = player_one.name(),
        player_two = player_two.name(),
        planets = initial.map().len(),
        "match starting"
    );

    let mut state = initial;
    let mut plies = 0u32;
    let mut timeouts = [0u32; 2];

    while !state.finished() {
        if state.turn() >= config.max_turns {
            tracing::info!(turns = state.turn(), "turn cap reached, no winner");
            return Ok(MatchReport {
                winner: None,
                ending: Ending::TurnLimit,
                plies,
                timeouts,
            });
        }

        let mover = state.active_player();
        let bot = match mover {
            Player::One => &player_one,
            Player::Two => &player_two,
        };

        let mv = match solicit(bot, &state, config.move_budget) {
            Some(mv) => mv,
            None => {
                timeouts[usize::from(mover.index() - 1)] += 1;
                tracing::warn!(%mover, bot = bot.name(), "move timed out, holding");
                Move::Hold
            }
        };
        validate_shape(mv, &state, bot.name())?;

        tracing::debug!(%mover, %mv, turn = state.turn(), "applying move");
        state = state.next(mv)?;
        plies += 1;

        if let Some(offender) = state.revoked() {
            tracing::warn!(%offender, "illegal move, match forfeited");
        }
    }

    let ending = match state.revoked() {
        Some(offender) => Ending::Revoked(offender),
        None => Ending::Victory,
    };
    let winner = state.winner();
    tracing::info!(?winner, ?ending, plies, "match finished");

    Ok(MatchReport {
        winner,
        ending,
        plies,
        timeouts,
    })
}

/// Runs `bot.get_move` on a worker thread and waits out the budget.
///
/// The move comes back through a single-slot channel written at most
/// once; on timeout (or a bot panic) the thread is abandoned and `None`
/// returned. The abandoned computation holds only its own clone of the
/// state, so it cannot affect the match.
fn solicit(bot: &Arc<dyn Bot>, state: &GameState, budget: Duration) -> Option<Move> {
    let (tx, rx) = mpsc::sync_channel(1);
    let bot = Arc::clone(bot);
    let snapshot = state.clone();
    thread::spawn(move || {
        let _ = tx.send(bot.get_move(&snapshot));
    });

    match rx.recv_timeout(budget) {
        Ok(mv) => Some(mv),
        Err(mpsc::RecvTimeoutError::Timeout) => None,
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            tracing::warn!("bot thread exited without a move");
            None
        }
    }
}

/// Rejects moves whose shape does not fit the map. Ownership is not
/// checked here; that is the engine's revocation rule.
fn validate_shape(mv: Move, state: &GameState, bot: &str) -> Result<(), MatchError> {
    let malformed = |reason: &str| {
        Err(MatchError::MalformedMove {
            bot: bot.to_string(),
            mv,
            reason: reason.to_string(),
        })
    };

    match mv {
        Move::Hold => Ok(()),
        Move::Send { source, target } => {
            let planets = state.map().len();
            if source.as_usize() >= planets || target.as_usize() >= planets {
                return malformed("planet id out of range");
            }
            if source == target {
                return malformed("source and target are the same planet");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farflung_core::PlanetId;

    use crate::bots::{BullyBot, MinimaxBot, RandomBot};

    /// Routes match-loop tracing through the test harness's capture.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    /// Never moves.
    struct HoldBot;
    impl Bot for HoldBot {
        fn name(&self) -> &str {
            "hold"
        }
        fn get_move(&self, _state: &GameState) -> Move {
            Move::Hold
        }
    }

    /// Always moves from the opponent's first planet: instant revoke.
    struct IllegalBot;
    impl Bot for IllegalBot {
        fn name(&self) -> &str {
            "illegal"
        }
        fn get_move(&self, state: &GameState) -> Move {
            let opponent = state.active_player().opponent();
            let source = state.planets_owned_by(opponent).next().unwrap();
            Move::Send {
                source,
                target: PlanetId(0),
            }
        }
    }

    /// Returns a planet id that is not on the map.
    struct OutOfRangeBot;
    impl Bot for OutOfRangeBot {
        fn name(&self) -> &str {
            "out-of-range"
        }
        fn get_move(&self, _state: &GameState) -> Move {
            Move::Send {
                source: PlanetId(999),
                target: PlanetId(0),
            }
        }
    }

    /// Sleeps far past any reasonable budget.
    struct SleepyBot;
    impl Bot for SleepyBot {
        fn name(&self) -> &str {
            "sleepy"
        }
        fn get_move(&self, _state: &GameState) -> Move {
            thread::sleep(Duration::from_secs(5));
            Move::Hold
        }
    }

    fn short_config(max_turns: u32) -> MatchConfig {
        MatchConfig {
            move_budget: Duration::from_millis(200),
            max_turns,
        }
    }

    fn duel() -> GameState {
        let input = "0.5, 0.5, 1.0, 20, 1\n0.52, 0.5, 1.0, 1, 2\n";
        GameState::from_reader(input.as_bytes()).unwrap()
    }

    #[test]
    fn starting_with_player_two_is_a_construction_error() {
        let second_ply = duel().next(Move::Hold).unwrap();
        let err = play(
            Arc::new(HoldBot),
            Arc::new(HoldBot),
            second_ply,
            &short_config(10),
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::WrongStartingPlayer(Player::Two)));
    }

    #[test]
    fn a_decisive_bot_wins_by_victory() {
        let report = play(
            Arc::new(MinimaxBot::with_heuristic(
                2,
                Box::new(crate::heuristic::ShipRatio),
                None,
            )),
            Arc::new(HoldBot),
            duel(),
            &short_config(50),
        )
        .unwrap();
        assert_eq!(report.winner, Some(Player::One));
        assert_eq!(report.ending, Ending::Victory);
        assert_eq!(report.plies, 1);
    }

    #[test]
    fn an_illegal_move_loses_by_revocation() {
        init_tracing();
        let report = play(
            Arc::new(IllegalBot),
            Arc::new(HoldBot),
            duel(),
            &short_config(50),
        )
        .unwrap();
        assert_eq!(report.ending, Ending::Revoked(Player::One));
        assert_eq!(report.winner, Some(Player::Two));
    }

    #[test]
    fn a_malformed_move_aborts_the_match() {
        let err = play(
            Arc::new(OutOfRangeBot),
            Arc::new(HoldBot),
            duel(),
            &short_config(50),
        )
        .unwrap_err();
        match err {
            MatchError::MalformedMove { bot, .. } => assert_eq!(bot, "out-of-range"),
            other => panic!("expected MalformedMove, got {other:?}"),
        }
    }

    #[test]
    fn a_slow_bot_holds_and_play_continues() {
        init_tracing();
        let report = play(
            Arc::new(SleepyBot),
            Arc::new(HoldBot),
            duel(),
            &short_config(2),
        )
        .unwrap();
        // Every player-1 ply timed out; the game ran to the turn cap.
        assert_eq!(report.ending, Ending::TurnLimit);
        assert_eq!(report.winner, None);
        assert_eq!(report.timeouts[0], 2);
        assert_eq!(report.timeouts[1], 0);
    }

    #[test]
    fn the_turn_cap_stops_an_endless_game() {
        let report = play(
            Arc::new(HoldBot),
            Arc::new(HoldBot),
            duel(),
            &short_config(3),
        )
        .unwrap();
        assert_eq!(report.ending, Ending::TurnLimit);
        assert_eq!(report.winner, None);
        assert_eq!(report.plies, 6);
    }

    #[test]
    fn baseline_bots_complete_a_generated_match() {
        let (initial, _) = GameState::generate(6, Some(21), true).unwrap();
        let report = play(
            Arc::new(RandomBot::new(4)),
            Arc::new(BullyBot),
            initial,
            &short_config(200),
        )
        .unwrap();
        match report.ending {
            Ending::Victory | Ending::Revoked(_) => assert!(report.winner.is_some()),
            Ending::TurnLimit => assert!(report.winner.is_none()),
        }
        assert!(report.plies > 0);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = MatchReport {
            winner: Some(Player::Two),
            ending: Ending::Revoked(Player::One),
            plies: 17,
            timeouts: [0, 1],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(serde_json::from_str::<MatchReport>(&json).unwrap(), report);
    }
}
