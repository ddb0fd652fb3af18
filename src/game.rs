//! Local match runner driving two players through the turn protocol.

use log::info;

use crate::common::{GameResult, GuessResult};
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::player::Player;

/// Result of one locally-refereed match. Indices are 0 for the first
/// player passed to [`run_match`], 1 for the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MatchOutcome {
    pub winner: Option<usize>,
    pub disqualified: Option<usize>,
    pub shots: [u32; 2],
}

fn disqualify(
    players: &mut [&mut dyn Player; 2],
    offender: usize,
    reason: &str,
    shots: [u32; 2],
) -> MatchOutcome {
    let winner = 1 - offender;
    info!("player{} disqualified: {}", offender + 1, reason);
    players[offender].game_over(GameResult::Disqualified, Some(reason));
    players[winner].game_over(GameResult::Victory, Some(reason));
    MatchOutcome {
        winner: Some(winner),
        disqualified: Some(offender),
        shots,
    }
}

/// Run one full game between two players, relaying every callback the
/// real engine would: placements, targets, results, enemy moves, and the
/// final `game_over`. Illegal placements, malformed targets, and repeat
/// guesses end the game as a disqualification.
pub fn run_match(
    p1: &mut dyn Player,
    p2: &mut dyn Player,
    names: [&str; 2],
) -> anyhow::Result<MatchOutcome> {
    p1.new_game(names[1]);
    p2.new_game(names[0]);
    let mut players: [&mut dyn Player; 2] = [p1, p2];

    let mut fleets = [Fleet::new(), Fleet::new()];
    for i in 0..2 {
        match Fleet::from_player(&*players[i]) {
            Ok(fleet) => fleets[i] = fleet,
            Err(err) => {
                return Ok(disqualify(&mut players, i, &err.to_string(), [0, 0]));
            }
        }
    }

    let mut shots = [0u32; 2];
    let mut attacker = 0usize;
    loop {
        let defender = 1 - attacker;
        let text = players[attacker].next_target();
        shots[attacker] += 1;

        let coord = match text.parse::<Coord>() {
            Ok(coord) => coord,
            Err(reason) => return Ok(disqualify(&mut players, attacker, &reason, shots)),
        };
        let result = match fleets[defender].guess(coord.row, coord.col) {
            Ok(result) => result,
            Err(err) => {
                return Ok(disqualify(&mut players, attacker, &err.to_string(), shots));
            }
        };

        players[defender].enemy_targeting(&text);
        let (was_hit, ship_sunk) = match result {
            GuessResult::Miss => (false, None),
            GuessResult::Hit => (true, None),
            GuessResult::Sink(ship) => (true, Some(ship)),
        };
        players[attacker]
            .target_result(&text, was_hit, ship_sunk)
            .map_err(|e| anyhow::anyhow!(e))?;

        if fleets[defender].all_sunk() {
            info!("{} wins in {} shots", names[attacker], shots[attacker]);
            players[attacker].game_over(GameResult::Victory, None);
            players[defender].game_over(GameResult::Defeat, None);
            return Ok(MatchOutcome {
                winner: Some(attacker),
                disqualified: None,
                shots,
            });
        }
        attacker = defender;
    }
}
