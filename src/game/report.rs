//! Console text for a match.
//!
//! `describe` turns one event record into the lines a player at the table
//! reads; `ConsoleReporter` is the observer that prints them as they arrive.

use std::io::Write;

use crate::core::{
    EndReason, EventRecord, Face, MatchConfig, MatchEvent, MatchObserver, PlayerId, PlayerKind,
};

/// Rules printed before setup, with the numbers of this match.
#[must_use]
pub fn instructions(config: &MatchConfig) -> String {
    format!(
        "\
Welcome to Mafia dice!

Every player starts with {score} and {dice} each round. On your turn you roll
all the dice you hold:
  - every 1 you roll is removed from the game for the rest of the round
  - every 6 you roll is passed, one die at a time, to the next player
The first player to get rid of all their dice wins the round. Everyone else
then rolls the dice they still hold and pays the pips into the pot, which
goes to the round winner. A player who cannot cover their roll pays what is
left and leaves the match.

The match lasts {rounds} or until one player is left. The highest score wins.
",
        score = count(config.starting_score as usize, "point", "points"),
        dice = count(config.dice_per_round, "die", "dice"),
        rounds = count(config.max_rounds as usize, "round", "rounds"),
    )
}

/// Observer printing every event to a writer.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> MatchObserver for ConsoleReporter<W> {
    fn on_event(&mut self, record: &EventRecord) {
        let Some(text) = describe(record) else {
            return;
        };
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            eprintln!("Warning: could not print match report: {err}");
        }
    }
}

/// Text for one record, or `None` for events that print nothing.
#[must_use]
pub fn describe(record: &EventRecord) -> Option<String> {
    let text = match &record.event {
        MatchEvent::RosterSeated { seats } => describe_roster(seats),
        MatchEvent::OpeningRoll { player, faces, total, .. } => {
            format!("{player} rolls {} for a total of {total}.", dice(faces))
        }
        MatchEvent::TieBreak { tied, total } => {
            format!("{} tie with {total} and roll again.", list_players(tied))
        }
        MatchEvent::FirstPlayerChosen { player } => format!("{player} goes first."),
        MatchEvent::DirectionChosen { player, direction } => {
            let order = if direction.step() > 0 { "increasing" } else { "decreasing" };
            format!("{player} chose {direction}: play moves in {order} seat order.")
        }
        MatchEvent::RoundStarted { starting_player } => {
            format!("\n=== Round {} ===\n{starting_player} starts.", record.round)
        }
        MatchEvent::TurnRolled {
            player,
            faces,
            ones_removed,
            sixes_passed,
            recipient,
            dice_left,
        } => {
            let pips: u32 = faces.iter().map(|f| u32::from(f.value())).sum();
            let mut lines = vec![format!("{player} rolls {} ({pips} pips).", dice(faces))];
            if *ones_removed > 0 {
                lines.push(format!("  {} removed.", count(*ones_removed, "one", "ones")));
            }
            if *sixes_passed > 0 {
                let verb = if *sixes_passed == 1 { "goes" } else { "go" };
                lines.push(format!(
                    "  {} {verb} to {recipient}.",
                    count(*sixes_passed, "six", "sixes")
                ));
            }
            lines.push(format!("  {player} has {} left.", count(*dice_left, "die", "dice")));
            lines.join("\n")
        }
        MatchEvent::RoundWon { winner } => {
            format!("{winner} has no dice left and wins round {}!", record.round)
        }
        MatchEvent::LiabilityPaid {
            player,
            faces,
            pips,
            paid,
            eliminated,
        } => {
            let rolled = if faces.is_empty() {
                String::from("has no dice to roll")
            } else {
                format!("rolls {} ({pips} pips)", dice(faces))
            };
            if *eliminated {
                format!(
                    "{player} {rolled} and pays all remaining {} and leaves the match.",
                    count(*paid as usize, "point", "points")
                )
            } else {
                format!("{player} {rolled} and pays {}.", count(*paid as usize, "point", "points"))
            }
        }
        MatchEvent::PotAwarded { winner, pot, new_score } => format!(
            "{winner} collects a pot of {} and now has {new_score}.",
            count(*pot as usize, "point", "points")
        ),
        MatchEvent::PlayerEliminated { .. } => return None,
        MatchEvent::Standings { scores } => {
            let mut lines = vec![String::from("Scores:")];
            lines.extend(scores.iter().map(|(id, score)| format!("  {id}: {score}")));
            lines.join("\n")
        }
        MatchEvent::MatchEnded { reason, winners, scores } => {
            let why = match reason {
                EndReason::RoundLimit => {
                    format!("after {}", count(record.round as usize, "round", "rounds"))
                }
                EndReason::LastPlayerStanding => String::from("with one player left"),
            };
            let best = scores
                .iter()
                .find(|(id, _)| winners.contains(id))
                .map_or(0, |(_, s)| *s);
            let verdict = match winners.as_slice() {
                [single] => format!("{single} wins with {best} points!"),
                _ => format!("It's a tie! {} share the win with {best} points.", list_players(winners)),
            };
            format!("\nThe match is over {why}.\n{verdict}")
        }
    };
    Some(text)
}

fn describe_roster(seats: &[(PlayerId, PlayerKind)]) -> String {
    let humans: Vec<PlayerId> = seats
        .iter()
        .filter(|(_, kind)| *kind == PlayerKind::Human)
        .map(|(id, _)| *id)
        .collect();

    match humans.len() {
        0 => format!("All {} players are computers.", seats.len()),
        n if n == seats.len() => format!("All {n} players are human."),
        1 => format!("{} is human; the rest are computers.", humans[0]),
        _ => format!("{} are human; the rest are computers.", list_players(&humans)),
    }
}

/// Die glyphs separated by spaces.
fn dice(faces: &[Face]) -> String {
    faces.iter().map(|f| f.glyph().to_string()).collect::<Vec<_>>().join(" ")
}

/// "Player 2", "Players 1 and 3", "Players 1, 2 and 4".
fn list_players(ids: &[PlayerId]) -> String {
    let numbers: Vec<String> = ids.iter().map(|id| id.0.to_string()).collect();
    match numbers.as_slice() {
        [] => String::from("No players"),
        [one] => format!("Player {one}"),
        [rest @ .., last] => format!("Players {} and {last}", rest.join(", ")),
    }
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}
