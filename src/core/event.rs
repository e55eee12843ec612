//! Match event log.
//!
//! Everything observable about a match is recorded as an `EventRecord`:
//! who rolled what, which dice left or moved, who paid into the pot, who
//! was eliminated and who won. Presentation layers render from these
//! records; nothing needs to peek into the engine.
//!
//! The log can be written as NDJSON, one JSON object per line.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::die::Face;
use super::direction::Direction;
use super::player::{PlayerId, PlayerKind};

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The configured number of rounds was played.
    RoundLimit,
    /// Every other player was eliminated.
    LastPlayerStanding,
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Seats assigned, in seating order.
    RosterSeated { seats: Vec<(PlayerId, PlayerKind)> },

    /// A roll deciding who opens the match. `attempt` 0 is the initial roll,
    /// later attempts are tie-breaks.
    OpeningRoll {
        player: PlayerId,
        attempt: u32,
        faces: Vec<Face>,
        total: u32,
    },

    /// Several players shared the best opening total and roll again.
    TieBreak { tied: Vec<PlayerId>, total: u32 },

    FirstPlayerChosen { player: PlayerId },

    DirectionChosen { player: PlayerId, direction: Direction },

    RoundStarted { starting_player: PlayerId },

    /// One turn: the faces rolled and what happened to the 1s and 6s.
    TurnRolled {
        player: PlayerId,
        faces: Vec<Face>,
        ones_removed: usize,
        sixes_passed: usize,
        recipient: PlayerId,
        dice_left: usize,
    },

    /// The player emptied their dice.
    RoundWon { winner: PlayerId },

    /// A losing player's end-of-round roll and what it cost.
    LiabilityPaid {
        player: PlayerId,
        faces: Vec<Face>,
        pips: u32,
        paid: u32,
        eliminated: bool,
    },

    PotAwarded { winner: PlayerId, pot: u32, new_score: u32 },

    PlayerEliminated { player: PlayerId },

    /// Scores of every seat after a round settles.
    Standings { scores: Vec<(PlayerId, u32)> },

    MatchEnded {
        reason: EndReason,
        winners: Vec<PlayerId>,
        scores: Vec<(PlayerId, u32)>,
    },
}

/// An event with its position in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log, starting at 1.
    pub seq: u64,

    /// Round the event belongs to; 0 during setup.
    pub round: u32,

    #[serde(flatten)]
    pub event: MatchEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(seq: u64, round: u32, event: MatchEvent) -> Self {
        Self { seq, round, event }
    }
}

/// Receives every record as the engine appends it.
pub trait MatchObserver {
    fn on_event(&mut self, record: &EventRecord);
}

/// Append-only event log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return the stored record.
    pub fn push(&mut self, round: u32, event: MatchEvent) -> &EventRecord {
        let seq = self.records.len() as u64 + 1;
        self.records.push(EventRecord::new(seq, round, event));
        &self.records[self.records.len() - 1]
    }

    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every record as one JSON object per line.
    pub fn write_ndjson<W: Write>(&self, mut w: W) -> io::Result<()> {
        for record in &self.records {
            serde_json::to_writer(&mut w, record)?;
            w.write_all(b"\n")?;
        }
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(v: u8) -> Face {
        Face::new(v).unwrap()
    }

    #[test]
    fn test_log_sequences_from_one() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(0, MatchEvent::FirstPlayerChosen { player: PlayerId::new(2) });
        let rec = log.push(1, MatchEvent::RoundStarted { starting_player: PlayerId::new(2) });
        assert_eq!(rec.seq, 2);
        assert_eq!(rec.round, 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_record_serialization_is_flat() {
        let record = EventRecord::new(
            7,
            3,
            MatchEvent::TurnRolled {
                player: PlayerId::new(1),
                faces: vec![face(1), face(6), face(3)],
                ones_removed: 1,
                sixes_passed: 1,
                recipient: PlayerId::new(2),
                dice_left: 1,
            },
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["event"], "turn_rolled");
        assert_eq!(value["seq"], 7);
        assert_eq!(value["faces"], serde_json::json!([1, 6, 3]));

        let back: EventRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_write_ndjson_one_line_per_record() {
        let mut log = EventLog::new();
        log.push(0, MatchEvent::DirectionChosen {
            player: PlayerId::new(1),
            direction: Direction::Backward,
        });
        log.push(1, MatchEvent::RoundWon { winner: PlayerId::new(1) });

        let mut out = Vec::new();
        log.write_ndjson(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"direction\":-1"));
        assert!(lines[1].contains("\"event\":\"round_won\""));
    }
}
