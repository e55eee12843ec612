//! Match state.
//!
//! ## MatchState
//!
//! Everything a match needs between two steps:
//! - Full roster in seating order (never reordered after setup)
//! - Active seats (score > 0), shrinking monotonically
//! - Current and next player, direction, round counter
//! - Phase of the turn state machine
//!
//! The state is plain data and serializable, so a snapshot after any step
//! carries everything needed to report on the match.

use serde::{Deserialize, Serialize};

use super::die::Face;
use super::direction::Direction;
use super::event::EndReason;
use super::player::{Player, PlayerId, PlayerKind};

/// Phase of the match state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Roster seated; first player and direction not chosen yet.
    Setup,
    /// Waiting for `current` to roll.
    AwaitingRoll,
    /// `round_winner` emptied their dice; settlement pending.
    RoundOver,
    /// No further turns.
    Finished { reason: EndReason },
}

/// Complete state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) players: Vec<Player>,
    pub(crate) active: Vec<PlayerId>,
    pub(crate) first_player: Option<PlayerId>,
    pub(crate) current: PlayerId,
    pub(crate) next: PlayerId,
    pub(crate) round: u32,
    pub(crate) rounds_played: u32,
    pub(crate) direction: Direction,
    pub(crate) round_winner: Option<PlayerId>,
    pub(crate) phase: Phase,
}

impl MatchState {
    /// Create the state for a seated roster.
    ///
    /// `players` must be in seating order with ids `1..=N`.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        for (i, p) in players.iter().enumerate() {
            assert_eq!(p.id, PlayerId::from_index(i), "Roster must be in seating order");
        }

        let active: Vec<PlayerId> = players.iter().filter(|p| p.is_active()).map(|p| p.id).collect();
        assert!(!active.is_empty(), "At least one player needs a positive score");
        let current = active[0];
        let next = active.get(1).copied().unwrap_or(current);

        Self {
            players,
            active,
            first_player: None,
            current,
            next,
            round: 1,
            rounds_played: 0,
            direction: Direction::Forward,
            round_winner: None,
            phase: Phase::Setup,
        }
    }

    // === Roster ===

    /// Full roster in seating order, eliminated players included.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Active seats in seating order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, id: PlayerId) -> bool {
        self.active.contains(&id)
    }

    /// Scores of every seat in seating order.
    #[must_use]
    pub fn scores(&self) -> Vec<(PlayerId, u32)> {
        self.players.iter().map(|p| (p.id, p.score())).collect()
    }

    /// Total dice held by every player.
    #[must_use]
    pub fn dice_in_play(&self) -> usize {
        self.players.iter().map(Player::dice_count).sum()
    }

    // === Turn pointers ===

    #[must_use]
    pub fn first_player(&self) -> Option<PlayerId> {
        self.first_player
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.next
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current round, 1-based.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds fully settled so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn round_winner(&self) -> Option<PlayerId> {
        self.round_winner
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Reset every player's dice, eliminated players included.
    pub fn reset_all_dice(&mut self, count: usize) {
        for p in &mut self.players {
            p.reset_dice(count);
        }
    }

    /// Public view of the match as it stands.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            round: self.round,
            rounds_played: self.rounds_played,
            phase: self.phase,
            direction: self.direction,
            current: self.current,
            next: self.next,
            round_winner: self.round_winner,
            seats: self
                .players
                .iter()
                .map(|p| SeatView {
                    id: p.id,
                    kind: p.kind,
                    score: p.score(),
                    active: self.active.contains(&p.id),
                    dice: p.dice_count(),
                    showing: p.faces(),
                })
                .collect(),
        }
    }
}

/// One seat as seen from outside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub kind: PlayerKind,
    pub score: u32,
    pub active: bool,
    pub dice: usize,
    /// Faces of the rolled dice; unrolled dice are not listed.
    pub showing: Vec<Face>,
}

/// Serializable public state after a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub round: u32,
    pub rounds_played: u32,
    pub phase: Phase,
    pub direction: Direction,
    pub current: PlayerId,
    pub next: PlayerId,
    pub round_winner: Option<PlayerId>,
    pub seats: Vec<SeatView>,
}
