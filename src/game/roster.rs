//! Roster construction.
//!
//! The first `human_count` seats are human, the rest computers. When both
//! kinds sit at the table the seating is shuffled and seats renumbered
//! `1..=N` in shuffled order; a table of one kind keeps its natural order.

use crate::agents::DecisionAgent;
use crate::core::{GameRng, MatchConfig, Player, PlayerId, PlayerKind, PlayerMap};

/// Seated players with the agent answering for each seat.
pub struct Roster {
    pub players: Vec<Player>,
    pub agents: PlayerMap<Box<dyn DecisionAgent>>,
}

/// Kinds of every seat in seating order.
#[must_use]
pub fn seat_kinds(player_count: usize, human_count: usize, seating: &mut GameRng) -> Vec<PlayerKind> {
    let mut kinds: Vec<PlayerKind> = (0..player_count)
        .map(|i| {
            if i < human_count {
                PlayerKind::Human
            } else {
                PlayerKind::Computer
            }
        })
        .collect();

    if human_count > 0 && human_count < player_count {
        seating.shuffle(&mut kinds);
    }
    kinds
}

/// Seat the players described by `config`, asking `make_agent` for each seat's agent.
pub fn build_roster(
    config: &MatchConfig,
    seating: &mut GameRng,
    mut make_agent: impl FnMut(PlayerId, PlayerKind) -> Box<dyn DecisionAgent>,
) -> Roster {
    let kinds = seat_kinds(config.player_count, config.human_count, seating);

    let players: Vec<Player> = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| Player::new(PlayerId::from_index(i), kind, config.starting_score))
        .collect();
    let agents = PlayerMap::from_vec(
        players.iter().map(|p| make_agent(p.id, p.kind)).collect(),
    );

    Roster { players, agents }
}
