//! Per-turn resolution.
//!
//! The current player rolls everything they hold. Every 1 leaves the game
//! for the rest of the round, in bulk. Every 6 is handed to the next player
//! one die at a time, each hand-off an atomic take/give pair. A player left
//! with no dice wins the round; otherwise play moves on.

use serde::{Deserialize, Serialize};

use super::adjacency::refresh_next;
use crate::core::{DieRoller, Face, MatchState, Phase, PlayerId};

/// What one turn did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    /// Faces rolled, before any removal.
    pub faces: Vec<Face>,
    pub ones_removed: usize,
    pub sixes_passed: usize,
    /// Player who received the 6s, fixed for the whole turn.
    pub recipient: PlayerId,
    /// Dice the player holds after the turn.
    pub dice_left: usize,
    /// The player emptied their dice and won the round.
    pub round_over: bool,
}

/// Roll the current player's dice and resolve them.
///
/// # Panics
///
/// Panics unless the match is awaiting a roll.
pub fn play_turn(state: &mut MatchState, roller: &mut dyn DieRoller) -> TurnOutcome {
    assert_eq!(state.phase, Phase::AwaitingRoll, "No roll is expected in this phase");
    let current = state.current;
    state.player_mut(current).roll_all_dice(roller);
    resolve_rolled_dice(state)
}

/// Resolve the faces the current player already shows.
///
/// # Panics
///
/// Panics unless the match is awaiting a roll.
pub fn resolve_rolled_dice(state: &mut MatchState) -> TurnOutcome {
    assert_eq!(state.phase, Phase::AwaitingRoll, "No roll is expected in this phase");
    let current = state.current;
    let recipient = state.next;

    let player = state.player_mut(current);
    let faces = player.faces();
    let ones = player.count_faces(Face::ONE);
    let sixes = player.count_faces(Face::SIX);

    let ones_removed = player.remove_dice(Face::ONE);
    debug_assert_eq!(ones_removed, ones);

    if recipient != current {
        for _ in 0..sixes {
            let taken = state.player_mut(current).remove_one_die(Face::SIX);
            debug_assert!(taken, "counted six vanished before transfer");
            state.player_mut(recipient).add_die();
        }
    }
    let sixes_passed = if recipient != current { sixes } else { 0 };

    let dice_left = state.player(current).dice_count();
    let round_over = dice_left == 0;

    if round_over {
        state.round_winner = Some(current);
        state.phase = Phase::RoundOver;
    } else {
        debug_assert!(
            state.is_active(state.next) && state.player(state.next).score() > 0,
            "next player must be active"
        );
        state.current = state.next;
        refresh_next(state);
    }

    TurnOutcome {
        player: current,
        faces,
        ones_removed,
        sixes_passed,
        recipient,
        dice_left,
        round_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Player, PlayerKind, ScriptedRoller};

    fn face(v: u8) -> Face {
        Face::new(v).unwrap()
    }

    fn faces(raw: &[u8]) -> Vec<Face> {
        raw.iter().map(|&v| face(v)).collect()
    }

    fn running_state(n: usize, direction: Direction) -> MatchState {
        let players = PlayerId::all(n)
            .map(|id| Player::new(id, PlayerKind::Computer, 100))
            .collect();
        let mut state = MatchState::new(players);
        state.reset_all_dice(5);
        state.direction = direction;
        state.current = PlayerId::new(1);
        refresh_next(&mut state);
        state.phase = Phase::AwaitingRoll;
        state
    }

    #[test]
    fn test_ones_removed_sixes_passed() {
        let mut state = running_state(3, Direction::Forward);
        state.player_mut(PlayerId::new(1)).set_dice(&faces(&[1, 1, 6, 3, 6]));
        let before = state.dice_in_play();

        let outcome = resolve_rolled_dice(&mut state);

        assert_eq!(outcome.ones_removed, 2);
        assert_eq!(outcome.sixes_passed, 2);
        assert_eq!(outcome.recipient, PlayerId::new(2));
        assert_eq!(state.player(PlayerId::new(1)).faces(), faces(&[3]));
        assert_eq!(state.player(PlayerId::new(2)).dice_count(), 7);
        assert_eq!(state.dice_in_play(), before - 2);
        assert!(!outcome.round_over);

        // Play moved on
        assert_eq!(state.current_player(), PlayerId::new(2));
        assert_eq!(state.next_player(), PlayerId::new(3));
    }

    #[test]
    fn test_sixes_go_backward() {
        let mut state = running_state(4, Direction::Backward);
        state.player_mut(PlayerId::new(1)).set_dice(&faces(&[6, 2, 2, 2, 2]));

        let outcome = resolve_rolled_dice(&mut state);

        assert_eq!(outcome.recipient, PlayerId::new(4));
        assert_eq!(state.player(PlayerId::new(4)).dice_count(), 6);
        assert_eq!(state.current_player(), PlayerId::new(4));
        assert_eq!(state.next_player(), PlayerId::new(3));
    }

    #[test]
    fn test_emptying_dice_ends_round() {
        let mut state = running_state(2, Direction::Forward);
        state.player_mut(PlayerId::new(1)).set_dice(&faces(&[1, 6, 1, 6, 1]));

        let outcome = resolve_rolled_dice(&mut state);

        assert!(outcome.round_over);
        assert_eq!(outcome.dice_left, 0);
        assert_eq!(state.phase(), Phase::RoundOver);
        assert_eq!(state.round_winner(), Some(PlayerId::new(1)));
        // Current stays with the winner
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.player(PlayerId::new(2)).dice_count(), 7);
    }

    #[test]
    fn test_play_turn_rolls_then_resolves() {
        let mut state = running_state(2, Direction::Forward);
        let mut roller = ScriptedRoller::from_values(&[2, 3, 4, 5, 6]);

        let outcome = play_turn(&mut state, &mut roller);

        assert_eq!(outcome.faces, faces(&[2, 3, 4, 5, 6]));
        assert_eq!(outcome.sixes_passed, 1);
        assert_eq!(outcome.dice_left, 4);
        assert_eq!(roller.rolls(), 5);
    }

    #[test]
    #[should_panic(expected = "No roll is expected")]
    fn test_turn_outside_awaiting_roll_panics() {
        let mut state = running_state(2, Direction::Forward);
        state.phase = Phase::RoundOver;
        let _ = resolve_rolled_dice(&mut state);
    }
}
