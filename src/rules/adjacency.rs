//! Turn order: the active neighbour of a seat in the direction of play.

use crate::core::{Direction, MatchState, PlayerId};

/// The active player adjacent to `of` in `direction`, wrapping around.
///
/// With a single active player the neighbour is the player itself.
///
/// # Panics
///
/// Panics if `active` is empty or does not contain `of`. Both are engine
/// invariants while a match runs.
///
/// ```
/// use dice_mafia::core::{Direction, PlayerId};
/// use dice_mafia::rules::neighbor;
///
/// let active = [PlayerId::new(1), PlayerId::new(3), PlayerId::new(4)];
/// assert_eq!(neighbor(&active, PlayerId::new(4), Direction::Forward), PlayerId::new(1));
/// assert_eq!(neighbor(&active, PlayerId::new(1), Direction::Backward), PlayerId::new(4));
/// ```
#[must_use]
pub fn neighbor(active: &[PlayerId], of: PlayerId, direction: Direction) -> PlayerId {
    let len = active.len();
    assert!(len > 0, "Adjacency over an empty active set");
    let pos = active
        .iter()
        .position(|&p| p == of)
        .unwrap_or_else(|| panic!("{of} is not an active player"));

    let next = match direction {
        Direction::Forward => (pos + 1) % len,
        Direction::Backward => (pos + len - 1) % len,
    };
    active[next]
}

/// Recompute `next_player` from `current_player` over the active set.
pub fn refresh_next(state: &mut MatchState) {
    state.next = neighbor(&state.active, state.current, state.direction);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u8]) -> Vec<PlayerId> {
        raw.iter().copied().map(PlayerId::new).collect()
    }

    #[test]
    fn test_forward_wraps_last_to_first() {
        let active = ids(&[1, 2, 3, 4]);
        assert_eq!(neighbor(&active, PlayerId::new(1), Direction::Forward), PlayerId::new(2));
        assert_eq!(neighbor(&active, PlayerId::new(4), Direction::Forward), PlayerId::new(1));
    }

    #[test]
    fn test_backward_wraps_first_to_last() {
        let active = ids(&[1, 2, 3, 4]);
        assert_eq!(neighbor(&active, PlayerId::new(3), Direction::Backward), PlayerId::new(2));
        assert_eq!(neighbor(&active, PlayerId::new(1), Direction::Backward), PlayerId::new(4));
    }

    #[test]
    fn test_skips_eliminated_seats() {
        let active = ids(&[2, 5, 7]);
        assert_eq!(neighbor(&active, PlayerId::new(2), Direction::Forward), PlayerId::new(5));
        assert_eq!(neighbor(&active, PlayerId::new(7), Direction::Forward), PlayerId::new(2));
        assert_eq!(neighbor(&active, PlayerId::new(2), Direction::Backward), PlayerId::new(7));
    }

    #[test]
    fn test_single_active_player_is_own_neighbor() {
        let active = ids(&[3]);
        assert_eq!(neighbor(&active, PlayerId::new(3), Direction::Forward), PlayerId::new(3));
        assert_eq!(neighbor(&active, PlayerId::new(3), Direction::Backward), PlayerId::new(3));
    }

    #[test]
    #[should_panic(expected = "not an active player")]
    fn test_inactive_seat_panics() {
        let _ = neighbor(&ids(&[1, 2]), PlayerId::new(3), Direction::Forward);
    }

    #[test]
    #[should_panic(expected = "empty active set")]
    fn test_empty_active_set_panics() {
        let _ = neighbor(&[], PlayerId::new(1), Direction::Forward);
    }
}
