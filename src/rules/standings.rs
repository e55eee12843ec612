//! Maximum search and match winners.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied on the best score.
    Winners(Vec<PlayerId>),
}

impl MatchResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            MatchResult::Winner(p) => *p == player,
            MatchResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// Every winner, in seating order.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            MatchResult::Winner(p) => vec![*p],
            MatchResult::Winners(ps) => ps.clone(),
        }
    }
}

/// Indices of every element equal to the maximum. Empty for an empty slice.
///
/// ```
/// use dice_mafia::rules::max_indices;
///
/// assert_eq!(max_indices(&[7, 12, 3, 12]), vec![1, 3]);
/// assert_eq!(max_indices::<u32>(&[]), Vec::<usize>::new());
/// ```
#[must_use]
pub fn max_indices<T: Ord>(values: &[T]) -> Vec<usize> {
    let Some(max) = values.iter().max() else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| *v == max)
        .map(|(i, _)| i)
        .collect()
}

/// Winners over the full roster: everyone holding the best score.
///
/// # Panics
///
/// Panics on an empty roster.
#[must_use]
pub fn determine_winners(players: &[Player]) -> MatchResult {
    let scores: Vec<u32> = players.iter().map(Player::score).collect();
    let best: Vec<PlayerId> = max_indices(&scores)
        .into_iter()
        .map(|i| players[i].id)
        .collect();

    match best.as_slice() {
        [] => panic!("Winners of an empty roster"),
        [single] => MatchResult::Winner(*single),
        _ => MatchResult::Winners(best),
    }
}
