//! Players, seat identifiers and per-seat storage.
//!
//! ## PlayerId
//!
//! Seat number in `1..=N`, assigned in seating order.
//!
//! ## Player
//!
//! Identity, dice multiset and score. All dice operations are total:
//! removing faces that are not present removes nothing.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::die::{Die, DieRoller, Face};

/// Seat identifier. Seat numbers are 1-based: the first seat is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// 0-based position of this seat in the roster.
    ///
    /// # Panics
    ///
    /// Panics for `PlayerId(0)`, which never names a seat.
    #[must_use]
    pub const fn index(self) -> usize {
        assert!(self.0 > 0, "PlayerId is 1-based");
        self.0 as usize - 1
    }

    /// Seat for a 0-based roster position.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// Iterate over all seats of a match with `player_count` players.
    ///
    /// ```
    /// use dice_mafia::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(PlayerId::from_index)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who controls a seat. Reporting only; behaviour comes from the seat's agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Computer,
}

/// Dice held by one player. Inline up to 8 dice.
pub type Dice = SmallVec<[Die; 8]>;

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub kind: PlayerKind,
    dice: Dice,
    score: u32,
}

impl Player {
    /// Create a player with no dice.
    #[must_use]
    pub fn new(id: PlayerId, kind: PlayerKind, score: u32) -> Self {
        Self {
            id,
            kind,
            dice: Dice::new(),
            score,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check whether the player can still act (score above zero).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.score > 0
    }

    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Faces currently shown, skipping unrolled dice.
    #[must_use]
    pub fn faces(&self) -> Vec<Face> {
        self.dice.iter().filter_map(Die::face).collect()
    }

    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    /// Roll every held die.
    pub fn roll_all_dice(&mut self, roller: &mut dyn DieRoller) {
        for die in &mut self.dice {
            die.roll(roller);
        }
    }

    /// Count dice currently showing `face`.
    #[must_use]
    pub fn count_faces(&self, face: Face) -> usize {
        self.dice.iter().filter(|d| d.shows(face)).count()
    }

    /// Discard every die showing `face`. Returns how many were removed.
    pub fn remove_dice(&mut self, face: Face) -> usize {
        let before = self.dice.len();
        self.dice.retain(|d| !d.shows(face));
        before - self.dice.len()
    }

    /// Discard exactly one die showing `face`. Returns `false` if none shows it.
    pub fn remove_one_die(&mut self, face: Face) -> bool {
        match self.dice.iter().position(|d| d.shows(face)) {
            Some(pos) => {
                self.dice.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Receive one fresh, unrolled die.
    pub fn add_die(&mut self) {
        self.dice.push(Die::new());
    }

    /// Replace all dice with `count` fresh dice.
    pub fn reset_dice(&mut self, count: usize) {
        self.dice.clear();
        self.dice.extend(std::iter::repeat(Die::new()).take(count));
    }

    /// Replace all dice with dice showing the given faces.
    pub fn set_dice(&mut self, faces: &[Face]) {
        self.dice.clear();
        self.dice.extend(faces.iter().copied().map(Die::showing));
    }

    /// Sum of shown pips; 0 when empty or unrolled.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.dice.iter().map(Die::pips).sum()
    }

    /// True when the player holds no dice, the round-ending condition.
    #[must_use]
    pub fn has_no_dice(&self) -> bool {
        self.dice.is_empty()
    }

    /// Add points to the score.
    pub fn apply_score_delta(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Lose up to `points`, never going below zero. Returns the points actually lost.
    pub fn apply_loss(&mut self, points: u32) -> u32 {
        let lost = points.min(self.score);
        self.score -= lost;
        lost
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for die in &self.dice {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{die}")?;
            first = false;
        }
        Ok(())
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat, in seating order.
///
/// ## Example
///
/// ```
/// use dice_mafia::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(4, |_| 100);
/// assert_eq!(scores[PlayerId::new(1)], 100);
///
/// scores[PlayerId::new(2)] = 82;
/// assert_eq!(scores[PlayerId::new(2)], 82);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Wrap values already in seating order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
