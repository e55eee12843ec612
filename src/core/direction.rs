//! Direction of play around the table.

use serde::{Deserialize, Serialize};

/// Direction of play, fixed for a whole match.
///
/// Serialized as `1` (seating order) or `-1` (reverse seating order).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    /// Increasing seat numbers (+1).
    #[default]
    Forward,
    /// Decreasing seat numbers (-1).
    Backward,
}

impl Direction {
    /// Signed step: `1` or `-1`.
    #[must_use]
    pub const fn step(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Parse the literal answers `"1"` and `"-1"`. Anything else is rejected.
    ///
    /// ```
    /// use dice_mafia::core::Direction;
    ///
    /// assert_eq!(Direction::parse("-1"), Some(Direction::Backward));
    /// assert_eq!(Direction::parse("+1"), None);
    /// ```
    #[must_use]
    pub fn parse(answer: &str) -> Option<Self> {
        match answer {
            "1" => Some(Direction::Forward),
            "-1" => Some(Direction::Backward),
            _ => None,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(step: i8) -> Result<Self, Self::Error> {
        match step {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            other => Err(format!("direction must be 1 or -1, got {other}")),
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> i8 {
        direction.step()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.step())
    }
}
