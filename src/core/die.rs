//! Dice: face values, the die value type and die-roll sources.
//!
//! A `Die` is either unrolled (freshly handed out) or shows a `Face`.
//! Faces come from a `DieRoller`, the seam between the engine and its
//! source of randomness.

use serde::{Deserialize, Serialize};

/// A die face, always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    /// Number of faces on a die.
    pub const COUNT: usize = 6;

    /// Face removed from play when rolled.
    pub const ONE: Face = Face(1);

    /// Face passed to the next player when rolled.
    pub const SIX: Face = Face(6);

    /// Create a face, `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 6 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Face for a 0-based index in `0..6`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "Face index out of range: {index}");
        Self(index as u8 + 1)
    }

    /// The pip value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Unicode die glyph for this face.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self.0 {
            1 => '⚀',
            2 => '⚁',
            3 => '⚂',
            4 => '⚃',
            5 => '⚄',
            _ => '⚅',
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::new(value).ok_or_else(|| format!("die face must be 1-6, got {value}"))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single die. Unrolled until its first roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    face: Option<Face>,
}

impl Die {
    /// A fresh, unrolled die.
    #[must_use]
    pub const fn new() -> Self {
        Self { face: None }
    }

    /// A die already showing `face`.
    #[must_use]
    pub const fn showing(face: Face) -> Self {
        Self { face: Some(face) }
    }

    /// Roll this die, replacing its face.
    pub fn roll(&mut self, roller: &mut dyn DieRoller) -> Face {
        let face = roller.roll_face();
        self.face = Some(face);
        face
    }

    /// Current face, `None` if never rolled.
    #[must_use]
    pub const fn face(&self) -> Option<Face> {
        self.face
    }

    /// Pips shown, 0 for an unrolled die.
    #[must_use]
    pub fn pips(&self) -> u32 {
        self.face.map_or(0, |f| u32::from(f.value()))
    }

    /// Check whether the die shows `face`.
    #[must_use]
    pub fn shows(&self, face: Face) -> bool {
        self.face == Some(face)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.face {
            Some(face) => write!(f, "{face}"),
            None => write!(f, "·"),
        }
    }
}

/// Source of die faces.
///
/// Implementations must return uniformly distributed faces for real play;
/// scripted implementations exist for tests and demos.
pub trait DieRoller {
    /// Produce the next face.
    fn roll_face(&mut self) -> Face;
}

impl<R: DieRoller + ?Sized> DieRoller for Box<R> {
    fn roll_face(&mut self) -> Face {
        (**self).roll_face()
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// ```
/// use dice_mafia::core::{DieRoller, ScriptedRoller};
///
/// let mut roller = ScriptedRoller::from_values(&[6, 1]);
/// assert_eq!(roller.roll_face().value(), 6);
/// assert_eq!(roller.roll_face().value(), 1);
/// assert_eq!(roller.roll_face().value(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRoller {
    faces: Vec<Face>,
    index: usize,
}

impl ScriptedRoller {
    /// Create a roller from faces.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty.
    #[must_use]
    pub fn new(faces: Vec<Face>) -> Self {
        assert!(!faces.is_empty(), "Scripted roller needs at least one face");
        Self { faces, index: 0 }
    }

    /// Create a roller from raw pip values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or holds a value outside `1..=6`.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Self {
        let faces = values
            .iter()
            .map(|&v| Face::new(v).unwrap_or_else(|| panic!("invalid scripted face {v}")))
            .collect();
        Self::new(faces)
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.index
    }
}

impl DieRoller for ScriptedRoller {
    fn roll_face(&mut self) -> Face {
        let face = self.faces[self.index % self.faces.len()];
        self.index += 1;
        face
    }
}
