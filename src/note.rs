//! Note identity
//!
//! The value types describing a musical note and its enharmonic alternative.

use std::fmt::Display;
use thiserror::Error;

/// The seven note letters, plus a null-marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseNote {
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
    /// A
    A,
    /// B
    B,
    /// No letter. Marks a missing enharmonic alternative, never rendered.
    None,
}

impl Display for BaseNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseNote::None => Ok(()),
            _ => write!(f, "{self:?}"),
        }
    }
}

/// Accidental applied to a base note.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteModifier {
    /// Natural
    None,
    /// Raised by a semitone
    Sharp,
    /// Lowered by a semitone
    Flat,
}

impl NoteModifier {
    /// Glyph appended to the letter name.
    pub const fn symbol(self) -> &'static str {
        match self {
            NoteModifier::None => "",
            NoteModifier::Sharp => "\u{266F}",
            NoteModifier::Flat => "\u{266D}",
        }
    }
}

impl Display for NoteModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Errors when constructing notes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    /// The primary spelling has no letter.
    #[error("a note needs a base letter, got `BaseNote::None`")]
    MissingBase,
}

/// A note as produced by a note-naming scheme: its primary spelling, an
/// optional octave and the alternative spelling of the same pitch.
///
/// Instances are immutable; the `with_*` methods return modified copies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMusicalNote"))]
pub struct MusicalNote {
    base: BaseNote,
    modifier: NoteModifier,
    octave: Option<i32>,
    enharmonic_base: BaseNote,
    enharmonic_modifier: NoteModifier,
    enharmonic_octave_offset: i32,
}

impl MusicalNote {
    /// Create a note without an enharmonic alternative.
    ///
    /// Returns `Err(NoteError::MissingBase)` if `base` is `BaseNote::None`.
    pub fn new(
        base: BaseNote,
        modifier: NoteModifier,
        octave: Option<i32>,
    ) -> Result<Self, NoteError> {
        if base == BaseNote::None {
            return Err(NoteError::MissingBase);
        }
        Ok(MusicalNote {
            base,
            modifier,
            octave,
            enharmonic_base: BaseNote::None,
            enharmonic_modifier: NoteModifier::None,
            enharmonic_octave_offset: 0,
        })
    }

    /// Attach the alternative spelling of this pitch.
    ///
    /// `octave_offset` is added to the octave when the alternative is printed,
    /// e.g. -1 for C4 spelled as B♯3. Passing `BaseNote::None` clears the
    /// alternative.
    pub fn with_enharmonic(
        mut self,
        base: BaseNote,
        modifier: NoteModifier,
        octave_offset: i32,
    ) -> Self {
        if base == BaseNote::None {
            self.enharmonic_base = BaseNote::None;
            self.enharmonic_modifier = NoteModifier::None;
            self.enharmonic_octave_offset = 0;
        } else {
            self.enharmonic_base = base;
            self.enharmonic_modifier = modifier;
            self.enharmonic_octave_offset = octave_offset;
        }
        self
    }

    /// Same note in another octave.
    pub fn with_octave(mut self, octave: Option<i32>) -> Self {
        self.octave = octave;
        self
    }

    /// Same note without an octave.
    pub fn without_octave(self) -> Self {
        self.with_octave(None)
    }

    /// Letter of the primary spelling.
    pub fn base(&self) -> BaseNote {
        self.base
    }

    /// Accidental of the primary spelling.
    pub fn modifier(&self) -> NoteModifier {
        self.modifier
    }

    /// Octave index, `None` if the note is not tied to an octave.
    pub fn octave(&self) -> Option<i32> {
        self.octave
    }

    /// Letter of the alternative spelling, `BaseNote::None` if there is none.
    pub fn enharmonic_base(&self) -> BaseNote {
        self.enharmonic_base
    }

    /// Accidental of the alternative spelling.
    pub fn enharmonic_modifier(&self) -> NoteModifier {
        self.enharmonic_modifier
    }

    /// Octave correction applied with the alternative spelling.
    pub fn enharmonic_octave_offset(&self) -> i32 {
        self.enharmonic_octave_offset
    }

    /// Whether an alternative spelling exists.
    pub fn has_enharmonic(&self) -> bool {
        self.enharmonic_base != BaseNote::None
    }
}

/// Unchecked field layout of a serialized [`MusicalNote`]. Deserialization
/// goes through the constructors so the same rules apply.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMusicalNote {
    base: BaseNote,
    modifier: NoteModifier,
    octave: Option<i32>,
    enharmonic_base: BaseNote,
    enharmonic_modifier: NoteModifier,
    enharmonic_octave_offset: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMusicalNote> for MusicalNote {
    type Error = NoteError;

    fn try_from(raw: RawMusicalNote) -> Result<Self, Self::Error> {
        Ok(MusicalNote::new(raw.base, raw.modifier, raw.octave)?.with_enharmonic(
            raw.enharmonic_base,
            raw.enharmonic_modifier,
            raw.enharmonic_octave_offset,
        ))
    }
}

/// Spelling pair identifying a note regardless of which of the two
/// spellings is the primary one.
///
/// `NoteNameStem::new(B, Flat, A, Sharp) == NoteNameStem::new(A, Sharp, B, Flat)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NoteNameStem {
    first: (BaseNote, NoteModifier),
    second: (BaseNote, NoteModifier),
}

impl NoteNameStem {
    /// Build a stem from two spellings, stored in canonical order.
    pub const fn new(
        base: BaseNote,
        modifier: NoteModifier,
        enharmonic_base: BaseNote,
        enharmonic_modifier: NoteModifier,
    ) -> Self {
        let primary = (base, modifier);
        let alternative = match enharmonic_base {
            BaseNote::None => (BaseNote::None, NoteModifier::None),
            _ => (enharmonic_base, enharmonic_modifier),
        };
        if spelling_key(primary) <= spelling_key(alternative) {
            NoteNameStem { first: primary, second: alternative }
        } else {
            NoteNameStem { first: alternative, second: primary }
        }
    }

    /// Stem of a note's primary and enharmonic spelling.
    pub const fn from_note(note: &MusicalNote) -> Self {
        Self::new(
            note.base,
            note.modifier,
            note.enharmonic_base,
            note.enharmonic_modifier,
        )
    }
}

// `Ord` is not usable in const fn, so order spellings through their discriminants.
const fn spelling_key((base, modifier): (BaseNote, NoteModifier)) -> u8 {
    (base as u8) * 3 + modifier as u8
}
