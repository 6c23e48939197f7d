//! Special note names
//!
//! Some languages write both spellings of an enharmonic pair with a single
//! name (German "B" for A♯/B♭). This module maps such pairs to a symbolic
//! key; whether a language actually uses the combined name is up to its
//! [`NoteNames`](crate::NoteNames) implementation.

use crate::note::{BaseNote, NoteModifier, NoteNameStem};

/// Enharmonic pairs which may carry a combined name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialName {
    /// A sharp / B flat
    ASharpBFlat,
}

/// One entry per pair. Stems are normalised, so either orientation of a note
/// matches its entry.
const SPECIAL_NAMES: &[(NoteNameStem, SpecialName)] = &[(
    NoteNameStem::new(BaseNote::B, NoteModifier::Flat, BaseNote::A, NoteModifier::Sharp),
    SpecialName::ASharpBFlat,
)];

/// Localised text meaning "this language has no combined name".
pub const PLACEHOLDER: &str = "-";

/// Look up the combined name key for a spelling pair.
pub fn special_name(stem: &NoteNameStem) -> Option<SpecialName> {
    SPECIAL_NAMES
        .iter()
        .find(|(entry, _)| entry == stem)
        .map(|&(_, name)| name)
}

/// Whether localised special-name text should be ignored.
///
/// An empty string (missing translation) and `"-"` (deliberately no combined
/// name) both fall back to the regular spelling.
pub fn is_placeholder(text: &str) -> bool {
    text.is_empty() || text == PLACEHOLDER
}
