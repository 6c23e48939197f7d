//! Enharmonic resolver
//!
//! Decides which spelling of a note gets printed and which octave goes
//! with it.

use crate::{
    names::{NameKey, NoteNames},
    note::{BaseNote, MusicalNote, NoteModifier, NoteNameStem},
    special_names::{is_placeholder, special_name, SpecialName},
};

/// Which spelling to favour when a note has an enharmonic alternative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintPreference {
    /// Always print the primary spelling.
    #[default]
    Default,
    /// Print the alternative if it is spelled with a flat.
    PreferFlat,
    /// Print the alternative if it is spelled with a sharp.
    PreferSharp,
}

impl PrintPreference {
    /// The modifier an alternative spelling needs for this preference to pick it.
    const fn wanted_modifier(self) -> Option<NoteModifier> {
        match self {
            PrintPreference::Default => None,
            PrintPreference::PreferFlat => Some(NoteModifier::Flat),
            PrintPreference::PreferSharp => Some(NoteModifier::Sharp),
        }
    }
}

/// The spelling chosen for printing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Spelling {
    /// Combined name of an enharmonic pair.
    Special(SpecialName),
    /// Letter and accidental.
    Letter {
        /// Letter
        base: BaseNote,
        /// Accidental
        modifier: NoteModifier,
    },
}

/// Result of [`resolve`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Spelling to print.
    pub spelling: Spelling,
    /// Octave to print with it, `None` if the note has no octave.
    pub octave: Option<i32>,
}

/// Choose the spelling and octave for `note`.
///
/// A combined name that `names` actually provides wins over any preference.
/// Otherwise the alternative spelling is used only when its modifier is the
/// one `preference` asks for, shifting the octave by the note's enharmonic
/// offset. If that shift would overflow `i32`, the primary spelling is kept.
pub fn resolve<N: NoteNames + ?Sized>(
    note: &MusicalNote,
    preference: PrintPreference,
    names: &N,
) -> Resolution {
    if let Some(special) = special_name(&NoteNameStem::from_note(note)) {
        if is_placeholder(&names.name(NameKey::Special(special))) {
            log::debug!("no localised name for {special:?}, using regular spelling");
        } else {
            log::trace!("{note:?} printed as {special:?}");
            return Resolution {
                spelling: Spelling::Special(special),
                octave: note.octave(),
            };
        }
    }

    let use_enharmonic = note.has_enharmonic()
        && preference.wanted_modifier() == Some(note.enharmonic_modifier());

    if use_enharmonic {
        match enharmonic_octave(note) {
            Some(octave) => {
                log::trace!("{note:?} printed with its enharmonic spelling ({preference:?})");
                return Resolution {
                    spelling: Spelling::Letter {
                        base: note.enharmonic_base(),
                        modifier: note.enharmonic_modifier(),
                    },
                    octave,
                };
            }
            None => log::debug!(
                "octave of {note:?} overflows its enharmonic offset, using primary spelling"
            ),
        }
    }

    Resolution {
        spelling: Spelling::Letter {
            base: note.base(),
            modifier: note.modifier(),
        },
        octave: note.octave(),
    }
}

/// Octave of the enharmonic spelling. `None` if the offset overflows `i32`;
/// a note without octave stays without one.
fn enharmonic_octave(note: &MusicalNote) -> Option<Option<i32>> {
    match note.octave() {
        None => Some(None),
        Some(octave) => octave.checked_add(note.enharmonic_octave_offset()).map(Some),
    }
}
