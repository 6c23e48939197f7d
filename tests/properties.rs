//! Property tests for spelling resolution.

use note_printer::{
    resolve, BaseNote, EnglishNames, MusicalNote, NameKey, NameTable, NoteModifier, NotePrinter,
    PrintPreference, SpecialName, Spelling,
};
use proptest::prelude::*;

fn letter() -> impl Strategy<Value = BaseNote> {
    prop_oneof![
        Just(BaseNote::C),
        Just(BaseNote::D),
        Just(BaseNote::E),
        Just(BaseNote::F),
        Just(BaseNote::G),
        Just(BaseNote::A),
        Just(BaseNote::B),
    ]
}

fn enharmonic_letter() -> impl Strategy<Value = BaseNote> {
    prop_oneof![letter(), Just(BaseNote::None)]
}

fn modifier() -> impl Strategy<Value = NoteModifier> {
    prop_oneof![
        Just(NoteModifier::None),
        Just(NoteModifier::Sharp),
        Just(NoteModifier::Flat),
    ]
}

fn preference() -> impl Strategy<Value = PrintPreference> {
    prop_oneof![
        Just(PrintPreference::Default),
        Just(PrintPreference::PreferFlat),
        Just(PrintPreference::PreferSharp),
    ]
}

prop_compose! {
    fn musical_note()(
        base in letter(),
        accidental in modifier(),
        octave in proptest::option::of(-2i32..10),
        enharmonic_base in enharmonic_letter(),
        enharmonic_accidental in modifier(),
        offset in -1i32..=1,
    ) -> MusicalNote {
        MusicalNote::new(base, accidental, octave)
            .unwrap()
            .with_enharmonic(enharmonic_base, enharmonic_accidental, offset)
    }
}

fn is_a_sharp_b_flat(note: &MusicalNote) -> bool {
    let primary = (note.base(), note.modifier());
    let alternative = (note.enharmonic_base(), note.enharmonic_modifier());
    let a_sharp = (BaseNote::A, NoteModifier::Sharp);
    let b_flat = (BaseNote::B, NoteModifier::Flat);
    (primary == a_sharp && alternative == b_flat) || (primary == b_flat && alternative == a_sharp)
}

proptest! {
    #[test]
    fn without_alternative_primary_is_kept(note in musical_note(), pref in preference()) {
        let note = note.with_enharmonic(BaseNote::None, NoteModifier::None, 0);
        let resolution = resolve(&note, pref, &EnglishNames);
        prop_assert_eq!(
            resolution.spelling,
            Spelling::Letter { base: note.base(), modifier: note.modifier() }
        );
        prop_assert_eq!(resolution.octave, note.octave());
    }

    #[test]
    fn combined_name_takes_precedence(octave in proptest::option::of(-2i32..10), pref in preference()) {
        let names = NameTable::new().with(NameKey::Special(SpecialName::ASharpBFlat), "B");
        let note = MusicalNote::new(BaseNote::A, NoteModifier::Sharp, octave)
            .unwrap()
            .with_enharmonic(BaseNote::B, NoteModifier::Flat, 0);
        let resolution = resolve(&note, pref, &names);
        prop_assert_eq!(resolution.spelling, Spelling::Special(SpecialName::ASharpBFlat));
        prop_assert_eq!(resolution.octave, octave);
    }

    #[test]
    fn missing_octave_propagates(note in musical_note(), pref in preference()) {
        let note = note.without_octave();
        let printer = NotePrinter::new();
        prop_assert_eq!(resolve(&note, pref, &EnglishNames).octave, None);
        prop_assert_eq!(printer.format(&note, pref, true), printer.format(&note, pref, false));
    }

    #[test]
    fn octave_follows_chosen_spelling(note in musical_note(), pref in preference()) {
        prop_assume!(!is_a_sharp_b_flat(&note) && note.octave().is_some());
        let octave = note.octave().unwrap();
        let resolution = resolve(&note, pref, &EnglishNames);
        let enharmonic = Spelling::Letter {
            base: note.enharmonic_base(),
            modifier: note.enharmonic_modifier(),
        };
        let switched = note.has_enharmonic()
            && matches!(
                (pref, note.enharmonic_modifier()),
                (PrintPreference::PreferFlat, NoteModifier::Flat)
                    | (PrintPreference::PreferSharp, NoteModifier::Sharp)
            );
        if switched {
            prop_assert_eq!(resolution.spelling, enharmonic);
            prop_assert_eq!(resolution.octave, Some(octave + note.enharmonic_octave_offset()));
        } else {
            prop_assert_eq!(
                resolution.spelling,
                Spelling::Letter { base: note.base(), modifier: note.modifier() }
            );
            prop_assert_eq!(resolution.octave, Some(octave));
        }
    }

    #[test]
    fn formatting_is_idempotent(note in musical_note(), pref in preference()) {
        let printer = NotePrinter::new();
        prop_assert_eq!(printer.format(&note, pref, true), printer.format(&note, pref, true));
    }

    #[test]
    fn styled_span_covers_octave(note in musical_note(), pref in preference()) {
        let rendered = NotePrinter::new().render(&note, pref, true, true);
        let octave = resolve(&note, pref, &EnglishNames).octave;
        match (rendered.octave_span, octave) {
            (Some(span), Some(octave)) => {
                prop_assert_eq!(&rendered.text[span.range()], octave.to_string());
                prop_assert_eq!(span.start + span.len, rendered.text.len());
            }
            (None, None) => {}
            other => prop_assert!(false, "span/octave mismatch: {:?}", other),
        }
    }
}
