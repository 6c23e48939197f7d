//! Note printer
//!
//! Composes display text for a [`MusicalNote`] from the resolver's choice and
//! a [`NoteNames`] source.

use std::fmt::Display;

use crate::{
    names::{EnglishNames, NameKey, NoteNames},
    note::MusicalNote,
    resolver::{resolve, PrintPreference, Spelling},
};

/// Note text and octave as separate parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    /// Letter name with accidental glyph, or a combined name.
    pub note: String,
    /// Octave belonging to the chosen spelling, `None` if the note has none.
    pub octave_index: Option<i32>,
}

impl RenderedNote {
    /// Octave digits, empty if there is no octave.
    pub fn octave(&self) -> String {
        self.octave_index.map(|o| o.to_string()).unwrap_or_default()
    }
}

/// Byte range of the octave digits inside [`RenderedText::text`], to be shown
/// as a small superscript by the presentation layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OctaveSpan {
    /// Byte offset of the first octave character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl OctaveSpan {
    /// The span as a range usable for slicing the text.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Final note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    /// The composed text, e.g. `"C♯4"`.
    pub text: String,
    /// Where the octave sits, set only for styled output with an octave.
    pub octave_span: Option<OctaveSpan>,
}

impl Display for RenderedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builder for [`NotePrinter`]
#[derive(Debug, Clone)]
pub struct NotePrinterBuilder<N = EnglishNames> {
    names: N,
    preference: PrintPreference,
    with_octave: bool,
    styled: bool,
}

impl NotePrinterBuilder<EnglishNames> {
    /// Start with English names, `PrintPreference::Default`, octave shown,
    /// unstyled output.
    pub fn new() -> Self {
        NotePrinterBuilder {
            names: EnglishNames,
            preference: PrintPreference::Default,
            with_octave: true,
            styled: false,
        }
    }
}

impl Default for NotePrinterBuilder<EnglishNames> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoteNames> NotePrinterBuilder<N> {
    /// Use another source of localised names.
    pub fn names<M: NoteNames>(self, names: M) -> NotePrinterBuilder<M> {
        NotePrinterBuilder {
            names,
            preference: self.preference,
            with_octave: self.with_octave,
            styled: self.styled,
        }
    }

    /// Set the default enharmonic preference.
    pub fn preference(mut self, preference: PrintPreference) -> Self {
        self.preference = preference;
        self
    }

    /// Print octaves by default.
    pub fn with_octave(mut self, value: bool) -> Self {
        self.with_octave = value;
        self
    }

    /// Mark octave spans by default.
    pub fn styled(mut self, value: bool) -> Self {
        self.styled = value;
        self
    }

    /// Build the `NotePrinter`
    pub fn build(self) -> NotePrinter<N> {
        NotePrinter {
            names: self.names,
            preference: self.preference,
            with_octave: self.with_octave,
            styled: self.styled,
        }
    }
}

/// Renders notes with a fixed set of localised names.
///
/// Rendering is a pure function of the note and the arguments; the printer
/// holds no mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct NotePrinter<N = EnglishNames> {
    names: N,
    preference: PrintPreference,
    with_octave: bool,
    styled: bool,
}

impl NotePrinter<EnglishNames> {
    /// Return a builder to customize names and defaults
    pub fn builder() -> NotePrinterBuilder<EnglishNames> {
        NotePrinterBuilder::new()
    }

    /// English printer with default settings.
    pub fn new() -> Self {
        NotePrinterBuilder::new().build()
    }
}

impl Default for NotePrinter<EnglishNames> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoteNames> NotePrinter<N> {
    /// The localised names in use.
    pub fn names(&self) -> &N {
        &self.names
    }

    /// Note text and octave of `note` under `preference`, without joining them.
    pub fn substrings(&self, note: &MusicalNote, preference: PrintPreference) -> RenderedNote {
        let resolution = resolve(note, preference, &self.names);
        let text = match resolution.spelling {
            Spelling::Special(special) => self.names.name(NameKey::Special(special)).into_owned(),
            Spelling::Letter { base, modifier } => {
                let mut text = self.names.name(NameKey::Base(base)).into_owned();
                text.push_str(modifier.symbol());
                text
            }
        };
        RenderedNote {
            note: text,
            octave_index: resolution.octave,
        }
    }

    /// Render `note`.
    ///
    /// The octave is appended only if `include_octave` is set and the note has
    /// one. With `styled`, the returned span marks the octave digits.
    pub fn render(
        &self,
        note: &MusicalNote,
        preference: PrintPreference,
        include_octave: bool,
        styled: bool,
    ) -> RenderedText {
        let RenderedNote { note: mut text, octave_index } = self.substrings(note, preference);
        let mut octave_span = None;

        if let (true, Some(octave)) = (include_octave, octave_index) {
            let start = text.len();
            text.push_str(&octave.to_string());
            if styled {
                octave_span = Some(OctaveSpan {
                    start,
                    len: text.len() - start,
                });
            }
        }

        RenderedText { text, octave_span }
    }

    /// Plain text of `note`.
    pub fn format(
        &self,
        note: &MusicalNote,
        preference: PrintPreference,
        include_octave: bool,
    ) -> String {
        self.render(note, preference, include_octave, false).text
    }

    /// Render `note` with the printer's configured defaults.
    pub fn print(&self, note: &MusicalNote) -> RenderedText {
        self.render(note, self.preference, self.with_octave, self.styled)
    }

    /// `Display` adapter using the configured defaults.
    pub fn display<'a>(&'a self, note: &'a MusicalNote) -> NoteDisplay<'a, N> {
        NoteDisplay { printer: self, note }
    }
}

/// Returned by [`NotePrinter::display`].
pub struct NoteDisplay<'a, N> {
    printer: &'a NotePrinter<N>,
    note: &'a MusicalNote,
}

impl<N: NoteNames> Display for NoteDisplay<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let printer = self.printer;
        let text = printer.render(self.note, printer.preference, printer.with_octave, false);
        f.write_str(&text.text)
    }
}
