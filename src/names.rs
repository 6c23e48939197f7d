//! Localised note names
//!
//! Letter names and special names come from a [`NoteNames`] implementation,
//! keyed by [`NameKey`]. Two languages are built in; [`NameTable`] covers
//! anything else.

use std::{borrow::Cow, collections::HashMap};

use crate::{note::BaseNote, special_names::SpecialName};

/// Symbolic key of a localised name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NameKey {
    /// Letter name of a base note.
    Base(BaseNote),
    /// Combined name of an enharmonic pair.
    Special(SpecialName),
}

/// Source of localised note names.
///
/// Must return a string for every key. Special names a language does not use
/// should map to `""` or `"-"`.
pub trait NoteNames {
    /// Localised text for `key`.
    fn name(&self, key: NameKey) -> Cow<'_, str>;
}

impl<T: NoteNames + ?Sized> NoteNames for &T {
    fn name(&self, key: NameKey) -> Cow<'_, str> {
        (**self).name(key)
    }
}

/// English letter names, no combined names.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EnglishNames;

impl NoteNames for EnglishNames {
    fn name(&self, key: NameKey) -> Cow<'_, str> {
        Cow::Borrowed(english(key))
    }
}

/// German letter names: B is written "H" and A♯/B♭ is written "B".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GermanNames;

impl NoteNames for GermanNames {
    fn name(&self, key: NameKey) -> Cow<'_, str> {
        Cow::Borrowed(match key {
            NameKey::Base(BaseNote::B) => "H",
            NameKey::Special(SpecialName::ASharpBFlat) => "B",
            other => english(other),
        })
    }
}

fn english(key: NameKey) -> &'static str {
    match key {
        NameKey::Base(BaseNote::C) => "C",
        NameKey::Base(BaseNote::D) => "D",
        NameKey::Base(BaseNote::E) => "E",
        NameKey::Base(BaseNote::F) => "F",
        NameKey::Base(BaseNote::G) => "G",
        NameKey::Base(BaseNote::A) => "A",
        NameKey::Base(BaseNote::B) => "B",
        NameKey::Base(BaseNote::None) => "",
        NameKey::Special(SpecialName::ASharpBFlat) => crate::special_names::PLACEHOLDER,
    }
}

/// Name set filled at runtime, e.g. from a translation file. Keys that were
/// never set fall back to the English names.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<NameKey, String>,
}

impl NameTable {
    /// Create an empty table (all English).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for `key`, consuming and returning the table.
    pub fn with(mut self, key: NameKey, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Set the text for `key`.
    pub fn insert(&mut self, key: NameKey, text: impl Into<String>) {
        self.names.insert(key, text.into());
    }
}

impl NoteNames for NameTable {
    fn name(&self, key: NameKey) -> Cow<'_, str> {
        match self.names.get(&key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(english(key)),
        }
    }
}
