//! # note_printer
//!
//! Turn musical notes into display text: pick between a note's primary
//! spelling, its enharmonic alternative and a language's combined name, and
//! attach the matching octave. Also converts tuner settings slider positions
//! into physical values.
//!
//! ## Example
//! ```rust
//! use note_printer::{BaseNote, MusicalNote, NoteModifier, NotePrinter, PrintPreference};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) A note and its alternative spelling
//!     let c4 = MusicalNote::new(BaseNote::C, NoteModifier::None, Some(4))?
//!         .with_enharmonic(BaseNote::B, NoteModifier::Sharp, -1);
//!
//!     // 2) A printer with English names
//!     let printer = NotePrinter::builder()
//!         .preference(PrintPreference::PreferSharp)
//!         .build();
//!
//!     // 3) Render, marking the octave for superscript display
//!     let rendered = printer.render(&c4, PrintPreference::PreferSharp, true, true);
//!     assert_eq!(rendered.text, "B\u{266F}3");
//!     assert_eq!(printer.print(&c4).text, "B\u{266F}3");
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `serde`: derives `Serialize`/`Deserialize` for notes, preferences and
//!   setting kinds

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Note identity types.
pub use note::{BaseNote, MusicalNote, NoteError, NoteModifier, NoteNameStem};

/// Combined names for enharmonic pairs.
pub use special_names::{is_placeholder, special_name, SpecialName};

/// Localised names.
pub use names::{EnglishNames, GermanNames, NameKey, NameTable, NoteNames};

/// Spelling resolution.
pub use resolver::{resolve, PrintPreference, Resolution, Spelling};

/// Text rendering.
pub use printer::{
    NoteDisplay, NotePrinter, NotePrinterBuilder, OctaveSpan, RenderedNote, RenderedText,
};

/// Settings slider conversions.
pub use settings::{index_to_physical_value, try_index_to_physical_value, SettingKind, SettingsError};

/// Musical note value types.
pub mod note;

/// Special name table.
pub mod special_names;

/// Localised note names.
pub mod names;

/// Enharmonic resolution.
pub mod resolver;

/// Note text rendering.
pub mod printer;

/// Settings slider conversions.
pub mod settings;
