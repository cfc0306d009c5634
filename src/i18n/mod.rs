//! Internationalization (i18n) module.
//!
//! Holds the bundled English/Spanish defaults, the dot-path codec used to
//! move between trees and storage rows, the override merge and the resolver
//! that picks the string to display.

mod language;
mod merge;
mod preference;
mod resolve;
mod table;
mod tree;

pub use language::Language;
pub use merge::merge;
pub use preference::{LanguagePreference, MemoryStore, STORAGE_KEY};
pub use resolve::resolve;
pub use table::Translations;
