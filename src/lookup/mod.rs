//! Immutable key→text tables consulted during extraction.
//!
//! - Localization: text handle → localized string
//! - Tag names: tag GUID → tag name
//! - Level names: level identifier → localized level name
//!
//! Each table is built once per run by a flat scan. Lookups that miss fall
//! back to the raw key, so callers always get a printable string.

mod level_names;
mod localization;
mod tags;

use std::collections::HashMap;

pub use level_names::load_level_names;
pub use localization::load_localization;
pub use tags::{load_tag_names, tag_names_from_document};

/// A flat key→string mapping. Later inserts win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// Look up `key`, returning the key itself when it is not in the table.
    pub fn get_or_raw(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// The lookup tables the entity extractors need.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub localization: LookupTable,
    pub tags: LookupTable,
}

impl Lookups {
    pub fn new(localization: LookupTable, tags: LookupTable) -> Self {
        Self { localization, tags }
    }

    /// Localized text for a handle, or the handle itself.
    pub fn text(&self, handle: &str) -> String {
        self.localization.get_or_raw(handle)
    }

    /// Tag name for a tag GUID, or the GUID itself.
    pub fn tag(&self, guid: &str) -> String {
        self.tags.get_or_raw(guid)
    }
}
