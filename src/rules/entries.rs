//! Effective entry set
//!
//! Merges the `all`, `t` and `ct` model tables into one list of
//! `(key, model, side)` entries. Sections are applied in that fixed order and
//! every pair replaces an earlier entry with an equal key on the same side,
//! so side-specific tables override `all` and later declarations override
//! earlier ones.

use crate::config::{ModelSections, ModelTable};
use crate::rules::key::KeyMatcher;
use crate::rules::side::Side;
use std::collections::HashMap;
use tracing::trace;

/// One default-model rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    pub key: KeyMatcher,
    /// Model name; empty means "explicitly no default"
    pub value: String,
    pub side: Side,
}

impl ModelEntry {
    pub fn new(key: KeyMatcher, value: impl Into<String>, side: Side) -> Self {
        Self {
            key,
            value: value.into(),
            side,
        }
    }
}

/// Merged, override-resolved entries in build order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: Vec<ModelEntry>,
}

impl EntrySet {
    /// Build the set from the three model tables
    pub fn from_sections(sections: &ModelSections) -> Self {
        EntrySetBuilder::build(
            sections.all.as_ref(),
            sections.t.as_ref(),
            sections.ct.as_ref(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelEntry> {
        self.entries.iter()
    }

    /// Entries for one side, in build order
    pub fn for_side(&self, side: Side) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter().filter(move |e| e.side == side)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a ModelEntry;
    type IntoIter = std::slice::Iter<'a, ModelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates entries with remove-then-append semantics
///
/// Slots of replaced entries are cleared rather than shifted, and an index
/// keyed by `(side, key)` finds the live slot for a key in O(1).
#[derive(Debug, Default)]
pub struct EntrySetBuilder {
    slots: Vec<Option<ModelEntry>>,
    index: HashMap<(Side, KeyMatcher), usize>,
}

impl EntrySetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the sections in `all`, `t`, `ct` order
    pub fn build(
        all: Option<&ModelTable>,
        t: Option<&ModelTable>,
        ct: Option<&ModelTable>,
    ) -> EntrySet {
        let mut builder = Self::new();

        if let Some(all) = all {
            for (raw_key, model) in all.iter() {
                let key = KeyMatcher::parse(raw_key);
                builder.insert(key.clone(), model, Side::CT);
                builder.insert(key, model, Side::T);
            }
        }
        if let Some(t) = t {
            builder.apply_side(t, Side::T);
        }
        if let Some(ct) = ct {
            builder.apply_side(ct, Side::CT);
        }

        builder.finish()
    }

    fn apply_side(&mut self, table: &ModelTable, side: Side) {
        for (raw_key, model) in table.iter() {
            self.insert(KeyMatcher::parse(raw_key), model, side);
        }
    }

    /// Append an entry, dropping any earlier entry with an equal key on the
    /// same side
    pub fn insert(&mut self, key: KeyMatcher, value: impl Into<String>, side: Side) {
        let slot = self.slots.len();
        if let Some(previous) = self.index.insert((side, key.clone()), slot) {
            trace!(key = %key, side = %side, "Overriding earlier entry");
            self.slots[previous] = None;
        }
        self.slots.push(Some(ModelEntry::new(key, value, side)));
    }

    pub fn finish(self) -> EntrySet {
        EntrySet {
            entries: self.slots.into_iter().flatten().collect(),
        }
    }
}
