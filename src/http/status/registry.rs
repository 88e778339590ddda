use super::{invalid_code, table, Entry};
use crate::http::Result;
use std::collections::hash_map::{self, HashMap};
use std::sync::OnceLock;
use tracing::{debug, trace};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, indexed on first use.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry::new(table::ENTRIES))
}

/// The status table together with its code index.
///
/// Codes may repeat across entries; the index keeps the first entry declared for
/// each code and later ones are only reachable through their [`Status`](super::Status)
/// constant.
#[derive(Debug)]
pub struct Registry {
    entries: &'static [Entry],
    by_code: HashMap<u16, usize>,
}

impl Registry {
    /// Panics if an entry has an empty reason phrase.
    pub(crate) fn new(entries: &'static [Entry]) -> Self {
        let mut by_code = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            assert!(
                !entry.reason().is_empty(),
                "status {} has no reason phrase",
                entry.symbol()
            );
            match by_code.entry(entry.code()) {
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                hash_map::Entry::Occupied(first) => trace!(
                    code = entry.code(),
                    shadowed = entry.symbol(),
                    by = entries[*first.get()].symbol(),
                    "status code already registered"
                ),
            }
        }
        debug!(
            entries = entries.len(),
            codes = by_code.len(),
            "status registry initialized"
        );

        Self { entries, by_code }
    }

    pub fn resolve(&self, code: i32) -> Result<&'static Entry> {
        let entries = self.entries;
        u16::try_from(code)
            .ok()
            .and_then(|c| self.by_code.get(&c))
            .map(|&i| &entries[i])
            .ok_or_else(|| invalid_code(code))
    }
    pub fn contains(&self, code: i32) -> bool {
        u16::try_from(code).map_or(false, |c| self.by_code.contains_key(&c))
    }
    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }
    pub fn iter(&self) -> std::slice::Iter<'static, Entry> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Entries hidden from code lookup by an earlier entry with the same code.
    pub fn shadowed(&self) -> impl Iterator<Item = &'static Entry> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, entry)| self.by_code.get(&entry.code()) != Some(i))
            .map(|(_, entry)| entry)
    }
}

impl IntoIterator for &Registry {
    type Item = &'static Entry;
    type IntoIter = std::slice::Iter<'static, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
