//! Exact `(id, package)` lookup of advisories in the allowlist.

use auditgate_types::{Advisory, AllowlistEntry};
use std::collections::BTreeMap;

/// Index over allowlist entries. For repeated keys the first entry in list order wins.
#[derive(Clone, Debug)]
pub struct AllowlistIndex<'a> {
    entries: &'a [AllowlistEntry],
    by_key: BTreeMap<(&'a str, &'a str), usize>,
}

/// A matched entry together with its position in the allowlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryMatch<'a> {
    pub index: usize,
    pub entry: &'a AllowlistEntry,
}

impl<'a> AllowlistIndex<'a> {
    pub fn new(entries: &'a [AllowlistEntry]) -> Self {
        let mut by_key = BTreeMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_key
                .entry((entry.id.as_str(), entry.package.as_str()))
                .or_insert(idx);
        }
        Self { entries, by_key }
    }

    /// Case-sensitive, exact match on both id and package.
    pub fn lookup(&self, advisory: &Advisory) -> Option<EntryMatch<'a>> {
        let index = *self
            .by_key
            .get(&(advisory.id.as_str(), advisory.package.as_str()))?;
        Some(EntryMatch {
            index,
            entry: &self.entries[index],
        })
    }
}
