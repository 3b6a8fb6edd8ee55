//! Zone entries with count bookkeeping.
//!
//! `ZoneList` is an ordered list of `(Card, count)` keyed by card id:
//! - at most one entry per id
//! - counts are always positive; an entry reaching 0 is removed
//! - count arithmetic saturates at `u32::MAX`
//!
//! Deserialization goes through `FromIterator`, so a list read from JSON
//! already satisfies the invariants.
//!
//! Backed by `im::Vector` so that snapshotting a deck (for reports, saves or
//! the UI) is O(1).

use im::Vector;
use serde::{Deserialize, Deserializer, Serialize};

use crate::cards::{Card, CardId};

/// A card and how many copies of it a zone holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub card: Card,
    pub count: u32,
}

impl ZoneEntry {
    /// Create an entry holding a single copy.
    #[must_use]
    pub fn single(card: Card) -> Self {
        Self { card, count: 1 }
    }
}

/// Ordered entries of one zone, unique by card id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZoneList {
    entries: Vector<ZoneEntry>,
}

impl ZoneList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &CardId) -> Option<usize> {
        self.entries.iter().position(|e| &e.card.id == id)
    }

    /// Add one copy of `card`, clamping the count at `cap` if given.
    ///
    /// Returns the resulting count.
    pub fn increment(&mut self, card: &Card, cap: Option<u32>) -> u32 {
        match self.position(&card.id) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                let next = entry.count.saturating_add(1);
                entry.count = cap.map_or(next, |c| next.min(c.max(1)));
                entry.count
            }
            None => {
                self.entries.push_back(ZoneEntry::single(card.clone()));
                1
            }
        }
    }

    /// Insert a single copy of `card` unless its id is already present.
    ///
    /// Returns `true` if inserted.
    pub fn insert_unique(&mut self, card: &Card) -> bool {
        if self.contains(&card.id) {
            return false;
        }
        self.entries.push_back(ZoneEntry::single(card.clone()));
        true
    }

    /// Remove one copy of `id`, dropping the entry at zero.
    ///
    /// Returns the remaining count, or `None` if the id was absent.
    pub fn decrement(&mut self, id: &CardId) -> Option<u32> {
        let idx = self.position(id)?;
        if self.entries[idx].count > 1 {
            let entry = &mut self.entries[idx];
            entry.count -= 1;
            Some(entry.count)
        } else {
            self.entries.remove(idx);
            Some(0)
        }
    }

    /// Remove the entry for `id` regardless of count.
    pub fn remove(&mut self, id: &CardId) -> Option<ZoneEntry> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx))
    }

    /// Get the entry for `id`.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&ZoneEntry> {
        self.entries.iter().find(|e| &e.card.id == id)
    }

    /// Copies of `id` held, 0 if absent.
    #[must_use]
    pub fn count_of(&self, id: &CardId) -> u32 {
        self.get(id).map_or(0, |e| e.count)
    }

    /// Check if the list holds `id`.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    /// Sum of all entry counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.count))
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneEntry> {
        self.entries.iter()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a ZoneList {
    type Item = &'a ZoneEntry;
    type IntoIter = im::vector::Iter<'a, ZoneEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<ZoneEntry> for ZoneList {
    /// Build a list, merging duplicate ids and dropping zero counts.
    fn from_iter<I: IntoIterator<Item = ZoneEntry>>(iter: I) -> Self {
        let mut list = ZoneList::new();
        for entry in iter {
            if entry.count == 0 {
                continue;
            }
            match list.position(&entry.card.id) {
                Some(idx) => {
                    let merged = &mut list.entries[idx].count;
                    *merged = merged.saturating_add(entry.count);
                }
                None => list.entries.push_back(entry),
            }
        }
        list
    }
}

impl<'de> Deserialize<'de> for ZoneList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ZoneEntry>::deserialize(deserializer).map(|entries| entries.into_iter().collect())
    }
}
