//! Identity and persistence collaborators.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::SaveError;
use crate::deck::SavedDeck;

/// Authenticated user, as supplied by the identity collaborator.
///
/// The builder only checks that one is present; the token is forwarded to
/// the store untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub token: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }
}

/// Generated identifier of a stored deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(pub String);

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistence collaborator for finished decks.
pub trait DeckStore {
    /// Store `deck` for `owner`, returning its new id.
    fn create_deck(&mut self, owner: &Identity, deck: &SavedDeck) -> Result<DeckId, SaveError>;
}

/// Deck store kept in memory, keyed by owner.
#[derive(Clone, Debug, Default)]
pub struct MemoryDeckStore {
    decks: FxHashMap<String, Vec<(DeckId, SavedDeck)>>,
    next_id: u32,
}

impl MemoryDeckStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decks saved by `user_id`, oldest first.
    pub fn decks_of(&self, user_id: &str) -> impl Iterator<Item = &(DeckId, SavedDeck)> {
        self.decks.get(user_id).into_iter().flatten()
    }

    /// Look up a deck by id.
    #[must_use]
    pub fn get(&self, id: &DeckId) -> Option<&SavedDeck> {
        self.decks
            .values()
            .flatten()
            .find(|(d, _)| d == id)
            .map(|(_, deck)| deck)
    }
}

impl DeckStore for MemoryDeckStore {
    fn create_deck(&mut self, owner: &Identity, deck: &SavedDeck) -> Result<DeckId, SaveError> {
        self.next_id += 1;
        let id = DeckId(format!("deck-{}", self.next_id));
        self.decks
            .entry(owner.user_id.clone())
            .or_default()
            .push((id.clone(), deck.clone()));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(name: &str) -> SavedDeck {
        SavedDeck {
            name: name.into(),
            legend: None,
            main_deck: Vec::new(),
            rune_deck: Vec::new(),
            battlefield_deck: Vec::new(),
        }
    }

    #[test]
    fn test_memory_store_assigns_ids() {
        let mut store = MemoryDeckStore::new();
        let alice = Identity::new("alice", "t1");
        let bob = Identity::new("bob", "t2");

        let a1 = store.create_deck(&alice, &deck("A1")).unwrap();
        let b1 = store.create_deck(&bob, &deck("B1")).unwrap();
        let a2 = store.create_deck(&alice, &deck("A2")).unwrap();

        assert_ne!(a1, a2);
        assert_eq!(store.decks_of("alice").count(), 2);
        assert_eq!(store.decks_of("bob").count(), 1);
        assert_eq!(store.decks_of("carol").count(), 0);
        assert_eq!(store.get(&b1).map(|d| d.name.as_str()), Some("B1"));
    }
}
