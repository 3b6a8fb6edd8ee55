//! Catalog collaborator interface and an in-memory implementation.
//!
//! The builder only consumes `CardCatalog`; storage and indexing belong to
//! whoever implements it. `InMemoryCatalog` serves tests, fixtures and
//! offline use.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::filter::CardFilters;
use crate::cards::{Card, CardId};
use crate::core::error::CatalogError;

/// Source of catalog cards.
pub trait CardCatalog {
    /// Cards matching `filters`, in the order the filters request.
    fn search(&self, filters: &CardFilters) -> Result<Vec<Card>, CatalogError>;

    /// Look up one card.
    fn get(&self, id: &CardId) -> Result<Option<Card>, CatalogError>;
}

/// Card catalog held in memory.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, CardId};
/// use deckforge::catalog::{CardCatalog, CardFilters, Category, InMemoryCatalog};
///
/// let mut catalog = InMemoryCatalog::new();
/// catalog.insert(Card::new("1", "Jinx", "Legend"));
/// catalog.insert(Card::new("2", "Fury Rune", "Rune"));
///
/// let runes = catalog
///     .search(&CardFilters::default().with_category(Category::Rune))
///     .unwrap();
/// assert_eq!(runes.len(), 1);
/// assert_eq!(runes[0].id, CardId::new("2"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    cards: FxHashMap<CardId, Card>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of card records.
    ///
    /// Later records replace earlier ones with the same id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        let catalog: Self = cards.into_iter().collect();
        debug!(cards = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Insert or replace a card. Returns the replaced card, if any.
    pub fn insert(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.id.clone(), card)
    }

    /// Check if a card id is known.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards, unordered.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

impl FromIterator<Card> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for card in iter {
            catalog.insert(card);
        }
        catalog
    }
}

impl CardCatalog for InMemoryCatalog {
    fn search(&self, filters: &CardFilters) -> Result<Vec<Card>, CatalogError> {
        let mut found: Vec<Card> = self
            .cards
            .values()
            .filter(|c| filters.matches(c))
            .cloned()
            .collect();
        found.sort_by(|a, b| filters.compare(a, b));
        debug!(matches = found.len(), category = ?filters.category, "catalog search");
        Ok(found)
    }

    fn get(&self, id: &CardId) -> Result<Option<Card>, CatalogError> {
        Ok(self.cards.get(id).cloned())
    }
}
