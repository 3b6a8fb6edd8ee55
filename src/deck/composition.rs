//! The deck under construction.
//!
//! `DeckComposition` is the only mutable aggregate of the builder. Its fields
//! are private: cards enter through `add_card` (or the per-zone mutators) and
//! leave through the `remove_*` family, so the zone invariants hold after
//! every call:
//! - one entry per card id in every zone
//! - no zero-count entries
//! - battlefield entries always have count 1
//! - a card only ever sits in the zone `route` assigns it
//!
//! Legality (deck sizes, domains, signatures) is *not* enforced here; it is
//! reported by `rules::validate`.
//!
//! There is no `Deserialize` impl. Persisted decks come back through
//! `DeckComposition::from_saved`, which restores the invariants above.

use serde::Serialize;
use tracing::{debug, trace};

use crate::cards::{classify, Card, CardId, Tokens};
use crate::core::config::DeckRules;
use crate::rules::{validate, ValidationReport};
use crate::zones::{route, Zone, ZoneEntry, ZoneList};

use super::saved::SavedDeck;

/// Legend plus the main, rune and battlefield zones.
///
/// ## Example
///
/// ```
/// use deckforge::cards::Card;
/// use deckforge::deck::DeckComposition;
/// use deckforge::zones::Zone;
///
/// let mut deck = DeckComposition::new();
///
/// let zone = deck.add_card(&Card::new("L1", "Jinx", "Legend").with_faction("Fury Chaos"));
/// assert_eq!(zone, Zone::Legend);
///
/// for _ in 0..4 {
///     deck.add_card(&Card::new("U1", "Rebel", "Unit").with_faction("Fury"));
/// }
/// assert_eq!(deck.main_deck().total(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeckComposition {
    legend: Option<Card>,
    main_deck: ZoneList,
    rune_deck: ZoneList,
    battlefield_deck: ZoneList,
    rules: DeckRules,
}

impl DeckComposition {
    /// Create an empty deck with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck governed by `rules`.
    #[must_use]
    pub fn with_rules(rules: DeckRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    // === Reads ===

    /// The selected legend, if any.
    #[must_use]
    pub fn legend(&self) -> Option<&Card> {
        self.legend.as_ref()
    }

    #[must_use]
    pub fn main_deck(&self) -> &ZoneList {
        &self.main_deck
    }

    #[must_use]
    pub fn rune_deck(&self) -> &ZoneList {
        &self.rune_deck
    }

    #[must_use]
    pub fn battlefield_deck(&self) -> &ZoneList {
        &self.battlefield_deck
    }

    /// Rules this deck is built against.
    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// Domains of the legend; empty without a legend.
    #[must_use]
    pub fn domain_identity(&self) -> Tokens<'_> {
        self.legend
            .as_ref()
            .map(classify::domain_tokens)
            .unwrap_or_default()
    }

    /// The legend's champion tag.
    #[must_use]
    pub fn champion_tag(&self) -> Option<&str> {
        self.legend
            .as_ref()
            .and_then(|l| classify::champion_tag_with(l, &self.rules))
    }

    /// The champion shown in the champion slot.
    ///
    /// First main deck card typed "Champion Unit" that shares a tag with the
    /// legend. `None` without a legend.
    #[must_use]
    pub fn chosen_champion(&self) -> Option<&Card> {
        let legend = self.legend.as_ref()?;
        self.main_deck
            .iter()
            .map(|e| &e.card)
            .find(|c| classify::is_champion_unit(c) && c.shares_tag_with(legend))
    }

    /// Main deck entries as listed beside the champion slot.
    ///
    /// One copy of the chosen champion is shown in the slot, so it is
    /// subtracted here; entries left at zero are omitted.
    #[must_use]
    pub fn main_deck_display(&self) -> Vec<ZoneEntry> {
        let champion = self.chosen_champion().map(|c| c.id.clone());
        self.main_deck
            .iter()
            .filter_map(|e| {
                let shown = if champion.as_ref() == Some(&e.card.id) {
                    e.count - 1
                } else {
                    e.count
                };
                (shown > 0).then(|| ZoneEntry {
                    card: e.card.clone(),
                    count: shown,
                })
            })
            .collect()
    }

    /// Full legality report for the current zones.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate(
            self.legend.as_ref(),
            &self.main_deck,
            &self.rune_deck,
            &self.battlefield_deck,
            &self.rules,
        )
    }

    // === Mutations ===

    /// Route `card` and add it to the zone it belongs to.
    ///
    /// Returns the zone the card was routed to.
    pub fn add_card(&mut self, card: &Card) -> Zone {
        let zone = route(card);
        debug!(card = %card.id, %zone, "routing card");
        match zone {
            Zone::Legend => {
                self.set_legend(card);
            }
            Zone::Main => {
                self.add_to_main(card);
            }
            Zone::Rune => {
                self.add_to_rune(card);
            }
            Zone::Battlefield => {
                self.add_to_battlefield(card);
            }
        }
        zone
    }

    fn accepts(&self, card: &Card, zone: Zone) -> bool {
        let routed = route(card);
        if routed != zone {
            debug!(card = %card.id, %zone, %routed, "card does not belong in zone, ignored");
            return false;
        }
        true
    }

    /// Replace the legend. Returns `false` if `card` is not a Legend.
    pub fn set_legend(&mut self, card: &Card) -> bool {
        if !self.accepts(card, Zone::Legend) {
            return false;
        }
        trace!(card = %card.id, "set legend");
        self.legend = Some(card.clone());
        true
    }

    /// Clear the legend, returning the previous one.
    pub fn remove_legend(&mut self) -> Option<Card> {
        trace!("remove legend");
        self.legend.take()
    }

    /// Add one main deck copy, clamped at the copy limit.
    ///
    /// Returns the resulting count (0 if the card belongs elsewhere).
    pub fn add_to_main(&mut self, card: &Card) -> u32 {
        if !self.accepts(card, Zone::Main) {
            return 0;
        }
        let count = self
            .main_deck
            .increment(card, Some(self.rules.main_copy_limit));
        trace!(card = %card.id, count, "add to main deck");
        count
    }

    /// Add one rune copy, clamped only if `rune_copy_limit` is set.
    ///
    /// Returns the resulting count (0 if the card belongs elsewhere).
    pub fn add_to_rune(&mut self, card: &Card) -> u32 {
        if !self.accepts(card, Zone::Rune) {
            return 0;
        }
        let count = self.rune_deck.increment(card, self.rules.rune_copy_limit);
        trace!(card = %card.id, count, "add to rune deck");
        count
    }

    /// Add a battlefield. A second add of the same id is a no-op.
    ///
    /// Returns `true` if the battlefield was inserted.
    pub fn add_to_battlefield(&mut self, card: &Card) -> bool {
        if !self.accepts(card, Zone::Battlefield) {
            return false;
        }
        let inserted = self.battlefield_deck.insert_unique(card);
        trace!(card = %card.id, inserted, "add to battlefield deck");
        inserted
    }

    /// Remove one main deck copy. Returns the remaining count.
    pub fn remove_one_from_main(&mut self, id: &CardId) -> Option<u32> {
        trace!(card = %id, "remove one from main deck");
        self.main_deck.decrement(id)
    }

    /// Remove one rune copy. Returns the remaining count.
    pub fn remove_one_from_rune(&mut self, id: &CardId) -> Option<u32> {
        trace!(card = %id, "remove one from rune deck");
        self.rune_deck.decrement(id)
    }

    /// Remove a battlefield. Returns `true` if it was present.
    pub fn remove_from_battlefield(&mut self, id: &CardId) -> bool {
        trace!(card = %id, "remove from battlefield deck");
        self.battlefield_deck.remove(id).is_some()
    }

    /// Remove one instance of `id` from `zone`.
    ///
    /// For the legend zone the legend is cleared whatever its id.
    pub fn remove_one(&mut self, zone: Zone, id: &CardId) {
        match zone {
            Zone::Legend => {
                self.remove_legend();
            }
            Zone::Main => {
                self.remove_one_from_main(id);
            }
            Zone::Rune => {
                self.remove_one_from_rune(id);
            }
            Zone::Battlefield => {
                self.remove_from_battlefield(id);
            }
        }
    }

    /// Empty every zone, keeping the rules.
    pub fn clear(&mut self) {
        debug!("clearing deck");
        self.legend = None;
        self.main_deck.clear();
        self.rune_deck.clear();
        self.battlefield_deck.clear();
    }

    // === Persistence shape ===

    /// Snapshot the deck in the shape the persistence collaborator accepts.
    #[must_use]
    pub fn to_saved(&self, name: impl Into<String>) -> SavedDeck {
        SavedDeck {
            name: name.into(),
            legend: self.legend.clone(),
            main_deck: self.main_deck.iter().cloned().collect(),
            rune_deck: self.rune_deck.iter().cloned().collect(),
            battlefield_deck: self.battlefield_deck.iter().cloned().collect(),
        }
    }

    /// Rebuild a deck from a saved snapshot.
    ///
    /// Saved counts are kept as-is so an over-limit deck still reports its
    /// violations, but zone invariants are restored: cards are dropped from
    /// zones they do not route to, duplicate ids are merged, and battlefield
    /// entries collapse to a single copy.
    #[must_use]
    pub fn from_saved(saved: &SavedDeck, rules: DeckRules) -> Self {
        let in_zone = |entries: &[ZoneEntry], zone: Zone| -> ZoneList {
            entries
                .iter()
                .filter(|e| route(&e.card) == zone)
                .cloned()
                .collect()
        };

        let mut battlefield_deck = ZoneList::new();
        for entry in saved
            .battlefield_deck
            .iter()
            .filter(|e| e.count > 0 && route(&e.card) == Zone::Battlefield)
        {
            battlefield_deck.insert_unique(&entry.card);
        }

        Self {
            legend: saved
                .legend
                .clone()
                .filter(|l| route(l) == Zone::Legend),
            main_deck: in_zone(&saved.main_deck, Zone::Main),
            rune_deck: in_zone(&saved.rune_deck, Zone::Rune),
            battlefield_deck,
            rules,
        }
    }
}
