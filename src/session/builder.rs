//! Builder session: the single owner of a deck in progress.
//!
//! All UI events go through `BuilderSession`, which forwards them to the
//! drag machine and deck mutators and recomputes the report on demand.

use tracing::{info, warn};

use super::store::{DeckId, DeckStore, Identity};
use crate::cards::Card;
use crate::core::config::DeckRules;
use crate::core::error::SaveError;
use crate::deck::{DeckComposition, SavedDeck};
use crate::drag::{DragController, DragEffect, DragOrigin, DragState, DropTarget};
use crate::rules::ValidationReport;
use crate::zones::Zone;

/// A deck-building session.
///
/// ## Example
///
/// ```
/// use deckforge::cards::Card;
/// use deckforge::drag::{DragOrigin, DropTarget};
/// use deckforge::session::BuilderSession;
///
/// let mut session = BuilderSession::default();
/// let legend = Card::new("L", "Jinx", "Legend").with_faction("Fury");
///
/// session.drag_start(legend, DragOrigin::Grid);
/// session.drag_end(Some(DropTarget::DeckList));
///
/// let report = session.report();
/// assert_eq!(report.domain_identity, vec!["Fury".to_string()]);
/// assert!(!report.is_deck_valid);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BuilderSession {
    deck: DeckComposition,
    drag: DragController,
}

impl BuilderSession {
    /// Start an empty session under `rules`.
    #[must_use]
    pub fn new(rules: DeckRules) -> Self {
        Self {
            deck: DeckComposition::with_rules(rules),
            drag: DragController::new(),
        }
    }

    /// Resume editing a saved deck.
    #[must_use]
    pub fn from_saved(saved: &SavedDeck, rules: DeckRules) -> Self {
        Self {
            deck: DeckComposition::from_saved(saved, rules),
            drag: DragController::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &DeckComposition {
        &self.deck
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Current legality report.
    #[must_use]
    pub fn report(&self) -> ValidationReport {
        self.deck.validate()
    }

    /// Add a card directly (click-to-add).
    pub fn add_card(&mut self, card: &Card) -> Zone {
        self.deck.add_card(card)
    }

    /// Pick up a card.
    pub fn drag_start(&mut self, card: Card, origin: DragOrigin) {
        self.drag.drag_start(card, origin);
    }

    /// Release the dragged card.
    pub fn drag_end(&mut self, target: Option<DropTarget>) -> Option<DragEffect> {
        self.drag.drag_end(target, &mut self.deck)
    }

    /// Start over with an empty deck.
    pub fn reset(&mut self) {
        self.deck.clear();
        self.drag = DragController::new();
    }

    /// Save the deck under `name`.
    ///
    /// Requires a signed-in user, a non-blank name and a legal deck. The
    /// session is left unchanged whether or not the store accepts the deck.
    pub fn save<S: DeckStore>(
        &self,
        name: &str,
        identity: Option<&Identity>,
        store: &mut S,
    ) -> Result<DeckId, SaveError> {
        let Some(identity) = identity else {
            warn!("save rejected: not signed in");
            return Err(SaveError::NotSignedIn);
        };

        let name = name.trim();
        if name.is_empty() {
            warn!("save rejected: empty deck name");
            return Err(SaveError::EmptyName);
        }

        let report = self.report();
        if !report.is_deck_valid {
            let errors = report.problems(self.deck.rules());
            warn!(problems = errors.len(), "save rejected: deck is not legal");
            return Err(SaveError::InvalidDeck { errors });
        }

        let id = store.create_deck(identity, &self.deck.to_saved(name))?;
        info!(deck = %id, user = %identity.user_id, "deck saved");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryDeckStore;

    struct FailingStore;

    impl DeckStore for FailingStore {
        fn create_deck(&mut self, _: &Identity, _: &SavedDeck) -> Result<DeckId, SaveError> {
            Err(SaveError::Store("database offline".into()))
        }
    }

    fn legal_session() -> BuilderSession {
        let mut session = BuilderSession::default();
        session.add_card(&Card::new("L", "Jinx", "Legend").with_faction("Fury"));
        for i in 0..14 {
            let card = Card::new(format!("U{}", i), format!("Unit {}", i), "Unit").with_faction("Fury");
            for _ in 0..3 {
                session.add_card(&card);
            }
        }
        // 14 * 3 = 42, trim to 40
        session.drag_start(Card::new("U0", "Unit 0", "Unit"), DragOrigin::DeckList(Zone::Main));
        session.drag_end(None);
        session.drag_start(Card::new("U1", "Unit 1", "Unit"), DragOrigin::DeckList(Zone::Main));
        session.drag_end(None);

        let rune = Card::new("R", "Fury Rune", "Rune").with_faction("Fury");
        for _ in 0..12 {
            session.add_card(&rune);
        }
        for name in ["Altar", "Grove", "Forge"] {
            session.add_card(&Card::new(name, name, "Battlefield").with_faction("Fury"));
        }
        session
    }

    #[test]
    fn test_legal_session_saves() {
        let session = legal_session();
        assert!(session.report().is_deck_valid);

        let mut store = MemoryDeckStore::new();
        let user = Identity::new("alice", "token");
        let id = session.save("  Burn  ", Some(&user), &mut store).unwrap();

        let saved = store.get(&id).unwrap();
        assert_eq!(saved.name, "Burn");
        assert_eq!(saved.card_count(), 40 + 12 + 3 + 1);
    }

    #[test]
    fn test_save_requires_identity_and_name() {
        let session = legal_session();
        let mut store = MemoryDeckStore::new();

        assert!(matches!(
            session.save("Burn", None, &mut store),
            Err(SaveError::NotSignedIn)
        ));
        assert!(matches!(
            session.save("   ", Some(&Identity::new("a", "t")), &mut store),
            Err(SaveError::EmptyName)
        ));
        assert_eq!(store.decks_of("a").count(), 0);
    }

    #[test]
    fn test_save_rejects_illegal_deck() {
        let session = BuilderSession::default();
        let mut store = MemoryDeckStore::new();

        let err = session
            .save("Empty", Some(&Identity::new("a", "t")), &mut store)
            .unwrap_err();
        match err {
            SaveError::InvalidDeck { errors } => assert_eq!(errors, vec!["Choose a Legend."]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_store_failure_leaves_deck_untouched() {
        let session = legal_session();
        let before = session.deck().clone();

        let result = session.save("Burn", Some(&Identity::new("a", "t")), &mut FailingStore);
        assert!(matches!(result, Err(SaveError::Store(_))));
        assert_eq!(session.deck(), &before);
    }

    #[test]
    fn test_reset() {
        let mut session = legal_session();
        session.drag_start(Card::new("x", "X", "Unit"), DragOrigin::Grid);
        session.reset();

        assert!(session.deck().legend().is_none());
        assert!(session.deck().main_deck().is_empty());
        assert!(!session.drag_state().is_dragging());
    }

    #[test]
    fn test_resume_from_saved() {
        let session = legal_session();
        let saved = session.deck().to_saved("Burn");

        let resumed = BuilderSession::from_saved(&saved, DeckRules::default());
        assert_eq!(resumed.report(), session.report());
    }
}
