//! # deckforge
//!
//! Constructed-deck builder core for a Legend/Rune/Battlefield card game.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: A `DeckComposition` is owned by one builder session and
//!    only changes through its mutators. Fields are never exposed mutably.
//!
//! 2. **Validation Is Observation**: `rules::validate` is a pure function of
//!    the four zones. It is cheap enough to rerun after every mutation and
//!    never feeds back into the deck.
//!
//! 3. **Closed Zones**: Card types are parsed once by the router into the
//!    `Zone` enum; the catalog category filter uses the same router.
//!
//! ## Modules
//!
//! - `core`: Rule configuration and collaborator errors
//! - `cards`: Card records and the classifier
//! - `zones`: Zone enum, router and counted zone lists
//! - `deck`: Deck composition and the saved-deck payload
//! - `rules`: Validator and validation report
//! - `drag`: Drag-transfer state machine
//! - `catalog`: Filter descriptor and catalog collaborator
//! - `session`: Builder session, identity and deck store collaborators

pub mod core;
pub mod cards;
pub mod zones;
pub mod deck;
pub mod rules;
pub mod drag;
pub mod catalog;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CatalogError, DeckRules, SaveError};

pub use crate::cards::{Card, CardArt, CardId, CardStats};

pub use crate::zones::{route, Zone, ZoneEntry, ZoneList};

pub use crate::deck::{DeckComposition, SavedDeck};

pub use crate::rules::{validate, ValidationReport};

pub use crate::drag::{
    transition, DragController, DragEffect, DragEvent, DragOrigin, DragState, DropTarget,
};

pub use crate::catalog::{CardCatalog, CardFilters, Category, InMemoryCatalog, SortKey, SortOrder};

pub use crate::session::{BuilderSession, DeckId, DeckStore, Identity, MemoryDeckStore};
