//! Deck composition: the owned, mutable state of a builder session.
//!
//! - `DeckComposition`: legend + main/rune/battlefield zones with a narrow
//!   mutation API and derived reads
//! - `SavedDeck`: the `{legend, mainDeck, runeDeck, battlefieldDeck}` payload
//!   accepted by deck stores

pub mod composition;
pub mod saved;

pub use composition::DeckComposition;
pub use saved::SavedDeck;
