//! Deck legality rules.
//!
//! `validate` is a pure function from the four zones (plus `DeckRules`) to a
//! `ValidationReport`. Validation is observational only: nothing in this
//! module mutates a deck.

pub mod validator;

pub use validator::{validate, ValidationReport, DUPLICATE_BATTLEFIELD_ERROR};
