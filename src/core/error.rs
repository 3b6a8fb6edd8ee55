//! Errors raised at collaborator boundaries.
//!
//! Deck mutation and validation never fail; rule violations are data in the
//! `ValidationReport`. Only the catalog and persistence seams return errors.

/// Failure to obtain cards from a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse card catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Failure to save a finished deck.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("You must be logged in to save a deck")]
    NotSignedIn,

    #[error("Deck name must not be empty")]
    EmptyName,

    #[error("Deck is not legal ({} rule violations)", errors.len())]
    InvalidDeck { errors: Vec<String> },

    #[error("Deck store rejected the deck: {0}")]
    Store(String),
}
