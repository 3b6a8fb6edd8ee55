//! Deck zones and the router that assigns cards to them.
//!
//! Routing precedence, first match wins:
//! 1. "Legend" type token -> `Zone::Legend`
//! 2. "Rune" -> `Zone::Rune`
//! 3. "Battlefield" -> `Zone::Battlefield`
//! 4. anything else -> `Zone::Main`
//!
//! The catalog's category filter (`catalog::Category`) is defined in terms of
//! `route`, so the browser and the add path never disagree.

use serde::{Deserialize, Serialize};

use crate::cards::{classify, Card};

/// One of the four card containers of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Legend,
    Main,
    Rune,
    Battlefield,
}

impl Zone {
    /// All zones in display order.
    pub const ALL: [Zone; 4] = [Zone::Legend, Zone::Main, Zone::Rune, Zone::Battlefield];

    /// Tag used by the deck list when a card is dragged out of this zone.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Zone::Legend => "legend",
            Zone::Main => "main",
            Zone::Rune => "rune",
            Zone::Battlefield => "battlefield",
        }
    }

    /// Parse a deck-list zone tag. Unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Zone> {
        Zone::ALL.into_iter().find(|z| z.tag() == tag)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Decide which zone receives `card`.
#[must_use]
pub fn route(card: &Card) -> Zone {
    if classify::has_type(card, "Legend") {
        Zone::Legend
    } else if classify::has_type(card, "Rune") {
        Zone::Rune
    } else if classify::has_type(card, "Battlefield") {
        Zone::Battlefield
    } else {
        Zone::Main
    }
}
