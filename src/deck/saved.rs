//! Serialized deck handed to the persistence collaborator.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::zones::ZoneEntry;

/// A named, finished deck: `{legend, mainDeck, runeDeck, battlefieldDeck}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDeck {
    pub name: String,
    pub legend: Option<Card>,
    pub main_deck: Vec<ZoneEntry>,
    pub rune_deck: Vec<ZoneEntry>,
    pub battlefield_deck: Vec<ZoneEntry>,
}

impl SavedDeck {
    /// Total cards across every zone, legend included.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        let zones = [&self.main_deck, &self.rune_deck, &self.battlefield_deck];
        zones
            .iter()
            .flat_map(|z| z.iter())
            .fold(u32::from(self.legend.is_some()), |acc, e| {
                acc.saturating_add(e.count)
            })
    }
}
