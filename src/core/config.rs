//! Deck construction rules.
//!
//! Every numeric limit the validator and mutators enforce lives in
//! `DeckRules`. The two rules that differ between published variants of the
//! format are explicit settings rather than hidden assumptions:
//! - `rune_copy_limit`: per-card cap on rune copies (`None` = uncapped)
//! - `require_champion_match`: whether "Champion" typed main deck cards must
//!   carry the legend's champion tag

use serde::{Deserialize, Serialize};

/// Tags that never identify a champion.
///
/// Region names and generic keywords appear in `tags` next to the champion
/// label, so the champion tag is the first tag *not* in this list.
pub const DEFAULT_NON_CHAMPION_TAGS: &[&str] = &[
    "Signature",
    "Elite",
    "Bird",
    "Pirate",
    "Ionia",
    "Demacia",
    "Noxus",
    "Freljord",
    "Piltover",
    "Zaun",
    "Bilgewater",
    "Targon",
    "Shurima",
    "Shadow Isles",
    "Bandle City",
    "Runeterra",
];

/// Rule set for a constructed deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRules {
    /// Exact number of cards the main deck must hold.
    pub main_deck_size: u32,

    /// Exact number of cards the rune deck must hold.
    pub rune_deck_size: u32,

    /// Exact number of battlefields.
    pub battlefield_deck_size: u32,

    /// Maximum copies of one card id in the main deck.
    pub main_copy_limit: u32,

    /// Maximum copies of one card id in the rune deck. `None` for unlimited.
    pub rune_copy_limit: Option<u32>,

    /// Maximum total Signature cards in the main deck.
    pub signature_limit: u32,

    /// Champion-typed cards must share the legend's champion tag.
    pub require_champion_match: bool,

    /// Tags skipped when deriving a champion tag.
    pub non_champion_tags: Vec<String>,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            main_deck_size: 40,
            rune_deck_size: 12,
            battlefield_deck_size: 3,
            main_copy_limit: 3,
            rune_copy_limit: None,
            signature_limit: 3,
            require_champion_match: false,
            non_champion_tags: DEFAULT_NON_CHAMPION_TAGS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
        }
    }
}

impl DeckRules {
    /// Cap rune copies per card.
    #[must_use]
    pub fn with_rune_copy_limit(mut self, limit: u32) -> Self {
        self.rune_copy_limit = Some(limit);
        self
    }

    /// Require Champion cards to match the legend's champion tag.
    #[must_use]
    pub fn with_champion_match(mut self, required: bool) -> Self {
        self.require_champion_match = required;
        self
    }

    /// Override the main deck size.
    #[must_use]
    pub fn with_main_deck_size(mut self, size: u32) -> Self {
        self.main_deck_size = size;
        self
    }

    /// Override the rune deck size.
    #[must_use]
    pub fn with_rune_deck_size(mut self, size: u32) -> Self {
        self.rune_deck_size = size;
        self
    }

    /// Replace the champion tag denylist.
    #[must_use]
    pub fn with_non_champion_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_champion_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a tag is on the denylist.
    #[must_use]
    pub fn is_non_champion_tag(&self, tag: &str) -> bool {
        self.non_champion_tags.iter().any(|t| t == tag)
    }
}
